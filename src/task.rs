//! Registers the agent with the operating system's task scheduler, so a
//! single delivery runs every day without a long-lived process.

use crate::AlertError;
use chrono::{Duration as ChronoDuration, Local, NaiveTime};
use log::info;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const TASK_NAME: &str = "NutritionFoodAlertAgent";

/// Minutes from now until the first scheduled run
const FIRST_RUN_DELAY_MINUTES: i64 = 5;

/// What the OS should run, and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRegistration {
    pub task_name: String,
    pub executable: PathBuf,
    /// Absolute config path; the task runs from an unrelated working directory
    pub config_path: PathBuf,
    pub start_time: NaiveTime,
}

/// Outcome of a registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registered {
    /// The task was created with `schtasks`
    WindowsTask { start_time: NaiveTime },
    /// No scheduler we can drive; this crontab line does the same job
    CrontabEntry(String),
}

impl TaskRegistration {
    pub fn new(
        executable: impl Into<PathBuf>,
        config_path: impl Into<PathBuf>,
        start_time: NaiveTime,
    ) -> Self {
        Self {
            task_name: TASK_NAME.to_string(),
            executable: executable.into(),
            config_path: config_path.into(),
            start_time,
        }
    }

    /// Registration for the running binary, first run a few minutes from now.
    ///
    /// Without an explicit config the `config.toml` in the current directory
    /// is used. Relative paths are resolved against the current directory.
    pub fn for_current_exe(config: Option<&Path>) -> Result<Self, AlertError> {
        let start = Local::now().time() + ChronoDuration::minutes(FIRST_RUN_DELAY_MINUTES);
        let config_path = resolve_config_path(&std::env::current_dir()?, config);
        Ok(Self::new(std::env::current_exe()?, config_path, start))
    }

    fn command_line(&self) -> String {
        format!(
            "\"{}\" --config \"{}\" once",
            self.executable.display(),
            self.config_path.display()
        )
    }

    /// Arguments for `schtasks`, daily at the start time as SYSTEM
    pub fn schtasks_args(&self) -> Vec<String> {
        vec![
            "/create".to_string(),
            "/tn".to_string(),
            self.task_name.clone(),
            "/tr".to_string(),
            self.command_line(),
            "/sc".to_string(),
            "daily".to_string(),
            "/st".to_string(),
            self.start_time.format("%H:%M").to_string(),
            "/ru".to_string(),
            "SYSTEM".to_string(),
            // Replace the task if it already exists
            "/f".to_string(),
        ]
    }

    pub fn crontab_entry(&self) -> String {
        format!(
            "{} {} * * * {}",
            self.start_time.format("%-M"),
            self.start_time.format("%-H"),
            self.command_line()
        )
    }

    pub fn register(&self) -> Result<Registered, AlertError> {
        if cfg!(windows) {
            self.register_windows(Path::new("schtasks"))
        } else {
            Ok(Registered::CrontabEntry(self.crontab_entry()))
        }
    }

    fn register_windows(&self, schtasks: &Path) -> Result<Registered, AlertError> {
        let output = Command::new(schtasks).args(self.schtasks_args()).output()?;

        if !output.status.success() {
            return Err(AlertError::TaskRegistration(format!(
                "{} (you might need to run this as an administrator)",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        info!(
            "Task '{}' created, runs daily at {}",
            self.task_name,
            self.start_time.format("%H:%M")
        );
        Ok(Registered::WindowsTask {
            start_time: self.start_time,
        })
    }
}

fn resolve_config_path(cwd: &Path, config: Option<&Path>) -> PathBuf {
    match config {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join("config.toml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> TaskRegistration {
        TaskRegistration::new(
            "/opt/nutrition-alert/nutrition-alert",
            "/etc/nutrition-alert/config.toml",
            NaiveTime::from_hms_opt(6, 5, 0).unwrap(),
        )
    }

    #[test]
    fn test_schtasks_args() {
        let args = registration().schtasks_args();
        assert_eq!(
            args,
            vec![
                "/create",
                "/tn",
                "NutritionFoodAlertAgent",
                "/tr",
                "\"/opt/nutrition-alert/nutrition-alert\" --config \"/etc/nutrition-alert/config.toml\" once",
                "/sc",
                "daily",
                "/st",
                "06:05",
                "/ru",
                "SYSTEM",
                "/f",
            ]
        );
    }

    #[test]
    fn test_crontab_entry() {
        assert_eq!(
            registration().crontab_entry(),
            "5 6 * * * \"/opt/nutrition-alert/nutrition-alert\" --config \"/etc/nutrition-alert/config.toml\" once"
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_config_path_is_made_absolute() {
        let cwd = Path::new("/home/me/agent");
        assert_eq!(
            resolve_config_path(cwd, None),
            PathBuf::from("/home/me/agent/config.toml")
        );
        assert_eq!(
            resolve_config_path(cwd, Some(Path::new("conf/daily.toml"))),
            PathBuf::from("/home/me/agent/conf/daily.toml")
        );
        assert_eq!(
            resolve_config_path(cwd, Some(Path::new("/etc/nutrition-alert/config.toml"))),
            PathBuf::from("/etc/nutrition-alert/config.toml")
        );
    }

    #[test]
    fn test_for_current_exe_points_at_absolute_config() {
        let registration = TaskRegistration::for_current_exe(None).unwrap();
        assert!(registration.config_path.is_absolute());
        assert!(registration.config_path.ends_with("config.toml"));
        assert!(registration.crontab_entry().contains(" --config \""));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_register_outside_windows_returns_crontab_line() {
        let registered = registration().register().unwrap();
        assert!(matches!(registered, Registered::CrontabEntry(line) if line.ends_with(" once")));
    }

    #[test]
    fn test_missing_schtasks_binary_is_an_error() {
        let result = registration().register_windows(Path::new("/nonexistent/schtasks"));
        assert!(matches!(result, Err(AlertError::Io(_))));
    }
}
