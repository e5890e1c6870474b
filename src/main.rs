use chrono::Local;
use clap::{Parser, Subcommand};
use log::{error, info};
use nutrition_alert::task::{Registered, TaskRegistration};
use nutrition_alert::{render_email, run_scheduled, AlertConfig, AlertError, DeliveryJob};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nutrition-alert")]
#[command(about = "Emails an AI-generated daily nutrition plan", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Same as the `once` subcommand
    #[arg(long, hide = true)]
    test_only: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// The command to execute; `--test-only` wins over any subcommand
    fn resolved_command(&mut self) -> Commands {
        if self.test_only {
            return Commands::Once;
        }
        self.command.take().unwrap_or(Commands::Run)
    }
}

#[derive(Debug, PartialEq, Subcommand)]
enum Commands {
    /// Send a plan every day at the configured time (default)
    Run,
    /// Send a single plan now, without scheduling
    #[command(visible_alias = "test-only")]
    Once,
    /// Register a daily task with the operating system scheduler
    RegisterTask,
    /// Format a saved plan into the email document
    Render {
        /// Plan text file
        input: PathBuf,
        /// Where to write the HTML (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<AlertConfig, AlertError> {
    let config = match path {
        Some(path) => AlertConfig::load_from(path)?,
        None => AlertConfig::load()?,
    };
    Ok(config)
}

fn banner(config: &AlertConfig, title: &str) {
    info!("{}", "=".repeat(60));
    info!("{}", title);
    info!("Diet Type: {}", config.preferences.diet_type);
    info!("Target Calories: {}", config.preferences.calories_per_day);
    info!("Send Time: {}", config.schedule.daily_send_time);
    info!("{}", "=".repeat(60));
}

async fn execute(mut cli: Cli) -> Result<(), AlertError> {
    let config = load_config(cli.config.as_ref())?;

    match cli.resolved_command() {
        Commands::Run => {
            banner(&config, "Starting Nutrition Food Alert Agent...");
            run_scheduled(&config).await
        }
        Commands::Once => {
            banner(&config, "Sending a single nutrition plan (no scheduling)");
            let job = DeliveryJob::from_config(&config)?;
            job.run_for(Local::now().date_naive()).await?;
            info!("Daily nutrition plan delivered successfully!");
            Ok(())
        }
        Commands::RegisterTask => {
            match TaskRegistration::for_current_exe(cli.config.as_deref())?.register()? {
                Registered::WindowsTask { start_time } => {
                    println!(
                        "Task created. The nutrition agent will run daily at {}.",
                        start_time.format("%H:%M")
                    );
                }
                Registered::CrontabEntry(line) => {
                    println!("Add this line to your crontab (crontab -e):");
                    println!("{}", line);
                }
            }
            Ok(())
        }
        Commands::Render { input, output } => {
            let plan = tokio::fs::read_to_string(&input).await?;
            let html = render_email(&config, &plan, Local::now().date_naive());
            match output {
                Some(path) => {
                    tokio::fs::write(&path, html).await?;
                    info!("Wrote {}", path.display());
                }
                None => println!("{}", html),
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    match execute(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
