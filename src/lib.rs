pub mod config;
pub mod delivery;
pub mod email;
pub mod error;
pub mod formatter;
pub mod job;
pub mod providers;
pub mod scheduler;
pub mod task;

// Re-export commonly used types
pub use config::AlertConfig;
pub use delivery::{DeliveryChannel, SmtpChannel};
pub use email::{EmailComposer, OutgoingEmail};
pub use error::AlertError;
pub use formatter::{format_plan, LineAnnotation};
pub use job::DeliveryJob;
pub use providers::{LlmProvider, ProviderFactory};
pub use scheduler::DailySchedule;

use chrono::NaiveDate;

/// Generate and send a single plan using the given configuration.
pub async fn send_daily_plan(config: &AlertConfig) -> Result<(), AlertError> {
    let job = DeliveryJob::from_config(config)?;
    job.run_for(chrono::Local::now().date_naive()).await
}

/// Render a saved plan into the full email document, without any network calls.
pub fn render_email(config: &AlertConfig, plan: &str, date: NaiveDate) -> String {
    EmailComposer::from_config(config).render_document(plan, date)
}

/// Run the scheduler loop until the process is stopped.
pub async fn run_scheduled(config: &AlertConfig) -> Result<(), AlertError> {
    let schedule = DailySchedule::parse(&config.schedule.daily_send_time)?;
    let job = DeliveryJob::from_config(config)?;
    schedule
        .run_forever(&job, config.schedule.run_on_start)
        .await;
    Ok(())
}
