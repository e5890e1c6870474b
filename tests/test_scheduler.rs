use async_trait::async_trait;
use nutrition_alert::config::{DietaryPreferences, ThemeConfig};
use nutrition_alert::{
    AlertError, DailySchedule, DeliveryChannel, DeliveryJob, EmailComposer, LlmProvider,
    OutgoingEmail,
};
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Provider that always fails, counting how often it was asked
struct UnavailableProvider {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl LlmProvider for UnavailableProvider {
    fn provider_name(&self) -> &str {
        "unavailable"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err("model is down".into())
    }
}

struct UnreachableChannel;

#[async_trait]
impl DeliveryChannel for UnreachableChannel {
    fn channel_name(&self) -> &str {
        "unreachable"
    }

    async fn deliver(&self, _email: &OutgoingEmail) -> Result<(), AlertError> {
        panic!("nothing should be delivered when generation fails");
    }
}

fn failing_job(calls: Arc<AtomicUsize>) -> DeliveryJob {
    let preferences = DietaryPreferences::default();
    DeliveryJob::new(
        Box::new(UnavailableProvider { calls }),
        Box::new(UnreachableChannel),
        EmailComposer::new(
            "Your Daily Nutrition Plan - {date}",
            ThemeConfig::default(),
            preferences.clone(),
        ),
        preferences,
    )
}

#[tokio::test(start_paused = true)]
async fn test_run_forever_keeps_going_after_failures() {
    let calls = Arc::new(AtomicUsize::new(0));
    let job = failing_job(calls.clone());
    let schedule = DailySchedule::parse("06:00").unwrap();

    let result = tokio::time::timeout(
        Duration::from_secs(3 * 24 * 60 * 60),
        schedule.run_forever(&job, true),
    )
    .await;

    // The loop never returns on its own
    assert!(result.is_err());
    // Start-up run plus at least one scheduled run, both failing
    assert!(calls.load(Ordering::SeqCst) >= 2);
}

#[tokio::test(start_paused = true)]
async fn test_run_forever_without_start_up_run_waits_for_slot() {
    let calls = Arc::new(AtomicUsize::new(0));
    let job = failing_job(calls.clone());
    let schedule = DailySchedule::parse("06:00").unwrap();

    let _ = tokio::time::timeout(Duration::ZERO, schedule.run_forever(&job, false)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
