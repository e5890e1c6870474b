use crate::job::DeliveryJob;
use crate::AlertError;
use chrono::{Duration as ChronoDuration, Local, NaiveDateTime, NaiveTime};
use log::info;
use std::time::Duration;

/// A fixed local time of day at which the job fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    at: NaiveTime,
}

impl DailySchedule {
    pub fn new(at: NaiveTime) -> Self {
        Self { at }
    }

    /// Parse an `HH:MM` time of day
    pub fn parse(value: &str) -> Result<Self, AlertError> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map(Self::new)
            .map_err(|_| AlertError::InvalidSendTime(value.to_string()))
    }

    pub fn at(&self) -> NaiveTime {
        self.at
    }

    /// The first slot strictly after `now`: today's if still ahead, else tomorrow's.
    pub fn next_run_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(self.at);
        if today > now {
            today
        } else {
            today + ChronoDuration::days(1)
        }
    }

    /// How long to sleep from `now` until the next slot
    pub fn delay_until_next(&self, now: NaiveDateTime) -> Duration {
        (self.next_run_after(now) - now)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// The slot after one that just fired. Slots missed while a run was
    /// still going are skipped rather than replayed.
    pub fn following_slot(&self, fired: NaiveDateTime, now: NaiveDateTime) -> NaiveDateTime {
        self.next_run_after(fired.max(now))
    }

    /// Fire the job once per day, forever.
    ///
    /// The first slot is fixed before the optional start-up run, so a slow
    /// start-up run does not skip it. Each run finishes before the next
    /// timer is armed. A failed run is already logged by the job and does
    /// not stop the loop.
    pub async fn run_forever(&self, job: &DeliveryJob, run_on_start: bool) {
        let mut next = self.next_run_after(Local::now().naive_local());

        if run_on_start {
            info!("Running initial nutrition plan now...");
            job.run().await;
        }

        loop {
            info!(
                "Next nutrition plan scheduled for {}",
                next.format("%Y-%m-%d %H:%M")
            );
            let delay = (next - Local::now().naive_local())
                .to_std()
                .unwrap_or(Duration::ZERO);
            tokio::time::sleep(delay).await;
            job.run().await;
            next = self.following_slot(next, Local::now().naive_local());
        }
    }
}
