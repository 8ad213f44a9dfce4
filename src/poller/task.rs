//! The polling loop for a single record.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::poller::state::{StatusChange, StatusTracker};
use crate::probe::{is_valid_code_url, Probe, ProbeError};
use crate::source::Record;

/// Reason a polling task stopped.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Probe(#[from] ProbeError),
}

/// Repeatedly probes one record and reports availability changes.
pub struct PollTask {
    record: Record,
    probe: Arc<dyn Probe>,
    interval: Duration,
}

impl PollTask {
    pub fn new(record: Record, probe: Arc<dyn Probe>, interval: Duration) -> Self {
        Self {
            record,
            probe,
            interval,
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Poll until an error ends the task, logging every change.
    pub async fn run(self) -> PollError {
        self.run_with(log_change).await
    }

    /// Poll until an error ends the task, handing every change to `report`.
    pub async fn run_with<F>(self, mut report: F) -> PollError
    where
        F: FnMut(&Record, &StatusChange),
    {
        if !is_valid_code_url(&self.record.url) {
            return PollError::InvalidUrl(self.record.url);
        }

        let mut tracker = StatusTracker::new(Instant::now());

        loop {
            let available = match self.probe.is_available(&self.record.url).await {
                Ok(available) => available,
                Err(e) => return e.into(),
            };

            if let Some(change) = tracker.observe(available, Instant::now()) {
                report(&self.record, &change);
            }

            if self.interval.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(self.interval).await;
            }
        }
    }
}

/// Default reporter: one info line per change.
pub fn log_change(record: &Record, change: &StatusChange) {
    tracing::info!(
        tag = %record.tag,
        url = %record.url,
        available = change.is_available(),
        "{}",
        change.message(record)
    );
}
