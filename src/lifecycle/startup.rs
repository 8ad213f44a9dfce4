//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the source table
//! - Start one polling task per record
//! - Catch each task's error at its boundary

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::config::{PollerConfig, WatchConfig};
use crate::poller::PollTask;
use crate::probe::Probe;
use crate::source::{load_records, Record, SourceError};

/// The set of running polling tasks.
pub struct Pollers {
    tasks: JoinSet<()>,
}

impl Pollers {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Wait until every task has terminated.
    pub async fn wait(mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Polling task aborted");
            }
        }
        tracing::info!("All polling tasks have stopped");
    }
}

/// Spawn one polling task per record.
pub fn spawn_pollers(records: Vec<Record>, probe: Arc<dyn Probe>, config: &PollerConfig) -> Pollers {
    let mut tasks = JoinSet::new();
    let interval = config.interval();

    for record in records {
        let task = PollTask::new(record, Arc::clone(&probe), interval);
        tasks.spawn(async move {
            let tag = task.record().tag.clone();
            let error = task.run().await;
            tracing::error!(tag = %tag, error = %error, "Polling task terminated");
        });
    }

    tracing::info!(
        count = tasks.len(),
        interval_ms = config.interval_ms,
        "Polling tasks started"
    );

    Pollers { tasks }
}

/// Load the configured source and start polling it.
///
/// A load error is returned before any task is spawned.
pub fn launch(config: &WatchConfig, probe: Arc<dyn Probe>) -> Result<Pollers, SourceError> {
    let records = load_records(&config.source.path)?;
    Ok(spawn_pollers(records, probe, &config.poller))
}
