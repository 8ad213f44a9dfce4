//! code-watch
//!
//! Polls a table of code URLs and logs whenever their availability flips.
//!
//! # Architecture Overview
//!
//! ```text
//!   urls.csv ──▶ source ──▶ lifecycle::startup ──┬──▶ poller task (record 1) ──▶ probe ──▶ HTTPS
//!                                                ├──▶ poller task (record 2) ──▶ probe ──▶ HTTPS
//!                                                └──▶ ...
//!
//!   each task: probe → StatusTracker → log line on change
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use code_watch::config::{load_config, WatchConfig};
use code_watch::lifecycle::launch;
use code_watch::observability::init_logging;
use code_watch::probe::HttpProber;

#[derive(Parser)]
#[command(name = "code-watch")]
#[command(about = "Watch code URLs and log when they become available", long_about = None)]
struct Cli {
    /// Source table (tag,url per line)
    #[arg(short, long)]
    urls: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Delay between probes of the same URL, in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<WatchConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => WatchConfig::default(),
        };

        if let Some(path) = self.urls {
            config.source.path = path;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.poller.interval_ms = interval_ms;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }

        code_watch::config::validation::validate_config(&config)
            .map_err(code_watch::config::ConfigError::Validation)?;

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    init_logging(&config.observability)?;

    tracing::info!(
        source = %config.source.path.display(),
        interval_ms = config.poller.interval_ms,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let probe = Arc::new(HttpProber::new(&config.timeouts)?);

    let pollers = match launch(&config, probe) {
        Ok(pollers) => pollers,
        Err(e) => {
            tracing::error!(source = %config.source.path.display(), error = %e, "Failed to load source");
            return Ok(());
        }
    };

    if pollers.is_empty() {
        tracing::warn!(source = %config.source.path.display(), "Source has no records, nothing to poll");
        return Ok(());
    }

    pollers.wait().await;
    Ok(())
}
