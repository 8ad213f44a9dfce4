//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Root configuration for the watcher.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct WatchConfig {
    /// Where the tag/URL table is read from.
    pub source: SourceConfig,

    /// Polling loop settings.
    pub poller: PollerConfig,

    /// HTTP client timeouts.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Source table configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to the two-column CSV file, relative to the working directory.
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("urls.csv"),
        }
    }
}

/// Polling loop configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PollerConfig {
    /// Delay between two probes of the same URL, in milliseconds.
    /// Zero re-probes immediately.
    pub interval_ms: u64,
}

impl PollerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Timeout configuration for outbound probes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total time for a single probe request in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 10,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
