//! Availability probing.
//!
//! # Data Flow
//! ```text
//! code URL
//!     → endpoint.rs (shape check)
//!     → http.rs (single GET, redirects disabled)
//!     → status / location interpretation
//!     → available: bool
//! ```
//!
//! # Design Decisions
//! - Response anomalies (unexpected status, missing location) are a soft
//!   `false`, not an error
//! - Transport failures are errors and are not retried here

pub mod endpoint;
pub mod http;

use async_trait::async_trait;

pub use endpoint::{is_missed_out_url, is_valid_code_url};
pub use http::HttpProber;

/// Error type for a single probe.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A single-shot availability check.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Check whether the resource behind `url` is currently available.
    ///
    /// `url` is expected to be an already-validated code URL.
    async fn is_available(&self, url: &str) -> Result<bool, ProbeError>;
}
