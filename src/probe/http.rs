//! HTTP redirect probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder, StatusCode};
use url::Url;

use crate::config::TimeoutConfig;
use crate::probe::endpoint::is_missed_out_url;
use crate::probe::{Probe, ProbeError};

/// Probes a code URL by inspecting where it redirects to.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

/// Client settings used by the prober: redirects are never followed.
pub fn client_builder(timeouts: &TimeoutConfig) -> ClientBuilder {
    Client::builder()
        .redirect(Policy::none())
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .timeout(Duration::from_secs(timeouts.request_secs))
        .user_agent(concat!("code-watch/", env!("CARGO_PKG_VERSION")))
}

impl HttpProber {
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self, ProbeError> {
        Ok(Self::with_client(client_builder(timeouts).build()?))
    }

    /// Wrap an existing client. The client must not follow redirects.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn is_available(&self, url: &str) -> Result<bool, ProbeError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::MOVED_PERMANENTLY && status != StatusCode::FOUND {
            tracing::warn!(url = %url, status = %status, "Unexpected status header");
            tracing::debug!(url = %url, headers = ?response.headers(), "Unexpected response");
            return Ok(false);
        }

        let Some(location) = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
        else {
            tracing::warn!(url = %url, status = %status, "Missing location header");
            tracing::debug!(url = %url, headers = ?response.headers(), "Redirect without location");
            return Ok(false);
        };

        let target = resolve_location(url, location);
        tracing::trace!(url = %url, location = %target, "Redirect observed");

        Ok(!is_missed_out_url(&target))
    }
}

/// Resolve a relative `location` against the request URL.
///
/// Absolute locations are returned as sent so matching sees the raw header.
fn resolve_location(base: &str, location: &str) -> String {
    if Url::parse(location).is_ok() {
        return location.to_string();
    }
    Url::parse(base)
        .and_then(|base| base.join(location))
        .map(String::from)
        .unwrap_or_else(|_| location.to_string())
}
