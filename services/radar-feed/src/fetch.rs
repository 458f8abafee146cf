//! Reflectivity file retrieval with retry and backoff.
//!
//! A thin wrapper around reqwest: bounded retries, exponential backoff,
//! request timeout. The decoder never sees the network; it receives the
//! final byte buffer.

use std::time::Duration;

use anyhow::{Context, Result};
use bytes::Bytes;
use reqwest::Client;
use tracing::{info, warn};

/// Configuration for reflectivity fetches.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial retry delay (doubles each retry)
    pub initial_retry_delay: Duration,
    /// Maximum retry delay
    pub max_retry_delay: Duration,
    /// HTTP request timeout
    pub request_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            initial_retry_delay: Duration::from_secs(2),
            max_retry_delay: Duration::from_secs(30),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Fetches reflectivity files over HTTP.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Download the file at `url`, retrying failures with backoff.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        let mut delay = self.config.initial_retry_delay;
        let mut attempt = 0;

        loop {
            match self.try_fetch(url).await {
                Ok(bytes) => {
                    info!(url = %url, bytes = bytes.len(), "Fetched reflectivity file");
                    return Ok(bytes);
                }
                Err(e) if attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(
                        url = %url,
                        attempt,
                        delay_secs = delay.as_secs(),
                        error = %e,
                        "Fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay = next_delay(delay, self.config.max_retry_delay);
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Request failed")?
            .error_for_status()
            .context("Server returned error status")?;

        response.bytes().await.context("Failed to read response body")
    }
}

/// Double the delay up to the configured maximum.
fn next_delay(current: Duration, max: Duration) -> Duration {
    (current * 2).min(max)
}
