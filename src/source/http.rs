//! HTTP(S) fetcher backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::SourceFetcher;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("sheetcopy/", env!("CARGO_PKG_VERSION"));

/// Fetches published sheets over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a fetcher with a per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self::with_client(client)
    }

    /// Use an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    fn supported_schemes(&self) -> &[&str] {
        &["http", "https"]
    }

    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, locator: &str) -> Result<String> {
        log::info!("Fetching sheet data from: {}", locator);
        let response = self.client.get(locator).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                code: status.as_u16(),
                locator: locator.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
