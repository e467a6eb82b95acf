//! HTTP fetcher for the Filter Profile Service

use reqwest::StatusCode;
use tracing::debug;

use crate::config::FpsConfig;
use crate::error::{FpsError, FpsResult};

/// Client for one Filter Profile Service instance.
///
/// Wraps a configured [`reqwest::Client`]; every operation issues one GET
/// per page and awaits it to completion before the next. No retries, no
/// caching.
#[derive(Debug, Clone)]
pub struct FpsClient {
    http: reqwest::Client,
    pub(crate) config: FpsConfig,
}

impl FpsClient {
    /// Build a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FpsError::ClientBuild`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: FpsConfig) -> FpsResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.request_timeout())
            .build()
            .map_err(FpsError::ClientBuild)?;
        Ok(Self { http, config })
    }

    /// Client against the public service with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`FpsError::ClientBuild`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn with_defaults() -> FpsResult<Self> {
        Self::new(FpsConfig::default())
    }

    /// The configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &FpsConfig {
        &self.config
    }

    /// One GET; only 200 OK passes. Redirects follow reqwest's default
    /// policy.
    async fn get_ok(&self, url: &str) -> FpsResult<reqwest::Response> {
        debug!(url, "GET");
        let response = self.http.get(url).send().await.map_err(|source| {
            FpsError::Request {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(url, %status, "unexpected status");
            return Err(FpsError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }

    /// Fetch a page and return its body text.
    pub(crate) async fn fetch_text(&self, url: &str) -> FpsResult<String> {
        let response = self.get_ok(url).await?;
        response.text().await.map_err(|source| FpsError::Request {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch a resource and return its raw body bytes.
    pub(crate) async fn fetch_bytes(&self, url: &str) -> FpsResult<Vec<u8>> {
        let response = self.get_ok(url).await?;
        let bytes = response.bytes().await.map_err(|source| FpsError::Request {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}
