//! Fluent builder for `FpsConfig`
//!
//! Every field has a default, so the builder carries no required-field
//! states; `build()` only has to validate the base URL.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{FpsError, FpsResult};

use super::types::FpsConfig;

#[derive(Debug, Default)]
pub struct FpsConfigBuilder {
    base_url: Option<String>,
    output_dir: Option<PathBuf>,
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl FpsConfig {
    /// Create a builder for configuring an `FpsConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> FpsConfigBuilder {
        FpsConfigBuilder::default()
    }
}

impl FpsConfigBuilder {
    /// Override the service root. A missing scheme is normalized to `https://`;
    /// a trailing slash is trimmed.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Directory that downloads are written into.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Per-request timeout.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Value for the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Validate and assemble the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FpsError::BaseUrl`] when the base URL does not parse as an
    /// absolute HTTP(S) URL.
    pub fn build(self) -> FpsResult<FpsConfig> {
        let defaults = FpsConfig::default();

        let base_url = match self.base_url {
            Some(raw) => normalize_base_url(&raw)?,
            None => defaults.base_url,
        };

        Ok(FpsConfig {
            base_url,
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        })
    }
}

/// Normalize a base URL: add `https://` if no scheme is present, validate,
/// and trim any trailing slash.
fn normalize_base_url(raw: &str) -> FpsResult<String> {
    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let parsed = Url::parse(&with_scheme).map_err(|_| FpsError::BaseUrl(raw.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(FpsError::BaseUrl(raw.to_string()));
    }

    Ok(with_scheme.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_service() {
        let config = FpsConfig::builder().build().unwrap();
        assert_eq!(config.base_url(), "http://svo2.cab.inta-csic.es/theory/fps");
        assert_eq!(config.output_dir(), std::path::Path::new("."));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.user_agent().starts_with("svo-fps/"));
    }

    #[test]
    fn missing_scheme_gets_https() {
        let config = FpsConfig::builder()
            .base_url("example.com/fps")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "https://example.com/fps");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = FpsConfig::builder()
            .base_url("http://example.com/fps/")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://example.com/fps");
    }

    #[test]
    fn unparseable_base_url_is_rejected() {
        let err = FpsConfig::builder()
            .base_url("http://")
            .build()
            .unwrap_err();
        assert!(matches!(err, FpsError::BaseUrl(_)));
    }
}
