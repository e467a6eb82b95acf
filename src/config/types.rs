//! Core configuration type for Filter Profile Service operations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the public Filter Profile Service.
pub const DEFAULT_BASE_URL: &str = "http://svo2.cab.inta-csic.es/theory/fps";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`FpsClient`](crate::client::FpsClient)
///
/// All fields have defaults, so `FpsConfig::default()` talks to the public
/// service and writes downloads to the current directory. Use
/// [`FpsConfig::builder`] to override any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FpsConfig {
    /// Service root, without a trailing slash (normalized in builder).
    pub(crate) base_url: String,
    /// Directory that download operations write facility subdirectories into.
    pub(crate) output_dir: PathBuf,
    /// Timeout applied to every request.
    pub(crate) request_timeout: Duration,
    /// Value sent in the `User-Agent` header.
    pub(crate) user_agent: String,
}

impl Default for FpsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

pub(crate) fn default_user_agent() -> String {
    format!("svo-fps/{}", env!("CARGO_PKG_VERSION"))
}
