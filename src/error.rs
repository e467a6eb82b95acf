//! Error types for Filter Profile Service operations
//!
//! Every fallible operation in the crate returns [`FpsResult`]. A fetch that
//! answers with anything other than 200 OK is an explicit [`FpsError::Status`];
//! callers propagate it, so the first failed fetch aborts the whole operation.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for Filter Profile Service operations
pub type FpsResult<T> = Result<T, FpsError>;

/// Error types for Filter Profile Service operations
#[derive(Debug, Error)]
pub enum FpsError {
    /// Request could not be sent or its body could not be read
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a status other than 200 OK
    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: StatusCode },

    /// HTTP client construction failed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    /// Page text did not match the expected markup markers
    #[error("unexpected markup: {0}")]
    Markup(String),

    /// Requested filter set is not listed for the facility
    #[error("not a valid filter set ({name}): {valid:?}")]
    InvalidFilterSet { name: String, valid: Vec<String> },

    /// Base URL rejected at configuration time
    #[error("invalid base URL {0:?}")]
    BaseUrl(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
