//! Configuration for Filter Profile Service operations
//!
//! Provides the `FpsConfig` struct and its fluent builder with validation
//! and sensible defaults.

pub mod builder;
pub mod getters;
pub mod types;

pub use builder::FpsConfigBuilder;
pub use types::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT, FpsConfig};
