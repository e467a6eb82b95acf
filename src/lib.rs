//! Client for the Spanish Virtual Observatory Filter Profile Service.
//!
//! The service publishes filter transmission curves for astronomical
//! facilities as plain web pages. This crate enumerates facilities, their
//! filter sets and individual filters by splitting those pages on the
//! literal markers the service emits, and downloads curve data to disk.
//!
//! ```rust,no_run
//! use svo_fps::{FilterSetSelection, FpsClient};
//!
//! # async fn run() -> svo_fps::FpsResult<()> {
//! let client = FpsClient::with_defaults()?;
//! let facilities = client.facilities().await?;
//! let filters = client
//!     .filters(&facilities[0], &FilterSetSelection::All, false)
//!     .await?;
//! println!("{} filters", filters.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod markup;
pub mod urls;

pub use catalog::FilterSetSelection;
pub use client::FpsClient;
pub use config::{FpsConfig, FpsConfigBuilder};
pub use error::{FpsError, FpsResult};
