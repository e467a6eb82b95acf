//! Transmission-curve download

use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, info};

use crate::catalog::FilterSetSelection;
use crate::client::FpsClient;
use crate::error::FpsResult;
use crate::urls;

impl FpsClient {
    /// Download the ASCII transmission curves of the selected filters.
    ///
    /// Filters are enumerated via [`FpsClient::filters`], then each curve
    /// is fetched and written to `<output_dir>/<facility>/<filter>.dat`.
    /// The facility directory is created on demand; a duplicate filter
    /// name fetches and overwrites again. The first failed fetch or write
    /// aborts the remainder. Returns the written paths in download order.
    pub async fn download_filters(
        &self,
        facility: &str,
        selection: &FilterSetSelection,
    ) -> FpsResult<Vec<PathBuf>> {
        let filters = self.filters(facility, selection, false).await?;

        let facility_dir = self.config.output_dir().join(facility);
        let mut written = Vec::with_capacity(filters.len());
        for filter in &filters {
            let url = urls::filter_data_url(self.config.base_url(), facility, filter);
            let data = self.fetch_bytes(&url).await?;
            fs::create_dir_all(&facility_dir).await?;
            let path = facility_dir.join(format!("{filter}.dat"));
            fs::write(&path, &data).await?;
            debug!(path = %path.display(), bytes = data.len(), "curve written");
            written.push(path);
        }
        info!(facility, count = written.len(), "download finished");
        Ok(written)
    }
}
