//! Catalog enumeration: facilities, filter sets and filters

use tracing::debug;

use crate::client::FpsClient;
use crate::error::{FpsError, FpsResult};
use crate::{markup, urls};

/// Which of a facility's filter sets an operation should cover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterSetSelection {
    /// Every filter set the facility lists.
    #[default]
    All,
    /// Explicitly named sets, processed in the given order. Each name must
    /// appear in the facility's filter-set list.
    Named(Vec<String>),
}

impl From<Vec<String>> for FilterSetSelection {
    fn from(names: Vec<String>) -> Self {
        Self::Named(names)
    }
}

impl<const N: usize> From<[&str; N]> for FilterSetSelection {
    fn from(names: [&str; N]) -> Self {
        Self::Named(names.iter().map(|n| (*n).to_string()).collect())
    }
}

impl FpsClient {
    /// List every facility known to the service, in page order with
    /// duplicates preserved.
    pub async fn facilities(&self) -> FpsResult<Vec<String>> {
        let url = urls::catalog_url(self.config.base_url());
        let body = self.fetch_text(&url).await?;
        let names = markup::facility_names(&body)?;
        debug!(count = names.len(), "facilities parsed");
        Ok(names)
    }

    /// List the filter sets of one facility, in page order with duplicates
    /// preserved.
    ///
    /// A facility whose browse page lists no distinct filter sets is
    /// reported as its own sole filter set.
    pub async fn filter_sets(&self, facility: &str) -> FpsResult<Vec<String>> {
        let url = urls::facility_browse_url(self.config.base_url(), facility);
        let body = self.fetch_text(&url).await?;
        let names = markup::filter_set_names(&body, facility);
        if names.is_empty() {
            debug!(facility, "no distinct filter sets, facility stands in for itself");
            return Ok(vec![facility.to_string()]);
        }
        debug!(facility, count = names.len(), "filter sets parsed");
        Ok(names)
    }

    /// List the filters of one facility across the selected filter sets.
    ///
    /// Names accumulate across sets in selection order, duplicates
    /// preserved. With `verbose` set, each discovery is echoed to stdout
    /// as `<set>/<filter>`.
    ///
    /// # Errors
    ///
    /// Returns [`FpsError::InvalidFilterSet`] when an explicitly named set
    /// is not listed for the facility.
    pub async fn filters(
        &self,
        facility: &str,
        selection: &FilterSetSelection,
        verbose: bool,
    ) -> FpsResult<Vec<String>> {
        let sets = self.resolve_selection(facility, selection).await?;

        let mut filters = Vec::new();
        for set in &sets {
            let url = urls::filter_set_browse_url(self.config.base_url(), facility, set);
            let body = self.fetch_text(&url).await?;
            let names = markup::filter_names(&body, facility, set)?;
            if verbose {
                for name in &names {
                    println!("{set}/{name}");
                }
            }
            debug!(facility, set = set.as_str(), count = names.len(), "filters parsed");
            filters.extend(names);
        }
        Ok(filters)
    }

    /// Turn a selection into the list of sets to process, validating
    /// explicit names against the facility's filter-set list.
    async fn resolve_selection(
        &self,
        facility: &str,
        selection: &FilterSetSelection,
    ) -> FpsResult<Vec<String>> {
        let valid = self.filter_sets(facility).await?;
        match selection {
            FilterSetSelection::All => Ok(valid),
            FilterSetSelection::Named(names) => {
                for name in names {
                    if !valid.contains(name) {
                        return Err(FpsError::InvalidFilterSet {
                            name: name.clone(),
                            valid,
                        });
                    }
                }
                Ok(names.clone())
            }
        }
    }
}
