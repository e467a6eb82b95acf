//! Literal-marker extraction from service pages
//!
//! The Filter Profile Service has no machine API; its browse pages are
//! plain HTML. Rather than parse a tag tree, these functions split the
//! page text on the literal markers the service is known to emit and read
//! the names out of the fragments. The marker strings are part of the
//! page contract: if the service changes its markup, extraction fails with
//! [`FpsError::Markup`] instead of silently returning wrong names.
//!
//! Splitting always uses the raw facility and filter-set names; encoding
//! only applies to request URLs (see [`crate::urls`]).

use crate::error::{FpsError, FpsResult};

/// Start of a form parameter tag on the query form page.
const PARAM_TAG: &str = "<PARAM";

/// Parameter name marking the facility selector.
const FACILITY_INPUT: &str = "INPUT:Facility";

/// Start of one choice inside the facility selector.
const OPTION_TAG: &str = "<OPTION";

/// Prefix of a filter anchor inside a browse page.
const FILTER_ANCHOR: &str = "#filter";

/// Query parameter terminating a filter-set link.
const ASTTYPE_PARAM: &str = "&asttype=";

/// Extract all facility names from the query form page.
///
/// The page is split on `<PARAM`; the last fragment mentioning
/// `INPUT:Facility` is the facility selector. Each `<OPTION` inside it
/// carries the facility name as its first quoted attribute value. Order
/// and duplicates are preserved.
///
/// # Errors
///
/// Returns [`FpsError::Markup`] when the facility selector is missing or
/// an option carries no quoted value.
pub fn facility_names(body: &str) -> FpsResult<Vec<String>> {
    let selector = body
        .split(PARAM_TAG)
        .filter(|fragment| fragment.contains(FACILITY_INPUT))
        .last()
        .ok_or_else(|| FpsError::Markup("facility selector not found".to_string()))?;

    selector
        .split(OPTION_TAG)
        .skip(1)
        .map(|fragment| {
            fragment
                .split('"')
                .nth(1)
                .map(str::to_string)
                .ok_or_else(|| FpsError::Markup("facility option without a quoted value".to_string()))
        })
        .collect()
}

/// Extract the filter-set names of one facility from its browse page.
///
/// The page is split on the raw marker `gname=<facility>&gname2=`; in every
/// fragment after the first, the filter-set name is the text before the
/// first `&asttype=`. Fragments without that parameter are skipped. Order
/// and duplicates are preserved; an empty result is the caller's concern
/// (see [`crate::catalog`]).
pub fn filter_set_names(body: &str, facility: &str) -> Vec<String> {
    let marker = format!("gname={facility}&gname2=");
    body.split(&marker)
        .skip(1)
        .filter_map(|fragment| {
            fragment
                .split_once(ASTTYPE_PARAM)
                .map(|(name, _)| name.to_string())
        })
        .collect()
}

/// Extract the filter names of one filter set from its browse page.
///
/// The page is split on the raw marker `gname=<facility>&gname2=<set>`;
/// fragments starting with `#filter` are filter anchors. The name is the
/// anchor's second `/`-separated segment with its final character dropped
/// (the segment ends with the closing quote of the link). Order and
/// duplicates are preserved.
///
/// # Errors
///
/// Returns [`FpsError::Markup`] when a filter anchor has no name segment.
pub fn filter_names(body: &str, facility: &str, filter_set: &str) -> FpsResult<Vec<String>> {
    let marker = format!("gname={facility}&gname2={filter_set}");
    body.split(&marker)
        .filter(|fragment| fragment.starts_with(FILTER_ANCHOR))
        .map(|fragment| {
            let segment = fragment
                .split('/')
                .nth(1)
                .ok_or_else(|| FpsError::Markup("filter anchor without a name segment".to_string()))?;
            Ok(drop_last_char(segment))
        })
        .collect()
}

/// Drop the final character of `s` (the closing quote trailing a filter
/// anchor segment). Character-wise, and empty input stays empty.
fn drop_last_char(s: &str) -> String {
    let mut chars = s.chars();
    chars.next_back();
    chars.as_str().to_string()
}
