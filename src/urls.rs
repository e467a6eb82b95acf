//! Endpoint URL construction
//!
//! The service exposes three endpoints: the query form (`fps.php`), the
//! browse index (`index.php`), and the data endpoint (`getdata.php`).
//! Facility, filter-set and filter names are percent-encoded when
//! interpolated into a URL; the `/` joining facility and filter in a data
//! id stays literal because the server parses it as a separator.

use urlencoding::encode;

/// URL of the query form page listing all facilities.
pub fn catalog_url(base: &str) -> String {
    format!("{base}/fps.php")
}

/// Browse URL listing the filter sets of one facility.
pub fn facility_browse_url(base: &str, facility: &str) -> String {
    format!(
        "{base}/index.php?mode=browse&gname={}&asttype=",
        encode(facility)
    )
}

/// Browse URL listing the filters of one filter set.
pub fn filter_set_browse_url(base: &str, facility: &str, filter_set: &str) -> String {
    format!(
        "{base}/index.php?mode=browse&gname={}&gname2={}&asttype=",
        encode(facility),
        encode(filter_set)
    )
}

/// Data URL for one filter's ASCII transmission curve.
pub fn filter_data_url(base: &str, facility: &str, filter: &str) -> String {
    format!(
        "{base}/getdata.php?format=ascii&id={}/{}",
        encode(facility),
        encode(filter)
    )
}
