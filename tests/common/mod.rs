//! Test utilities and fixture builders for the svo-fps test suite

use mockito::ServerGuard;
use svo_fps::{FpsClient, FpsConfig};

/// Builds a client pointed at a mock server
#[allow(dead_code)]
pub fn client_for(server: &ServerGuard) -> FpsClient {
    let config = FpsConfig::builder()
        .base_url(server.url())
        .build()
        .expect("mock server URL is valid");
    FpsClient::new(config).expect("client builds")
}

/// Builds a client pointed at a mock server, writing downloads under `output_dir`
#[allow(dead_code)]
pub fn client_with_output_dir(server: &ServerGuard, output_dir: &std::path::Path) -> FpsClient {
    let config = FpsConfig::builder()
        .base_url(server.url())
        .output_dir(output_dir)
        .build()
        .expect("mock server URL is valid");
    FpsClient::new(config).expect("client builds")
}

/// Creates a query form page listing the given facilities
#[allow(dead_code)]
pub fn fps_page(facilities: &[&str]) -> String {
    let mut page = String::from(
        "<html><body><FORM>\n\
         <PARAM name=\"OUTPUT:Format\" value=\"votable\">\n\
         <PARAM name=\"INPUT:Facility\">\n\
         <SELECT>\n",
    );
    for facility in facilities {
        page.push_str(&format!(
            "<OPTION value=\"{facility}\">{facility}</OPTION>\n"
        ));
    }
    page.push_str("</SELECT>\n</FORM></body></html>\n");
    page
}

/// Creates a browse page listing the given filter sets of a facility
#[allow(dead_code)]
pub fn browse_sets_page(facility: &str, sets: &[&str]) -> String {
    let mut page = String::from("<html><body>\n");
    for set in sets {
        page.push_str(&format!(
            "<a href='index.php?mode=browse&gname={facility}&gname2={set}&asttype='>{set}</a>\n"
        ));
    }
    page.push_str("</body></html>\n");
    page
}

/// Creates a browse page listing the given filters of one filter set
#[allow(dead_code)]
pub fn browse_filters_page(facility: &str, set: &str, filters: &[&str]) -> String {
    let mut page = String::from("<html><body>\n");
    for filter in filters {
        page.push_str(&format!(
            "<a href='index.php?mode=browse&gname={facility}&gname2={set}#filter/{filter}'/>\n"
        ));
    }
    page.push_str("</body></html>\n");
    page
}
