mod common;

use mockito::Server;
use svo_fps::{FilterSetSelection, FpsError};

#[tokio::test]
async fn concatenates_filters_across_all_sets_in_order() {
    let mut server = Server::new_async().await;
    let _sets = server
        .mock("GET", "/index.php?mode=browse&gname=CTIO&asttype=")
        .with_body(common::browse_sets_page("CTIO", &["DECam", "SOI"]))
        .create_async()
        .await;
    let _decam = server
        .mock("GET", "/index.php?mode=browse&gname=CTIO&gname2=DECam&asttype=")
        .with_body(common::browse_filters_page(
            "CTIO",
            "DECam",
            &["DECam.g", "DECam.r", "shared"],
        ))
        .create_async()
        .await;
    let _soi = server
        .mock("GET", "/index.php?mode=browse&gname=CTIO&gname2=SOI&asttype=")
        .with_body(common::browse_filters_page("CTIO", "SOI", &["SOI.z", "shared"]))
        .create_async()
        .await;

    let client = common::client_for(&server);
    let filters = client
        .filters("CTIO", &FilterSetSelection::All, false)
        .await
        .expect("filters parse");

    assert_eq!(filters, ["DECam.g", "DECam.r", "shared", "SOI.z", "shared"]);
}

#[tokio::test]
async fn explicit_selection_is_processed_in_caller_order() {
    let mut server = Server::new_async().await;
    let _sets = server
        .mock("GET", "/index.php?mode=browse&gname=CTIO&asttype=")
        .with_body(common::browse_sets_page("CTIO", &["DECam", "SOI"]))
        .create_async()
        .await;
    let _decam = server
        .mock("GET", "/index.php?mode=browse&gname=CTIO&gname2=DECam&asttype=")
        .with_body(common::browse_filters_page("CTIO", "DECam", &["DECam.g"]))
        .create_async()
        .await;
    let _soi = server
        .mock("GET", "/index.php?mode=browse&gname=CTIO&gname2=SOI&asttype=")
        .with_body(common::browse_filters_page("CTIO", "SOI", &["SOI.z"]))
        .create_async()
        .await;

    let client = common::client_for(&server);
    let selection = FilterSetSelection::from(["SOI", "DECam"]);
    let filters = client
        .filters("CTIO", &selection, false)
        .await
        .expect("filters parse");

    assert_eq!(filters, ["SOI.z", "DECam.g"]);
}

#[tokio::test]
async fn unknown_set_name_is_rejected_with_the_valid_list() {
    let mut server = Server::new_async().await;
    let _sets = server
        .mock("GET", "/index.php?mode=browse&gname=CTIO&asttype=")
        .with_body(common::browse_sets_page("CTIO", &["DECam", "SOI"]))
        .create_async()
        .await;

    let client = common::client_for(&server);
    let selection = FilterSetSelection::from(["Bogus"]);
    let err = client
        .filters("CTIO", &selection, false)
        .await
        .expect_err("unknown set must fail");

    match err {
        FpsError::InvalidFilterSet { name, valid } => {
            assert_eq!(name, "Bogus");
            assert_eq!(valid, ["DECam", "SOI"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn failed_set_page_aborts_enumeration() {
    let mut server = Server::new_async().await;
    let _sets = server
        .mock("GET", "/index.php?mode=browse&gname=CTIO&asttype=")
        .with_body(common::browse_sets_page("CTIO", &["DECam"]))
        .create_async()
        .await;
    let _decam = server
        .mock("GET", "/index.php?mode=browse&gname=CTIO&gname2=DECam&asttype=")
        .with_status(503)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = client
        .filters("CTIO", &FilterSetSelection::All, false)
        .await
        .expect_err("503 must fail");

    assert!(matches!(err, FpsError::Status { status, .. } if status.as_u16() == 503));
}
