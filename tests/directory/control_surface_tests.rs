//! HTTP listing and toggling through the router.

use axum::http::StatusCode;
use lodestar::directory::{
    adapters::http::models::{
        ApiStatus, ListServerResponse, SimpleApiResponse, ToggleServerResponse,
    },
    domain::ServerRole,
};
use rstest::rstest;
use serde_json::Value;

use super::helpers::{Directory, TTL, advertisement, directory, get, patch, send};

const ORIGIN: &str = "https://origin.example.org:8443";
const CACHE: &str = "https://cache.example.org:8444";

fn populated(directory: &Directory) {
    directory
        .service
        .advertise(advertisement(ORIGIN, ServerRole::Origin, "alpha", 2));
    directory
        .service
        .advertise(advertisement(CACHE, ServerRole::Cache, "edge", 2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operator_disable_shows_up_in_listing_and_survives_expiry(directory: Directory) {
    populated(&directory);

    let (status, toggled): (_, ToggleServerResponse) = send(
        directory.router(),
        patch(&format!("/servers?serverUrl={CACHE}"), r#"{"disabled":true}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled.status, ApiStatus::Success);

    let (_, listings): (_, Vec<ListServerResponse>) =
        send(directory.router(), get("/servers?server_type=cache")).await;
    let cache = listings.first().expect("cache should be listed");
    assert!(cache.filtered);
    assert_eq!(cache.filtered_type, "tempDisabled");

    directory.clock.advance(TTL);
    let (_, listings): (_, Vec<ListServerResponse>) =
        send(directory.router(), get("/servers")).await;
    assert!(listings.is_empty());

    directory
        .service
        .advertise(advertisement(CACHE, ServerRole::Cache, "edge", 2));
    let (_, listings): (_, Vec<ListServerResponse>) =
        send(directory.router(), get("/servers")).await;
    assert!(listings.first().is_some_and(|listing| listing.filtered));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disable_then_enable_restores_routing(directory: Directory) {
    populated(&directory);
    let uri = format!("/servers?serverUrl={ORIGIN}");

    let (status, _): (_, Value) =
        send(directory.router(), patch(&uri, r#"{"disabled":true}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, enabled): (_, ToggleServerResponse) =
        send(directory.router(), patch(&uri, r#"{"disabled":false}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(enabled.msg, "Enabled the server successfully");
    assert!(!enabled.filtered);

    let (status, again): (_, SimpleApiResponse) =
        send(directory.router(), patch(&uri, r#"{"disabled":false}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        again.msg,
        "Can't enable a server that is not disabled or does not exist"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn namespaces_route_ignores_caches(directory: Directory) {
    populated(&directory);

    let (status, namespaces): (_, Vec<Value>) =
        send(directory.router(), get("/namespaces")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(namespaces.len(), 2);
    assert!(namespaces.iter().all(|namespace| {
        namespace["path"]
            .as_str()
            .is_some_and(|path| path.starts_with("/data/alpha/"))
    }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_server_type_is_a_bad_request(directory: Directory) {
    populated(&directory);

    let (status, body): (_, SimpleApiResponse) =
        send(directory.router(), get("/servers?server_type=origin,staging")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.status, ApiStatus::Error);
}
