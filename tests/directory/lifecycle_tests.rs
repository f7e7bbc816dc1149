//! Advertisement lifecycle: expiry, refresh and background eviction.

use std::time::Duration;

use lodestar::directory::{
    domain::{RoleFilter, ServerRole},
    ports::AdvertisementStore,
};
use rstest::rstest;

use super::helpers::{Directory, TTL, advertisement, directory, server_url};

const ORIGIN: &str = "https://origin.example.org:8443";

#[rstest]
fn advertisement_is_visible_until_its_ttl_elapses(directory: Directory) {
    directory
        .service
        .advertise(advertisement(ORIGIN, ServerRole::Origin, "alpha", 3));

    directory.clock.advance(TTL - Duration::from_secs(1));
    assert_eq!(directory.service.list_namespaces_from_origins().len(), 3);

    directory.clock.advance(Duration::from_secs(1));
    assert!(directory.service.list_namespaces_from_origins().is_empty());
    assert!(
        directory
            .service
            .list_servers(&RoleFilter::any())
            .is_empty()
    );
}

#[rstest]
fn readvertising_refreshes_ttl_and_replaces_namespaces(directory: Directory) {
    directory
        .service
        .advertise(advertisement(ORIGIN, ServerRole::Origin, "alpha", 3));
    directory.clock.advance(TTL - Duration::from_secs(5));
    directory
        .service
        .advertise(advertisement(ORIGIN, ServerRole::Origin, "beta", 1));
    directory.clock.advance(Duration::from_secs(30));

    let paths: Vec<String> = directory
        .service
        .list_namespaces_from_origins()
        .iter()
        .map(|namespace| namespace.path().to_owned())
        .collect();

    assert_eq!(paths, vec!["/data/beta/0".to_owned()]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn background_eviction_reclaims_expired_entries(directory: Directory) {
    directory
        .service
        .advertise(advertisement(ORIGIN, ServerRole::Origin, "alpha", 1));
    let task = directory.store.spawn_eviction(Duration::from_secs(30));

    directory.clock.advance(TTL);
    tokio::time::sleep(Duration::from_secs(31)).await;
    tokio::task::yield_now().await;

    assert_eq!(directory.store.live_count(), 0);
    assert!(!directory.store.contains(&server_url(ORIGIN)));

    task.shutdown().await;
}

#[rstest]
fn expired_entries_are_hidden_before_eviction_runs(directory: Directory) {
    directory
        .service
        .advertise(advertisement(ORIGIN, ServerRole::Origin, "alpha", 1));
    directory.clock.advance(TTL);

    assert!(directory.store.get(&server_url(ORIGIN)).is_none());
    assert!(directory.store.list_all().is_empty());
    assert_eq!(directory.store.evict_expired(), 1);
    assert_eq!(directory.store.evict_expired(), 0);
}
