//! Building a directory from configuration.

use std::sync::Arc;

use lodestar::{
    config::DirectoryConfig,
    directory::{
        adapters::memory::UnknownHealth,
        domain::{DisableReason, RoleFilter, ServerRole},
        services::DirectoryService,
    },
};
use rstest::rstest;

use super::helpers::{SteppedClock, advertisement};

const BLOCKED: &str = "https://blocked.example.org";

#[rstest]
fn configured_exclusions_apply_to_new_advertisements() {
    let config = DirectoryConfig::from_toml_str(&format!(
        "advertisement_ttl_secs = 120\nfiltered_servers = [\"{BLOCKED}\"]\n"
    ))
    .expect("config should parse");
    let store = Arc::new(config.build_store(Arc::new(SteppedClock::new())));
    let register = Arc::new(config.build_register().expect("register should build"));
    let service = DirectoryService::new(store, register, Arc::new(UnknownHealth));

    service.advertise(advertisement(BLOCKED, ServerRole::Origin, "blocked", 1));
    let listings = service.list_servers(&RoleFilter::any());
    let blocked = listings.first().expect("server should be listed");

    assert!(blocked.availability().is_filtered());
    assert_eq!(
        blocked.availability().reason(),
        Some(DisableReason::PermDisabled)
    );

    let outcome = service
        .toggle_availability(BLOCKED, false)
        .expect("operator override should succeed");
    assert_eq!(outcome.reason(), Some(DisableReason::TempEnabled));
    assert!(!outcome.is_filtered());
}

#[rstest]
fn configured_ttl_is_applied_to_the_store() {
    let config =
        DirectoryConfig::from_toml_str("advertisement_ttl_secs = 5").expect("config should parse");
    let store = config.build_store(Arc::new(SteppedClock::new()));

    assert_eq!(store.default_ttl(), config.advertisement_ttl());
}
