//! Stateless indexes derived from the advertisement store.
//!
//! Every call takes a fresh snapshot; nothing here caches results.

use crate::directory::{
    domain::{Advertisement, NamespaceAdvertisement, RoleFilter, ServerRole},
    ports::AdvertisementStore,
};

/// Returns the live advertisements whose role passes `filter`.
///
/// Results keep the order of the underlying `list_all` snapshot.
pub fn list_advertisements_by_role<S>(store: &S, filter: &RoleFilter) -> Vec<Advertisement>
where
    S: AdvertisementStore + ?Sized,
{
    store
        .list_all()
        .into_iter()
        .filter(|advertisement| filter.matches(advertisement.role()))
        .collect()
}

/// Flattens the namespaces advertised by live origins.
///
/// Cache advertisements contribute nothing, even if they carry namespace
/// data. Prefixes are not deduplicated across origins.
pub fn list_namespaces_from_origins<S>(store: &S) -> Vec<NamespaceAdvertisement>
where
    S: AdvertisementStore + ?Sized,
{
    store
        .list_all()
        .into_iter()
        .filter(|advertisement| advertisement.role() == ServerRole::Origin)
        .flat_map(|advertisement| advertisement.namespaces().to_vec())
        .collect()
}
