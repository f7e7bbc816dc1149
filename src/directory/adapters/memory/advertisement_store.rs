//! In-memory advertisement store with per-entry expiry.

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::EvictionTask;
use crate::directory::{
    domain::{Advertisement, ServerUrl},
    ports::AdvertisementStore,
};

/// Entry as held by the store. The advertisement is shared so readers clone
/// out of the shard lock without copying namespace lists under it.
#[derive(Debug, Clone)]
struct StoredAdvertisement {
    advertisement: Arc<Advertisement>,
    expires_at: DateTime<Utc>,
}

impl StoredAdvertisement {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Sharded, self-expiring advertisement registry.
///
/// Each shard is guarded by its own lock, so reads and writes are atomic per
/// entry and never observe a half-written advertisement. Expired entries are
/// invisible immediately and physically removed by [`Self::evict_expired`],
/// which the task returned by [`Self::spawn_eviction`] runs periodically.
#[derive(Debug)]
pub struct TtlAdvertisementStore<C>
where
    C: Clock + Send + Sync,
{
    entries: DashMap<ServerUrl, StoredAdvertisement>,
    default_ttl: Duration,
    clock: Arc<C>,
}

impl<C> TtlAdvertisementStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store whose entries live for `default_ttl` unless a
    /// put overrides it.
    #[must_use]
    pub fn new(default_ttl: Duration, clock: Arc<C>) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
            clock,
        }
    }

    /// Returns the time-to-live applied by [`AdvertisementStore::put`].
    #[must_use]
    pub const fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Removes every entry whose time-to-live has elapsed.
    ///
    /// Expiry is re-checked under the shard lock, so an entry refreshed
    /// between the scan and the removal survives.
    ///
    /// Returns the number of evicted entries.
    pub fn evict_expired(&self) -> usize {
        let now = self.clock.utc();
        let candidates: Vec<ServerUrl> = self
            .entries
            .iter()
            .filter(|entry| !entry.value().is_live(now))
            .map(|entry| entry.key().clone())
            .collect();

        let mut evicted = 0_usize;
        for key in &candidates {
            if self
                .entries
                .remove_if(key, |_, stored| !stored.is_live(now))
                .is_some()
            {
                evicted += 1;
            }
        }

        if evicted > 0 {
            debug!(evicted, remaining = self.entries.len(), "evicted expired advertisements");
        }
        evicted
    }

    fn expiry_after(&self, ttl: Duration) -> DateTime<Utc> {
        let now = self.clock.utc();
        let delta = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        now.checked_add_signed(delta)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl<C> TtlAdvertisementStore<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Starts the periodic eviction sweep for this store.
    ///
    /// The returned handle owns the task and a reference to the store, so the
    /// store outlives every sweep. Dropping the handle cancels the task.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    #[must_use]
    pub fn spawn_eviction(self: &Arc<Self>, interval: Duration) -> EvictionTask {
        let store = Arc::clone(self);
        EvictionTask::spawn(interval, move || {
            store.evict_expired();
        })
    }
}

impl<C> AdvertisementStore for TtlAdvertisementStore<C>
where
    C: Clock + Send + Sync,
{
    fn put(&self, key: ServerUrl, advertisement: Advertisement) {
        self.put_with_ttl(key, advertisement, self.default_ttl);
    }

    fn put_with_ttl(&self, key: ServerUrl, advertisement: Advertisement, ttl: Duration) {
        debug_assert_eq!(
            &key,
            advertisement.key(),
            "advertisement stored under a key other than its server URL"
        );
        let expires_at = self.expiry_after(ttl);
        debug!(
            server = %key,
            role = %advertisement.role(),
            namespaces = advertisement.namespaces().len(),
            %expires_at,
            "stored advertisement"
        );
        self.entries.insert(
            key,
            StoredAdvertisement {
                advertisement: Arc::new(advertisement),
                expires_at,
            },
        );
    }

    fn get(&self, key: &ServerUrl) -> Option<Advertisement> {
        let now = self.clock.utc();
        let shared = self
            .entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| Arc::clone(&entry.advertisement))?;
        Some(shared.as_ref().clone())
    }

    fn contains(&self, key: &ServerUrl) -> bool {
        let now = self.clock.utc();
        self.entries.get(key).is_some_and(|entry| entry.is_live(now))
    }

    fn list_all(&self) -> Vec<Advertisement> {
        let now = self.clock.utc();
        let live: Vec<Arc<Advertisement>> = self
            .entries
            .iter()
            .filter(|entry| entry.value().is_live(now))
            .map(|entry| Arc::clone(&entry.value().advertisement))
            .collect();
        live.iter().map(|shared| shared.as_ref().clone()).collect()
    }

    fn live_count(&self) -> usize {
        let now = self.clock.utc();
        self.entries
            .iter()
            .filter(|entry| entry.value().is_live(now))
            .count()
    }

    fn delete_all(&self) {
        self.entries.clear();
        debug!("cleared advertisement store");
    }
}
