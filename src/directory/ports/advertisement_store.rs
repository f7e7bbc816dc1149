//! Store port for self-expiring server advertisements.

use crate::directory::domain::{Advertisement, ServerUrl};
use std::time::Duration;

/// Concurrent registry of live server advertisements.
///
/// Implementations synchronise internally; callers never lock. Every entry
/// carries its own time-to-live and disappears once it elapses without a
/// refresh. There is no single-entry delete: absence is the "gone" state.
///
/// `key` must equal [`Advertisement::key`]. Listings look up availability
/// and health by the advertised server URL, so an entry stored under any
/// other key would be reported under the wrong identity.
pub trait AdvertisementStore: Send + Sync {
    /// Inserts or fully replaces the advertisement for `key` using the
    /// store's default time-to-live.
    ///
    /// # Panics
    ///
    /// Implementations may panic in debug builds when `key` differs from
    /// `advertisement.key()`.
    fn put(&self, key: ServerUrl, advertisement: Advertisement);

    /// Inserts or fully replaces the advertisement for `key` with an explicit
    /// time-to-live.
    ///
    /// # Panics
    ///
    /// Implementations may panic in debug builds when `key` differs from
    /// `advertisement.key()`.
    fn put_with_ttl(&self, key: ServerUrl, advertisement: Advertisement, ttl: Duration);

    /// Returns the live advertisement for `key`.
    ///
    /// Returns `None` when the key is absent or its entry has expired.
    fn get(&self, key: &ServerUrl) -> Option<Advertisement>;

    /// Returns whether a live advertisement exists for `key`.
    fn contains(&self, key: &ServerUrl) -> bool;

    /// Returns a snapshot of every live advertisement in unspecified order.
    fn list_all(&self) -> Vec<Advertisement>;

    /// Returns the number of live advertisements.
    fn live_count(&self) -> usize;

    /// Removes every entry.
    fn delete_all(&self);
}
