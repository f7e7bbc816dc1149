//! In-memory availability register.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::directory::{
    domain::{
        AvailabilityStatus, DisableReason, ServerUrl, ToggleIntent, ToggleRejection, transition,
    },
    ports::AvailabilityRegister,
};

/// Thread-safe availability register behind a single reader-writer lock.
///
/// The write lock is held across the whole read-decide-write of a toggle, so
/// concurrent toggles on the same key serialise and observe each other's
/// results. Lookups take the read side.
#[derive(Debug, Default)]
pub struct InMemoryAvailabilityRegister {
    records: RwLock<HashMap<ServerUrl, DisableReason>>,
}

impl InMemoryAvailabilityRegister {
    /// Creates an empty register in which every server is enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a register seeded with existing records.
    ///
    /// Used to load operator decisions at start-up; later changes go through
    /// [`AvailabilityRegister::toggle`].
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = (ServerUrl, DisableReason)>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }
}

// Every critical section leaves the map consistent, so a poisoned lock still
// guards valid data.
impl AvailabilityRegister for InMemoryAvailabilityRegister {
    fn is_disabled(&self, key: &ServerUrl) -> AvailabilityStatus {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        AvailabilityStatus::new(records.get(key).copied())
    }

    fn toggle(
        &self,
        key: &ServerUrl,
        intent: ToggleIntent,
    ) -> Result<Option<DisableReason>, ToggleRejection> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let next = transition(records.get(key).copied(), intent)?;
        match next {
            Some(reason) => {
                records.insert(key.clone(), reason);
            }
            None => {
                records.remove(key);
            }
        }
        Ok(next)
    }

    fn snapshot(&self) -> Vec<(ServerUrl, DisableReason)> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records
            .iter()
            .map(|(key, reason)| (key.clone(), *reason))
            .collect()
    }
}
