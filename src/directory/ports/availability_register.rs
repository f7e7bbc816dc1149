//! Register port for server availability decisions.

use crate::directory::domain::{
    AvailabilityStatus, DisableReason, ServerUrl, ToggleIntent, ToggleRejection,
};

/// Concurrency-safe map from server identity to [`DisableReason`].
///
/// Records are independent of advertisements: a server may be disabled
/// without being advertised, and a disable decision outlives the expiry of
/// the server's advertisement.
pub trait AvailabilityRegister: Send + Sync {
    /// Looks up the availability record for `key`.
    fn is_disabled(&self, key: &ServerUrl) -> AvailabilityStatus;

    /// Applies one toggle atomically and returns the resulting record.
    ///
    /// `Ok(None)` means the record was cleared and the server is fully
    /// enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleRejection`] when the transition is illegal from the
    /// current record. No state changes in that case.
    fn toggle(
        &self,
        key: &ServerUrl,
        intent: ToggleIntent,
    ) -> Result<Option<DisableReason>, ToggleRejection>;

    /// Returns a copy of every record.
    fn snapshot(&self) -> Vec<(ServerUrl, DisableReason)>;
}
