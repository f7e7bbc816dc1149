//! Boundary to the external health-probing subsystem.

use crate::directory::domain::{HealthStatus, ServerUrl};

/// Supplies the latest health status of a server.
///
/// The directory only carries the slot; probing and status computation
/// belong to the health subsystem behind this port.
pub trait HealthStatusSource: Send + Sync {
    /// Returns the latest known status for `server`.
    fn health_of(&self, server: &ServerUrl) -> HealthStatus;
}
