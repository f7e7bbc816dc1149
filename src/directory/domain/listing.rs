//! Per-server record returned by directory listings.

use super::{Advertisement, AvailabilityStatus, HealthStatus, ServerDescriptor};

/// An advertisement merged with availability and health state.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerListing {
    server: ServerDescriptor,
    health: HealthStatus,
    availability: AvailabilityStatus,
    namespace_prefixes: Vec<String>,
}

impl ServerListing {
    /// Builds the listing for one advertisement.
    ///
    /// Namespace prefixes are only reported for roles that advertise
    /// namespaces, so caches always list an empty sequence.
    #[must_use]
    pub fn new(
        advertisement: &Advertisement,
        health: HealthStatus,
        availability: AvailabilityStatus,
    ) -> Self {
        let namespace_prefixes = if advertisement.role().advertises_namespaces() {
            advertisement.namespace_prefixes()
        } else {
            Vec::new()
        };
        Self {
            server: advertisement.server().clone(),
            health,
            availability,
            namespace_prefixes,
        }
    }

    /// Returns the server descriptor.
    #[must_use]
    pub const fn server(&self) -> &ServerDescriptor {
        &self.server
    }

    /// Returns the health status slot.
    #[must_use]
    pub const fn health(&self) -> HealthStatus {
        self.health
    }

    /// Returns the availability record for the server.
    #[must_use]
    pub const fn availability(&self) -> AvailabilityStatus {
        self.availability
    }

    /// Returns the namespace path prefixes.
    #[must_use]
    pub fn namespace_prefixes(&self) -> &[String] {
        &self.namespace_prefixes
    }
}
