//! Service layer for the federation directory.
//!
//! Provides [`DirectoryService`], which composes the advertisement store, the
//! availability register and the health source into the listing and toggle
//! operations of the control surface.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use super::index;
use crate::directory::{
    domain::{
        Advertisement, AvailabilityStatus, DirectoryDomainError, DisableReason,
        NamespaceAdvertisement, ParseServerRoleError, RoleFilter, ServerListing, ServerUrl,
        ToggleIntent, ToggleRejection,
    },
    ports::{AdvertisementStore, AvailabilityRegister, HealthStatusSource},
};

/// Service-level errors for directory operations.
#[derive(Debug, Error)]
pub enum DirectoryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),
    /// A role filter token was not recognised.
    #[error(transparent)]
    RoleFilter(#[from] ParseServerRoleError),
    /// The availability state machine refused the toggle.
    #[error(transparent)]
    Rejected(#[from] ToggleRejection),
}

/// Result type for directory service operations.
pub type DirectoryServiceResult<T> = Result<T, DirectoryServiceError>;

/// Record resulting from a successful availability toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    server: ServerUrl,
    reason: Option<DisableReason>,
}

impl ToggleOutcome {
    /// Returns the toggled server.
    #[must_use]
    pub const fn server(&self) -> &ServerUrl {
        &self.server
    }

    /// Returns the record now stored, `None` when the server is fully enabled.
    #[must_use]
    pub const fn reason(&self) -> Option<DisableReason> {
        self.reason
    }

    /// Returns whether the server is now excluded from routing.
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        AvailabilityStatus::new(self.reason).is_filtered()
    }
}

/// Directory listing and availability orchestration service.
pub struct DirectoryService<S, R, H>
where
    S: AdvertisementStore + ?Sized,
    R: AvailabilityRegister + ?Sized,
    H: HealthStatusSource + ?Sized,
{
    store: Arc<S>,
    register: Arc<R>,
    health: Arc<H>,
}

impl<S, R, H> Clone for DirectoryService<S, R, H>
where
    S: AdvertisementStore + ?Sized,
    R: AvailabilityRegister + ?Sized,
    H: HealthStatusSource + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            register: Arc::clone(&self.register),
            health: Arc::clone(&self.health),
        }
    }
}

impl<S, R, H> DirectoryService<S, R, H>
where
    S: AdvertisementStore + ?Sized,
    R: AvailabilityRegister + ?Sized,
    H: HealthStatusSource + ?Sized,
{
    /// Creates a directory service over injected components.
    #[must_use]
    pub const fn new(store: Arc<S>, register: Arc<R>, health: Arc<H>) -> Self {
        Self {
            store,
            register,
            health,
        }
    }

    /// Returns the advertisement store, for collaborators that read it
    /// directly.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Returns the availability register, for collaborators that read it
    /// directly.
    #[must_use]
    pub const fn register(&self) -> &Arc<R> {
        &self.register
    }

    /// Stores an advertisement under its own server URL.
    pub fn advertise(&self, advertisement: Advertisement) {
        let key = advertisement.key().clone();
        self.store.put(key, advertisement);
    }

    /// Returns live advertisements whose role passes `filter`.
    #[must_use]
    pub fn list_advertisements_by_role(&self, filter: &RoleFilter) -> Vec<Advertisement> {
        index::list_advertisements_by_role(&*self.store, filter)
    }

    /// Returns the namespaces advertised by live origins.
    #[must_use]
    pub fn list_namespaces_from_origins(&self) -> Vec<NamespaceAdvertisement> {
        index::list_namespaces_from_origins(&*self.store)
    }

    /// Lists matching servers merged with their health and availability.
    ///
    /// Disabled servers are included and flagged.
    #[must_use]
    pub fn list_servers(&self, filter: &RoleFilter) -> Vec<ServerListing> {
        self.list_advertisements_by_role(filter)
            .iter()
            .map(|advertisement| {
                let key = advertisement.key();
                ServerListing::new(
                    advertisement,
                    self.health.health_of(key),
                    self.register.is_disabled(key),
                )
            })
            .collect()
    }

    /// Looks up the availability record for a raw server URL.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Domain`] when the URL is invalid.
    pub fn availability_of(&self, server_url: &str) -> DirectoryServiceResult<AvailabilityStatus> {
        let server = ServerUrl::parse(server_url)?;
        Ok(self.register.is_disabled(&server))
    }

    /// Applies an availability toggle for a raw server URL.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Domain`] when the URL is invalid or
    /// [`DirectoryServiceError::Rejected`] when the state machine refuses the
    /// transition.
    pub fn toggle_availability(
        &self,
        server_url: &str,
        disabled: bool,
    ) -> DirectoryServiceResult<ToggleOutcome> {
        let server = ServerUrl::parse(server_url)?;
        let intent = ToggleIntent::from_disabled(disabled);

        match self.register.toggle(&server, intent) {
            Ok(reason) => {
                info!(
                    server = %server,
                    ?intent,
                    reason = reason.map_or("enabled", DisableReason::as_str),
                    "server availability changed"
                );
                Ok(ToggleOutcome { server, reason })
            }
            Err(rejection) => {
                warn!(server = %server, ?intent, %rejection, "availability toggle rejected");
                Err(rejection.into())
            }
        }
    }
}
