//! The unit stored in the advertisement registry.

use super::{NamespaceAdvertisement, ServerDescriptor, ServerRole, ServerUrl};
use serde::{Deserialize, Serialize};

/// A server descriptor together with the namespaces it advertises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advertisement {
    server: ServerDescriptor,
    namespaces: Vec<NamespaceAdvertisement>,
}

impl Advertisement {
    /// Creates an advertisement. Namespaces are kept verbatim and in order.
    #[must_use]
    pub fn new(
        server: ServerDescriptor,
        namespaces: impl IntoIterator<Item = NamespaceAdvertisement>,
    ) -> Self {
        Self {
            server,
            namespaces: namespaces.into_iter().collect(),
        }
    }

    /// Returns the server descriptor.
    #[must_use]
    pub const fn server(&self) -> &ServerDescriptor {
        &self.server
    }

    /// Returns the advertised namespaces in advertisement order.
    #[must_use]
    pub fn namespaces(&self) -> &[NamespaceAdvertisement] {
        &self.namespaces
    }

    /// Returns the registry key of the advertising server.
    #[must_use]
    pub const fn key(&self) -> &ServerUrl {
        self.server.url()
    }

    /// Returns the server role.
    #[must_use]
    pub const fn role(&self) -> ServerRole {
        self.server.role()
    }

    /// Returns the namespace path prefixes in advertisement order.
    #[must_use]
    pub fn namespace_prefixes(&self) -> Vec<String> {
        self.namespaces
            .iter()
            .map(|namespace| namespace.path().to_owned())
            .collect()
    }
}
