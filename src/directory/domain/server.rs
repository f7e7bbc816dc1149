//! Server descriptor domain types.

use super::{DirectoryDomainError, ParseServerRoleError, ServerUrl};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Role a server plays in the federation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServerRole {
    /// Holds authoritative data and advertises namespaces.
    Origin,
    /// Intermediary that serves data on behalf of origins.
    Cache,
}

impl ServerRole {
    /// Every role, in listing order.
    pub const ALL: [Self; 2] = [Self::Origin, Self::Cache];

    /// Returns the display representation used in JSON payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Origin => "Origin",
            Self::Cache => "Cache",
        }
    }

    /// Returns whether servers of this role may advertise namespaces.
    #[must_use]
    pub const fn advertises_namespaces(self) -> bool {
        matches!(self, Self::Origin)
    }
}

impl fmt::Display for ServerRole {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ServerRole {
    type Error = ParseServerRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "origin" => Ok(Self::Origin),
            "cache" => Ok(Self::Cache),
            _ => Err(ParseServerRoleError(value.to_owned())),
        }
    }
}

/// Server-wide capability flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerCapabilities {
    writes: bool,
    direct_reads: bool,
    listings: bool,
}

impl ServerCapabilities {
    /// Creates a capability set.
    #[must_use]
    pub const fn new(writes: bool, direct_reads: bool, listings: bool) -> Self {
        Self {
            writes,
            direct_reads,
            listings,
        }
    }

    /// Returns whether the server accepts writes.
    #[must_use]
    pub const fn writes(&self) -> bool {
        self.writes
    }

    /// Returns whether clients may read from the server directly.
    #[must_use]
    pub const fn direct_reads(&self) -> bool {
        self.direct_reads
    }

    /// Returns whether the server supports directory listings.
    #[must_use]
    pub const fn listings(&self) -> bool {
        self.listings
    }
}

/// Identity and metadata advertised by one participating server.
///
/// A descriptor is immutable; a server changes it only by re-advertising.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDescriptor {
    name: String,
    url: ServerUrl,
    role: ServerRole,
    auth_url: Option<Url>,
    broker_url: Option<Url>,
    web_url: Option<Url>,
    latitude: f64,
    longitude: f64,
    capabilities: ServerCapabilities,
}

impl ServerDescriptor {
    /// Creates a descriptor with no optional endpoints, located at `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyServerName`] when the name is
    /// empty after trimming.
    pub fn new(
        name: impl Into<String>,
        url: ServerUrl,
        role: ServerRole,
    ) -> Result<Self, DirectoryDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DirectoryDomainError::EmptyServerName);
        }

        Ok(Self {
            name: trimmed.to_owned(),
            url,
            role,
            auth_url: None,
            broker_url: None,
            web_url: None,
            latitude: 0.0,
            longitude: 0.0,
            capabilities: ServerCapabilities::default(),
        })
    }

    /// Sets the geographic coordinates.
    #[must_use]
    pub const fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets the capability flags.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: ServerCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Sets the token-issuing endpoint.
    #[must_use]
    pub fn with_auth_url(mut self, url: Url) -> Self {
        self.auth_url = Some(url);
        self
    }

    /// Sets the connection broker endpoint.
    #[must_use]
    pub fn with_broker_url(mut self, url: Url) -> Self {
        self.broker_url = Some(url);
        self
    }

    /// Sets the web UI endpoint.
    #[must_use]
    pub fn with_web_url(mut self, url: Url) -> Self {
        self.web_url = Some(url);
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base URL, which doubles as the registry key.
    #[must_use]
    pub const fn url(&self) -> &ServerUrl {
        &self.url
    }

    /// Returns the server role.
    #[must_use]
    pub const fn role(&self) -> ServerRole {
        self.role
    }

    /// Returns the explicitly advertised auth endpoint, if any.
    #[must_use]
    pub const fn auth_url(&self) -> Option<&Url> {
        self.auth_url.as_ref()
    }

    /// Returns the auth endpoint, falling back to the base URL.
    #[must_use]
    pub fn effective_auth_url(&self) -> String {
        self.auth_url
            .as_ref()
            .map_or_else(|| self.url.to_string(), Url::to_string)
    }

    /// Returns the broker endpoint, if any.
    #[must_use]
    pub const fn broker_url(&self) -> Option<&Url> {
        self.broker_url.as_ref()
    }

    /// Returns the web UI endpoint, if any.
    #[must_use]
    pub const fn web_url(&self) -> Option<&Url> {
        self.web_url.as_ref()
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the capability flags.
    #[must_use]
    pub const fn capabilities(&self) -> ServerCapabilities {
        self.capabilities
    }
}
