//! Namespace advertisements offered by origins.
//!
//! Issuer and token-generation metadata is opaque to the directory. It is
//! stored and returned exactly as the advertiser supplied it.

use serde::{Deserialize, Serialize};

/// Access capabilities declared for one namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceCapabilities {
    /// Objects may be read without a token.
    pub public_reads: bool,
    /// Objects may be read with a token.
    pub reads: bool,
    /// Objects may be written.
    pub writes: bool,
    /// Directory listings are supported.
    pub listings: bool,
    /// Clients may bypass caches and read from the origin.
    pub direct_reads: bool,
}

/// Token issuer trusted for a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIssuer {
    /// Issuer endpoint.
    pub issuer_url: String,
    /// Paths the issuer may authorise, relative to the namespace.
    #[serde(default)]
    pub base_paths: Vec<String>,
    /// Paths the issuer may not authorise.
    #[serde(default)]
    pub restricted_paths: Vec<String>,
}

/// Token generation strategy for a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGeneration {
    /// Strategy identifier, such as `OAuth2` or `Vault`.
    pub strategy: String,
    /// Vault endpoint for the `Vault` strategy.
    #[serde(default)]
    pub vault_server: String,
    /// Deepest scope a generated token may carry.
    pub max_scope_depth: u32,
    /// Issuer that mints the credentials.
    #[serde(default)]
    pub credential_issuer: String,
}

/// One routable path prefix offered by an origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceAdvertisement {
    path: String,
    public_read: bool,
    #[serde(default)]
    capabilities: NamespaceCapabilities,
    #[serde(default)]
    issuers: Vec<TokenIssuer>,
    #[serde(default)]
    generation: Vec<TokenGeneration>,
}

impl NamespaceAdvertisement {
    /// Creates a namespace advertisement for `path` with no token metadata.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            public_read: false,
            capabilities: NamespaceCapabilities::default(),
            issuers: Vec::new(),
            generation: Vec::new(),
        }
    }

    /// Sets the public-read flag and the matching capability.
    #[must_use]
    pub const fn with_public_read(mut self, public_read: bool) -> Self {
        self.public_read = public_read;
        self.capabilities.public_reads = public_read;
        self
    }

    /// Replaces the capability set.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: NamespaceCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Sets the trusted token issuers.
    #[must_use]
    pub fn with_issuers(mut self, issuers: impl IntoIterator<Item = TokenIssuer>) -> Self {
        self.issuers = issuers.into_iter().collect();
        self
    }

    /// Sets the token generation strategies.
    #[must_use]
    pub fn with_generation(mut self, generation: impl IntoIterator<Item = TokenGeneration>) -> Self {
        self.generation = generation.into_iter().collect();
        self
    }

    /// Returns the namespace path prefix.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns whether the namespace is publicly readable.
    #[must_use]
    pub const fn public_read(&self) -> bool {
        self.public_read
    }

    /// Returns the declared capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> NamespaceCapabilities {
        self.capabilities
    }

    /// Returns the trusted token issuers.
    #[must_use]
    pub fn issuers(&self) -> &[TokenIssuer] {
        &self.issuers
    }

    /// Returns the token generation strategies.
    #[must_use]
    pub fn generation(&self) -> &[TokenGeneration] {
        &self.generation
    }
}
