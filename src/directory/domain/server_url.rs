//! Canonical server URL used as the registry key.

use super::DirectoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Validated base URL of a federation server.
///
/// The canonical string form is the key shared by the advertisement store
/// and the availability register. A bare root path is rendered without its
/// trailing slash so that `https://origin.com` and `https://origin.com/`
/// address the same server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServerUrl {
    url: Url,
    key: String,
}

impl ServerUrl {
    /// Parses and canonicalises a server URL.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError`] when the input is empty, is not an
    /// absolute URL, or has no host.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, DirectoryDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DirectoryDomainError::EmptyServerUrl);
        }

        let url = Url::parse(trimmed).map_err(|err| DirectoryDomainError::InvalidServerUrl {
            url: trimmed.to_owned(),
            reason: err.to_string(),
        })?;
        if url.host_str().is_none_or(str::is_empty) {
            return Err(DirectoryDomainError::MissingHost(trimmed.to_owned()));
        }

        let key = canonical_key(&url);
        Ok(Self { url, key })
    }

    /// Returns the canonical key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the host component.
    #[must_use]
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }
}

fn canonical_key(url: &Url) -> String {
    let rendered = url.as_str();
    if url.path() == "/" && url.query().is_none() && url.fragment().is_none() {
        rendered.strip_suffix('/').unwrap_or(rendered).to_owned()
    } else {
        rendered.to_owned()
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.key)
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl TryFrom<String> for ServerUrl {
    type Error = DirectoryDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for ServerUrl {
    type Error = DirectoryDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ServerUrl> for String {
    fn from(value: ServerUrl) -> Self {
        value.key
    }
}
