//! Directory configuration.
//!
//! Settings are read from TOML. Every field has a default, so an empty file
//! yields a working configuration:
//!
//! ```toml
//! advertisement_ttl_secs = 900
//! eviction_interval_secs = 30
//! filtered_servers = ["https://origin.example.org:8443"]
//! ```

use std::sync::Arc;
use std::time::Duration;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::directory::{
    adapters::memory::{InMemoryAvailabilityRegister, TtlAdvertisementStore},
    domain::{DirectoryDomainError, DisableReason, ServerUrl},
};

/// Default values for configuration.
mod defaults {
    pub const fn advertisement_ttl_secs() -> u64 {
        15 * 60
    }

    pub const fn eviction_interval_secs() -> u64 {
        30
    }
}

/// Errors returned while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`DirectoryConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting holds an unusable value.
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Setting name.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// An entry of `filtered_servers` is not a valid server URL.
    #[error("invalid filtered server: {0}")]
    InvalidFilteredServer(#[from] DirectoryDomainError),
}

/// Settings for the advertisement store and availability register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
    /// How long an advertisement stays live without a refresh.
    #[serde(default = "defaults::advertisement_ttl_secs")]
    pub advertisement_ttl_secs: u64,
    /// Period of the background eviction sweep.
    #[serde(default = "defaults::eviction_interval_secs")]
    pub eviction_interval_secs: u64,
    /// Servers excluded from routing by operator decision at start-up.
    #[serde(default)]
    pub filtered_servers: Vec<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            advertisement_ttl_secs: defaults::advertisement_ttl_secs(),
            eviction_interval_secs: defaults::eviction_interval_secs(),
            filtered_servers: Vec::new(),
        }
    }
}

impl DirectoryConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys, and
    /// the errors of [`Self::validate`].
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, and the
    /// errors of [`Self::from_toml_str`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_string(),
            source,
        };
        let file_name = path.file_name().ok_or_else(|| {
            io_error(std::io::Error::other("path must include a file name"))
        })?;
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let contents = dir.read_to_string(file_name).map_err(io_error)?;

        let config = Self::from_toml_str(&contents)?;
        info!(
            path = %path,
            ttl_secs = config.advertisement_ttl_secs,
            filtered = config.filtered_servers.len(),
            "loaded directory configuration"
        );
        Ok(config)
    }

    /// Checks durations and filtered server URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for zero durations and
    /// [`ConfigError::InvalidFilteredServer`] for unparseable URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.advertisement_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "advertisement_ttl_secs",
                reason: "must be greater than zero".to_owned(),
            });
        }
        if self.eviction_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "eviction_interval_secs",
                reason: "must be greater than zero".to_owned(),
            });
        }
        self.filtered_server_urls()?;
        Ok(())
    }

    /// Returns the advertisement time-to-live.
    #[must_use]
    pub const fn advertisement_ttl(&self) -> Duration {
        Duration::from_secs(self.advertisement_ttl_secs)
    }

    /// Returns the eviction sweep period.
    #[must_use]
    pub const fn eviction_interval(&self) -> Duration {
        Duration::from_secs(self.eviction_interval_secs)
    }

    /// Parses the filtered server list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFilteredServer`] for the first invalid
    /// entry.
    pub fn filtered_server_urls(&self) -> Result<Vec<ServerUrl>, ConfigError> {
        self.filtered_servers
            .iter()
            .map(|raw| ServerUrl::parse(raw).map_err(ConfigError::from))
            .collect()
    }

    /// Builds an empty advertisement store using the configured TTL.
    #[must_use]
    pub fn build_store<C>(&self, clock: Arc<C>) -> TtlAdvertisementStore<C>
    where
        C: Clock + Send + Sync,
    {
        TtlAdvertisementStore::new(self.advertisement_ttl(), clock)
    }

    /// Builds an availability register in which every filtered server starts
    /// as [`DisableReason::PermDisabled`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFilteredServer`] for an invalid entry.
    pub fn build_register(&self) -> Result<InMemoryAvailabilityRegister, ConfigError> {
        let records = self
            .filtered_server_urls()?
            .into_iter()
            .map(|server| (server, DisableReason::PermDisabled));
        Ok(InMemoryAvailabilityRegister::with_records(records))
    }
}
