//! Error types for directory domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The server URL is empty after trimming.
    #[error("server URL must not be empty")]
    EmptyServerUrl,

    /// The server URL could not be parsed as an absolute URL.
    #[error("invalid server URL '{url}': {reason}")]
    InvalidServerUrl {
        /// The rejected input.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The server URL has no host component.
    #[error("server URL '{0}' has no host")]
    MissingHost(String),

    /// The server display name is empty after trimming.
    #[error("server name must not be empty")]
    EmptyServerName,
}

/// Error returned while parsing a server role from a filter or payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid server type: {0}")]
pub struct ParseServerRoleError(pub String);

/// Error returned while parsing a disable reason from its wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown disable reason: {0}")]
pub struct ParseDisableReasonError(pub String);
