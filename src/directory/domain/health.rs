//! Health status slot owned by the external health subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Last known health of a server as reported by health probes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    /// No probe result is available.
    #[default]
    Unknown,
    /// Probing has started but not yet completed.
    Initializing,
    /// The last probe succeeded.
    #[serde(rename = "OK")]
    Ok,
    /// The last probe failed.
    Error,
}

impl HealthStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Initializing => "Initializing",
            Self::Ok => "OK",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
