//! Availability state machine shared by health monitoring and operators.
//!
//! A server with no record is fully enabled. The transition table lives in
//! [`transition`] so its legality can be checked without any storage or
//! request handling around it.

use super::ParseDisableReasonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a server is excluded from, or explicitly restored to, routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisableReason {
    /// Suppressed automatically, typically by health monitoring.
    TempDisabled,
    /// Suppressed by an operator decision.
    PermDisabled,
    /// Operator override of a [`DisableReason::PermDisabled`] record.
    TempEnabled,
}

impl DisableReason {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TempDisabled => "tempDisabled",
            Self::PermDisabled => "permDisabled",
            Self::TempEnabled => "tempEnabled",
        }
    }

    /// Returns whether this reason removes the server from routing.
    #[must_use]
    pub const fn filters(self) -> bool {
        matches!(self, Self::TempDisabled | Self::PermDisabled)
    }
}

impl fmt::Display for DisableReason {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DisableReason {
    type Error = ParseDisableReasonError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "tempdisabled" => Ok(Self::TempDisabled),
            "permdisabled" => Ok(Self::PermDisabled),
            "tempenabled" => Ok(Self::TempEnabled),
            _ => Err(ParseDisableReasonError(value.to_owned())),
        }
    }
}

/// Requested direction of an availability toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleIntent {
    /// Remove the server from routing.
    Disable,
    /// Restore the server to routing.
    Enable,
}

impl ToggleIntent {
    /// Maps the `disabled` flag of a toggle request onto an intent.
    #[must_use]
    pub const fn from_disabled(disabled: bool) -> Self {
        if disabled { Self::Disable } else { Self::Enable }
    }
}

/// Lookup result for a single server identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityStatus {
    reason: Option<DisableReason>,
}

impl AvailabilityStatus {
    /// Wraps the stored record, `None` meaning no record exists.
    #[must_use]
    pub const fn new(reason: Option<DisableReason>) -> Self {
        Self { reason }
    }

    /// Returns whether the server is excluded from routing.
    #[must_use]
    pub const fn is_filtered(self) -> bool {
        match self.reason {
            Some(reason) => reason.filters(),
            None => false,
        }
    }

    /// Returns the stored record, even when it does not filter.
    #[must_use]
    pub const fn reason(self) -> Option<DisableReason> {
        self.reason
    }
}

/// A toggle request that the state machine refuses.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ToggleRejection {
    /// Disable requested for a server that is already filtered.
    #[error("Can't disable a server that already has been disabled")]
    AlreadyDisabled,

    /// Enable requested for a server under an active operator override.
    #[error("Can't enable a server that already has been enabled")]
    AlreadyEnabled,

    /// Enable requested for a server with no record.
    #[error("Can't enable a server that is not disabled or does not exist")]
    NotDisabled,
}

/// Applies one toggle to the current record.
///
/// Returns the record to store afterwards, `None` meaning the record is
/// cleared.
///
/// # Errors
///
/// Returns [`ToggleRejection`] for every transition outside the table.
pub const fn transition(
    current: Option<DisableReason>,
    intent: ToggleIntent,
) -> Result<Option<DisableReason>, ToggleRejection> {
    match (current, intent) {
        (None, ToggleIntent::Disable) => Ok(Some(DisableReason::TempDisabled)),
        (None, ToggleIntent::Enable) => Err(ToggleRejection::NotDisabled),
        (
            Some(DisableReason::TempDisabled | DisableReason::PermDisabled),
            ToggleIntent::Disable,
        ) => Err(ToggleRejection::AlreadyDisabled),
        (Some(DisableReason::TempDisabled), ToggleIntent::Enable) => Ok(None),
        (Some(DisableReason::PermDisabled), ToggleIntent::Enable) => {
            Ok(Some(DisableReason::TempEnabled))
        }
        (Some(DisableReason::TempEnabled), ToggleIntent::Disable) => {
            Ok(Some(DisableReason::PermDisabled))
        }
        (Some(DisableReason::TempEnabled), ToggleIntent::Enable) => {
            Err(ToggleRejection::AlreadyEnabled)
        }
    }
}
