//! JSON payloads exchanged by the directory control surface.

use serde::{Deserialize, Serialize};

use crate::directory::{
    domain::{DisableReason, HealthStatus, ServerListing, ServerRole},
    services::ToggleOutcome,
};

/// Outcome marker carried by every toggle response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiStatus {
    /// The request was applied.
    Success,
    /// The request was rejected.
    Error,
}

/// Minimal status-plus-message body used for rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleApiResponse {
    /// Outcome marker.
    pub status: ApiStatus,
    /// Human-readable explanation.
    pub msg: String,
}

impl SimpleApiResponse {
    /// Builds an error body.
    #[must_use]
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            msg: msg.into(),
        }
    }
}

/// Body of `PATCH /servers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchServerRequest {
    /// Whether the server should be excluded from routing.
    pub disabled: bool,
}

/// Successful response to `PATCH /servers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleServerResponse {
    /// Outcome marker, always [`ApiStatus::Success`].
    pub status: ApiStatus,
    /// Human-readable summary.
    pub msg: String,
    /// Canonical URL of the toggled server.
    pub server_url: String,
    /// Whether the server is now excluded from routing.
    pub filtered: bool,
    /// Stored disable reason, empty when the server is fully enabled.
    pub filtered_type: String,
}

impl From<&ToggleOutcome> for ToggleServerResponse {
    fn from(outcome: &ToggleOutcome) -> Self {
        let msg = if outcome.is_filtered() {
            "Disabled the server successfully"
        } else {
            "Enabled the server successfully"
        };
        Self {
            status: ApiStatus::Success,
            msg: msg.to_owned(),
            server_url: outcome.server().to_string(),
            filtered: outcome.is_filtered(),
            filtered_type: reason_label(outcome.reason()),
        }
    }
}

/// One entry of the `GET /servers` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServerResponse {
    /// Display name.
    pub name: String,
    /// Token-issuing endpoint; the server URL when none was advertised.
    pub auth_url: String,
    /// Connection broker endpoint, empty when not advertised.
    pub broker_url: String,
    /// Base URL.
    pub url: String,
    /// Web UI endpoint, empty when not advertised.
    pub web_url: String,
    /// Server role.
    #[serde(rename = "type")]
    pub server_type: ServerRole,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Whether the server accepts writes.
    #[serde(rename = "enableWrite")]
    pub writes: bool,
    /// Whether clients may read from the server directly.
    #[serde(rename = "enableFallbackRead")]
    pub direct_reads: bool,
    /// Whether the server supports directory listings.
    #[serde(rename = "enableListing")]
    pub listings: bool,
    /// Health status slot.
    pub status: HealthStatus,
    /// Whether the server is excluded from routing.
    pub filtered: bool,
    /// Stored disable reason, empty when no record exists.
    pub filtered_type: String,
    /// Namespace prefixes served; always empty for caches.
    pub namespace_prefixes: Vec<String>,
}

impl From<&ServerListing> for ListServerResponse {
    fn from(listing: &ServerListing) -> Self {
        let server = listing.server();
        let capabilities = server.capabilities();
        let availability = listing.availability();
        Self {
            name: server.name().to_owned(),
            auth_url: server.effective_auth_url(),
            broker_url: server.broker_url().map(ToString::to_string).unwrap_or_default(),
            url: server.url().to_string(),
            web_url: server.web_url().map(ToString::to_string).unwrap_or_default(),
            server_type: server.role(),
            latitude: server.latitude(),
            longitude: server.longitude(),
            writes: capabilities.writes(),
            direct_reads: capabilities.direct_reads(),
            listings: capabilities.listings(),
            status: listing.health(),
            filtered: availability.is_filtered(),
            filtered_type: reason_label(availability.reason()),
            namespace_prefixes: listing.namespace_prefixes().to_vec(),
        }
    }
}

fn reason_label(reason: Option<DisableReason>) -> String {
    reason.map_or_else(String::new, |value| value.as_str().to_owned())
}
