//! Domain model for the federation directory.
//!
//! The directory domain models server advertisements, the namespaces origins
//! offer, and the availability state machine. All infrastructure concerns are
//! kept outside the domain boundary.

mod advertisement;
mod availability;
mod error;
mod health;
mod listing;
mod namespace;
mod role_filter;
mod server;
mod server_url;

pub use advertisement::Advertisement;
pub use availability::{
    AvailabilityStatus, DisableReason, ToggleIntent, ToggleRejection, transition,
};
pub use error::{DirectoryDomainError, ParseDisableReasonError, ParseServerRoleError};
pub use health::HealthStatus;
pub use listing::ServerListing;
pub use namespace::{NamespaceAdvertisement, NamespaceCapabilities, TokenGeneration, TokenIssuer};
pub use role_filter::RoleFilter;
pub use server::{ServerCapabilities, ServerDescriptor, ServerRole};
pub use server_url::ServerUrl;
