//! HTTP control surface for the federation directory.
//!
//! Routes, relative to wherever the launcher nests the router:
//!
//! - `GET   /servers`: list servers, optionally filtered by `server_type`
//! - `PATCH /servers?serverUrl=<url>`: toggle availability of one server
//! - `GET   /namespaces`: namespaces advertised by live origins

mod error;
mod handlers;
pub mod models;

use axum::{Router, routing::get};

pub use error::ApiError;

use crate::directory::{
    ports::{AdvertisementStore, AvailabilityRegister, HealthStatusSource},
    services::DirectoryService,
};

/// Builds the control-surface router over an injected directory service.
pub fn router<S, R, H>(service: DirectoryService<S, R, H>) -> Router
where
    S: AdvertisementStore + ?Sized + 'static,
    R: AvailabilityRegister + ?Sized + 'static,
    H: HealthStatusSource + ?Sized + 'static,
{
    Router::new()
        .route(
            "/servers",
            get(handlers::list_servers::<S, R, H>).patch(handlers::toggle_server::<S, R, H>),
        )
        .route("/namespaces", get(handlers::list_namespaces::<S, R, H>))
        .with_state(service)
}
