//! Error responses for the directory control surface.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::models::SimpleApiResponse;
use crate::directory::{domain::ParseServerRoleError, services::DirectoryServiceError};

/// Errors surfaced to HTTP clients. Every variant is a client error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `serverUrl` query parameter is absent or blank.
    #[error("'serverUrl' is a required query parameter")]
    MissingServerUrl,

    /// The request body is absent or not the expected JSON.
    #[error("Failed to bind request body: {0}")]
    InvalidBody(String),

    /// A `server_type` token is not a known role.
    #[error("Invalid 'server_type' query parameter: {0}")]
    InvalidServerType(#[from] ParseServerRoleError),

    /// The service rejected the request.
    #[error(transparent)]
    Service(#[from] DirectoryServiceError),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(SimpleApiResponse::error(self.to_string()))).into_response()
    }
}
