//! Request handlers for the directory control surface.

use axum::{
    Json,
    body::Bytes,
    extract::{RawQuery, State},
};
use tracing::warn;
use url::form_urlencoded;

use super::{
    error::ApiError,
    models::{ListServerResponse, PatchServerRequest, ToggleServerResponse},
};
use crate::directory::{
    domain::{NamespaceAdvertisement, RoleFilter},
    ports::{AdvertisementStore, AvailabilityRegister, HealthStatusSource},
    services::DirectoryService,
};

const SERVER_TYPE_PARAM: &str = "server_type";
const SERVER_URL_PARAM: &str = "serverUrl";

/// `GET /servers[?server_type=origin|cache]`
pub(super) async fn list_servers<S, R, H>(
    State(service): State<DirectoryService<S, R, H>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<ListServerResponse>>, ApiError>
where
    S: AdvertisementStore + ?Sized,
    R: AvailabilityRegister + ?Sized,
    H: HealthStatusSource + ?Sized,
{
    let values = query_values(query.as_deref(), SERVER_TYPE_PARAM);
    let filter = RoleFilter::parse(values.iter().map(String::as_str)).map_err(|err| {
        warn!(error = %err, "rejected server listing filter");
        ApiError::from(err)
    })?;

    let listings = service.list_servers(&filter);
    Ok(Json(listings.iter().map(ListServerResponse::from).collect()))
}

/// `PATCH /servers?serverUrl=<url>` with body `{"disabled": bool}`
pub(super) async fn toggle_server<S, R, H>(
    State(service): State<DirectoryService<S, R, H>>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Json<ToggleServerResponse>, ApiError>
where
    S: AdvertisementStore + ?Sized,
    R: AvailabilityRegister + ?Sized,
    H: HealthStatusSource + ?Sized,
{
    let server_url = query_values(query.as_deref(), SERVER_URL_PARAM)
        .into_iter()
        .find(|value| !value.trim().is_empty())
        .ok_or(ApiError::MissingServerUrl)?;
    let request: PatchServerRequest =
        serde_json::from_slice(&body).map_err(|err| ApiError::InvalidBody(err.to_string()))?;

    let outcome = service.toggle_availability(&server_url, request.disabled)?;
    Ok(Json(ToggleServerResponse::from(&outcome)))
}

/// `GET /namespaces`
pub(super) async fn list_namespaces<S, R, H>(
    State(service): State<DirectoryService<S, R, H>>,
) -> Json<Vec<NamespaceAdvertisement>>
where
    S: AdvertisementStore + ?Sized,
    R: AvailabilityRegister + ?Sized,
    H: HealthStatusSource + ?Sized,
{
    Json(service.list_namespaces_from_origins())
}

/// Collects every value of `name` in a raw query string, percent-decoded.
fn query_values(query: Option<&str>, name: &str) -> Vec<String> {
    query.map_or_else(Vec::new, |raw| {
        form_urlencoded::parse(raw.as_bytes())
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .collect()
    })
}
