//! When steps for server availability BDD scenarios.

use axum::{
    body::Body,
    http::{Method, Request, header},
};
use url::form_urlencoded;

use super::world::{AvailabilityWorld, run_async};
use rstest_bdd_macros::when;

/// Builds a `PATCH /servers` request, percent-encoding the server URL.
///
/// # Errors
///
/// Returns an error if the request cannot be built.
pub fn toggle_request(
    server_url: Option<&str>,
    disabled: bool,
) -> Result<Request<Body>, eyre::Report> {
    let uri = server_url.map_or_else(
        || "/servers".to_owned(),
        |url| {
            let query: String = form_urlencoded::Serializer::new(String::new())
                .append_pair("serverUrl", url)
                .finish();
            format!("/servers?{query}")
        },
    );
    let body = serde_json::json!({ "disabled": disabled }).to_string();
    Ok(Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))?)
}

#[when(r#"the operator disables "{url}""#)]
fn operator_disables(world: &mut AvailabilityWorld, url: String) -> Result<(), eyre::Report> {
    let response = run_async(world.send(toggle_request(Some(&url), true)?))?;
    world.last_response = Some(response);
    Ok(())
}

#[when(r#"the operator enables "{url}""#)]
fn operator_enables(world: &mut AvailabilityWorld, url: String) -> Result<(), eyre::Report> {
    let response = run_async(world.send(toggle_request(Some(&url), false)?))?;
    world.last_response = Some(response);
    Ok(())
}

#[when("the operator sends a toggle without a server URL")]
fn operator_omits_server_url(world: &mut AvailabilityWorld) -> Result<(), eyre::Report> {
    let response = run_async(world.send(toggle_request(None, true)?))?;
    world.last_response = Some(response);
    Ok(())
}
