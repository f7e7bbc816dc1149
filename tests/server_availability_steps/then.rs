//! Then steps for server availability BDD scenarios.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use eyre::WrapErr;

use super::world::{AvailabilityWorld, RecordedResponse, run_async};
use rstest_bdd_macros::then;

fn last_response(world: &AvailabilityWorld) -> Result<&RecordedResponse, eyre::Report> {
    world
        .last_response
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing toggle response in scenario world"))
}

#[then(r#"the toggle succeeds with filtered type "{filtered_type}""#)]
fn toggle_succeeds(world: &AvailabilityWorld, filtered_type: String) -> Result<(), eyre::Report> {
    let (status, body) = last_response(world)?;

    if *status != StatusCode::OK {
        return Err(eyre::eyre!("expected 200 OK, got {status}: {body}"));
    }
    if body["status"] != "success" {
        return Err(eyre::eyre!("expected success status, got {body}"));
    }
    if body["filteredType"] != filtered_type.as_str() {
        return Err(eyre::eyre!(
            "expected filtered type {filtered_type}, got {}",
            body["filteredType"]
        ));
    }
    Ok(())
}

#[then(r#"the toggle is rejected with "{message}""#)]
fn toggle_rejected(world: &AvailabilityWorld, message: String) -> Result<(), eyre::Report> {
    let (status, body) = last_response(world)?;

    if *status != StatusCode::BAD_REQUEST {
        return Err(eyre::eyre!("expected 400 Bad Request, got {status}: {body}"));
    }
    if body["status"] != "error" || body["msg"] != message.as_str() {
        return Err(eyre::eyre!("expected error '{message}', got {body}"));
    }
    Ok(())
}

#[then(r#"the cache listing shows "{url}" as filtered"#)]
fn cache_listing_shows_filtered(
    world: &AvailabilityWorld,
    url: String,
) -> Result<(), eyre::Report> {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/servers?server_type=cache")
        .body(Body::empty())?;
    let (status, body) = run_async(world.send(request)).wrap_err("list caches")?;
    if status != StatusCode::OK {
        return Err(eyre::eyre!("listing failed with {status}: {body}"));
    }

    let listed = body
        .as_array()
        .and_then(|servers| servers.iter().find(|server| server["url"] == url.as_str()))
        .ok_or_else(|| eyre::eyre!("{url} missing from cache listing {body}"))?;
    if listed["filtered"] != true {
        return Err(eyre::eyre!("expected {url} to be filtered, got {listed}"));
    }
    Ok(())
}
