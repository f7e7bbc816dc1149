//! Given steps for server availability BDD scenarios.

use super::world::{AvailabilityWorld, run_async};
use eyre::WrapErr;
use lodestar::directory::domain::{Advertisement, ServerDescriptor, ServerRole, ServerUrl};
use rstest_bdd_macros::given;

use super::when::toggle_request;

#[given(r#"a live cache advertised at "{url}""#)]
fn live_cache(world: &mut AvailabilityWorld, url: String) -> Result<(), eyre::Report> {
    let server_url = ServerUrl::parse(&url).wrap_err("parse cache URL")?;
    let descriptor = ServerDescriptor::new("scenario-cache", server_url, ServerRole::Cache)
        .wrap_err("build cache descriptor")?;
    world.service.advertise(Advertisement::new(descriptor, Vec::new()));
    Ok(())
}

#[given(r#"the server "{url}" is permanently disabled"#)]
fn permanently_disabled(world: &mut AvailabilityWorld, url: String) -> Result<(), eyre::Report> {
    let server_url = ServerUrl::parse(&url).wrap_err("parse disabled server URL")?;
    world.seed_permanently_disabled([server_url]);
    Ok(())
}

#[given(r#"the operator has disabled "{url}""#)]
fn operator_has_disabled(world: &mut AvailabilityWorld, url: String) -> Result<(), eyre::Report> {
    expect_accepted(world, &url, true)
}

#[given(r#"the operator has enabled "{url}""#)]
fn operator_has_enabled(world: &mut AvailabilityWorld, url: String) -> Result<(), eyre::Report> {
    expect_accepted(world, &url, false)
}

fn expect_accepted(
    world: &AvailabilityWorld,
    url: &str,
    disabled: bool,
) -> Result<(), eyre::Report> {
    let (status, body) = run_async(world.send(toggle_request(Some(url), disabled)?))
        .wrap_err("send toggle in scenario setup")?;
    if !status.is_success() {
        return Err(eyre::eyre!("setup toggle for {url} failed with {status}: {body}"));
    }
    Ok(())
}
