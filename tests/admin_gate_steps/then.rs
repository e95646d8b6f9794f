//! Then steps for administrative gate BDD scenarios.

use super::world::{AdminGateWorld, ObservedResponse};
use axum::http::StatusCode;
use rstest_bdd_macros::then;

fn observed(world: &AdminGateWorld) -> Result<&ObservedResponse, eyre::Report> {
    world
        .response
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing response in scenario world"))
}

#[then("the response status is {status:u16}")]
fn response_status_is(world: &AdminGateWorld, status: u16) -> Result<(), eyre::Report> {
    let response = observed(world)?;
    if response.status.as_u16() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            response.status
        ));
    }
    Ok(())
}

#[then(r#"the response redirects to "{target}""#)]
fn response_redirects_to(world: &AdminGateWorld, target: String) -> Result<(), eyre::Report> {
    let response = observed(world)?;
    if response.status != StatusCode::TEMPORARY_REDIRECT {
        return Err(eyre::eyre!(
            "expected a temporary redirect, found {}",
            response.status
        ));
    }
    if response.location.as_deref() != Some(target.as_str()) {
        return Err(eyre::eyre!(
            "expected redirect to {target}, found {:?}",
            response.location
        ));
    }
    Ok(())
}
