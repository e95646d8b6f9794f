//! Then steps for server state BDD scenarios.

use super::world::{ServerStateWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use wordbank::server_state::{domain::ServerStateDomainError, services::ServerStateServiceError};

#[then(r#"the server "{id}" has status {status}"#)]
fn the_server_has_status(
    world: &ServerStateWorld,
    id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let stored = run_async(world.service.find(&id))
        .wrap_err("look up server state")?
        .ok_or_else(|| eyre::eyre!("server {id} is not tracked"))?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected} for {id}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then(r#"the update time of "{id}" is not earlier than when it was tracked"#)]
fn update_time_not_earlier(world: &ServerStateWorld, id: String) -> Result<(), eyre::Report> {
    let tracked_at = world
        .tracked_at
        .ok_or_else(|| eyre::eyre!("missing tracking time in scenario world"))?;
    let stored = run_async(world.service.find(&id))
        .wrap_err("look up server state")?
        .ok_or_else(|| eyre::eyre!("server {id} is not tracked"))?;
    if stored.updated_at() < tracked_at {
        return Err(eyre::eyre!(
            "update time {} precedes tracking time {tracked_at}",
            stored.updated_at()
        ));
    }
    Ok(())
}

#[then("the operation fails with an empty identifier error")]
fn operation_fails_with_empty_id(world: &ServerStateWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    if !matches!(
        result,
        Err(ServerStateServiceError::Domain(ServerStateDomainError::EmptyId))
    ) {
        return Err(eyre::eyre!("expected EmptyId error, got {result:?}"));
    }
    Ok(())
}
