//! When steps for server state BDD scenarios.

use super::world::{ServerStateWorld, parse_status, run_async};
use rstest_bdd_macros::when;

#[when(r#"the server "{id}" is tracked"#)]
fn the_server_is_tracked(world: &mut ServerStateWorld, id: String) {
    world.last_result = Some(run_async(world.service.track(&id)));
}

#[when(r#"the status of "{id}" is recorded as {status}"#)]
fn the_status_is_recorded(
    world: &mut ServerStateWorld,
    id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let value = parse_status(&status)?;
    world.last_result = Some(run_async(world.service.record_status(&id, value)));
    Ok(())
}
