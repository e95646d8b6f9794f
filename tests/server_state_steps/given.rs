//! Given steps for server state BDD scenarios.

use super::world::{ServerStateWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a tracked server "{id}""#)]
fn a_tracked_server(world: &mut ServerStateWorld, id: String) -> Result<(), eyre::Report> {
    let tracked =
        run_async(world.service.track(&id)).wrap_err("track server in scenario setup")?;
    world.tracked_at = Some(tracked.updated_at());
    Ok(())
}
