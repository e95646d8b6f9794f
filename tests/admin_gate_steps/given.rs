//! Given steps for administrative gate BDD scenarios.

use super::world::AdminGateWorld;
use rstest_bdd_macros::given;

#[given(r#"the application environment is "{mode}""#)]
fn application_environment_is(world: &mut AdminGateWorld, mode: String) {
    world.app_env = Some(mode);
}

#[given("the application environment is unset")]
fn application_environment_is_unset(world: &mut AdminGateWorld) {
    world.app_env = None;
}
