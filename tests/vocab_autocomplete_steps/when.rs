//! When steps for vocabulary autocomplete BDD scenarios.

use super::world::{AutocompleteWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the user searches for "{text}""#)]
fn the_user_searches_for(world: &mut AutocompleteWorld, text: String) {
    let service = world.service();
    world.results = Some(run_async(service.autocomplete(Some(&text), None)));
}

#[when("the user searches without a filter")]
fn the_user_searches_without_filter(world: &mut AutocompleteWorld) {
    let service = world.service();
    world.results = Some(run_async(service.autocomplete(None, None)));
}
