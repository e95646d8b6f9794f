//! Given steps for vocabulary autocomplete BDD scenarios.

use super::world::{AutocompleteWorld, split_list};
use rstest_bdd_macros::given;

#[given(r#"the vocabulary "{words}""#)]
fn the_vocabulary(world: &mut AutocompleteWorld, words: String) {
    world.words = split_list(&words);
}

#[given("the autocomplete limit is {limit:usize}")]
fn the_autocomplete_limit(world: &mut AutocompleteWorld, limit: usize) {
    world.limit = limit;
}
