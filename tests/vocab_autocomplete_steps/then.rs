//! Then steps for vocabulary autocomplete BDD scenarios.

use super::world::{AutocompleteWorld, split_list};
use rstest_bdd_macros::then;

fn returned_words(world: &AutocompleteWorld) -> Result<Vec<String>, eyre::Report> {
    let results = world
        .results
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing search results in scenario world"))?;
    let entries = results
        .as_ref()
        .map_err(|err| eyre::eyre!("search failed: {err}"))?;
    Ok(entries.iter().map(|entry| entry.word().to_owned()).collect())
}

#[then(r#"the results are "{expected}""#)]
fn the_results_are(world: &AutocompleteWorld, expected: String) -> Result<(), eyre::Report> {
    let actual = returned_words(world)?;
    let wanted = split_list(&expected);
    if actual != wanted {
        return Err(eyre::eyre!("expected {wanted:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("there are no results")]
fn there_are_no_results(world: &AutocompleteWorld) -> Result<(), eyre::Report> {
    let actual = returned_words(world)?;
    if !actual.is_empty() {
        return Err(eyre::eyre!("expected no results, found {actual:?}"));
    }
    Ok(())
}
