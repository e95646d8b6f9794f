//! Shared world state for vocabulary autocomplete BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use wordbank::vocab::{
    adapters::memory::InMemoryVocabRepository,
    domain::VocabEntry,
    services::{VocabSearchService, VocabSearchServiceError},
};

/// Limit used unless a scenario overrides it.
pub const DEFAULT_LIMIT: usize = 20;

/// Scenario world for autocomplete behaviour tests.
pub struct AutocompleteWorld {
    pub words: Vec<String>,
    pub limit: usize,
    pub results: Option<Result<Vec<VocabEntry>, VocabSearchServiceError>>,
}

impl AutocompleteWorld {
    /// Builds a search service over the scenario vocabulary.
    #[must_use]
    pub fn service(&self) -> VocabSearchService<InMemoryVocabRepository> {
        VocabSearchService::new(
            Arc::new(InMemoryVocabRepository::with_words(&self.words)),
            self.limit,
        )
    }
}

impl Default for AutocompleteWorld {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            limit: DEFAULT_LIMIT,
            results: None,
        }
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AutocompleteWorld {
    AutocompleteWorld::default()
}

/// Splits a comma-separated list from a step into trimmed items.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
