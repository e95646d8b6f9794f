//! Service layer for vocabulary autocomplete.

use crate::vocab::{
    domain::{VocabDomainError, VocabEntry, VocabFilter, VocabQuery},
    ports::{VocabRepository, VocabRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for vocabulary operations.
#[derive(Debug, Error)]
pub enum VocabSearchServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] VocabDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] VocabRepositoryError),
}

/// Result type for vocabulary service operations.
pub type VocabSearchServiceResult<T> = Result<T, VocabSearchServiceError>;

/// Vocabulary autocomplete service.
pub struct VocabSearchService<R>
where
    R: VocabRepository + ?Sized,
{
    repository: Arc<R>,
    filter: VocabFilter,
    max_limit: usize,
}

impl<R> Clone for VocabSearchService<R>
where
    R: VocabRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            filter: self.filter.clone(),
            max_limit: self.max_limit,
        }
    }
}

impl<R> VocabSearchService<R>
where
    R: VocabRepository + ?Sized,
{
    /// Creates a service returning at most `max_limit` suggestions.
    ///
    /// A `max_limit` of zero is raised to one.
    #[must_use]
    pub fn new(repository: Arc<R>, max_limit: usize) -> Self {
        Self {
            repository,
            filter: VocabFilter::default(),
            max_limit: max_limit.max(1),
        }
    }

    /// Replaces the default substring search configuration.
    #[must_use]
    pub fn with_filter(mut self, filter: VocabFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the configured suggestion cap.
    #[must_use]
    pub const fn max_limit(&self) -> usize {
        self.max_limit
    }

    /// Returns words matching the filter text.
    ///
    /// Blank or absent text returns the first words unfiltered. The
    /// requested limit is clamped to `1..=max_limit`.
    ///
    /// # Errors
    ///
    /// Returns persistence-layer errors from the repository.
    pub async fn autocomplete(
        &self,
        text: Option<&str>,
        limit: Option<usize>,
    ) -> VocabSearchServiceResult<Vec<VocabEntry>> {
        let effective_limit = limit.unwrap_or(self.max_limit).clamp(1, self.max_limit);
        let query = VocabQuery::new(text.map(str::to_owned), effective_limit)
            .with_filter(self.filter.clone());
        let entries = self.repository.search(&query).await?;
        debug!(
            filtered = query.clause().is_some(),
            limit = effective_limit,
            returned = entries.len(),
            "vocabulary autocomplete"
        );
        Ok(entries)
    }

    /// Adds a word to the vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`VocabSearchServiceError::Domain`] for blank words and
    /// repository errors for duplicates or persistence failures.
    pub async fn add_word(&self, raw: &str) -> VocabSearchServiceResult<VocabEntry> {
        let word = VocabEntry::normalize_word(raw)?;
        let entry = self.repository.add(&word).await?;
        info!(word_id = %entry.id(), "added vocabulary word");
        Ok(entry)
    }
}
