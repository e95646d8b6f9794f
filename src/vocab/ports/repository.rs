//! Repository port for the vocabulary lookup table.

use crate::vocab::domain::{VocabEntry, VocabQuery};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for vocabulary repository operations.
pub type VocabRepositoryResult<T> = Result<T, VocabRepositoryError>;

/// Persistence contract for vocabulary entries.
#[async_trait]
pub trait VocabRepository: Send + Sync {
    /// Stores a new word.
    ///
    /// # Errors
    ///
    /// Returns [`VocabRepositoryError::DuplicateWord`] when the word is
    /// already present.
    async fn add(&self, word: &str) -> VocabRepositoryResult<VocabEntry>;

    /// Returns entries matching the query, ordered by word.
    ///
    /// A query whose text builds no clause returns the first `limit` rows
    /// unfiltered.
    async fn search(&self, query: &VocabQuery) -> VocabRepositoryResult<Vec<VocabEntry>>;
}

/// Errors returned by vocabulary repository implementations.
#[derive(Debug, Clone, Error)]
pub enum VocabRepositoryError {
    /// The word already exists.
    #[error("duplicate vocabulary word: {0}")]
    DuplicateWord(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl VocabRepositoryError {
    /// Wraps a persistence-layer failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
