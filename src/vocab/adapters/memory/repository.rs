//! In-memory repository for vocabulary entries.

use crate::vocab::{
    domain::{VocabEntry, VocabEntryId, VocabQuery},
    ports::{VocabRepository, VocabRepositoryError, VocabRepositoryResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory vocabulary repository.
///
/// Filtering evaluates the same [`crate::vocab::domain::FilterClause`] the
/// `PostgreSQL` adapter sends to the database. Results are sorted by byte
/// order of the word, as the `PostgreSQL` adapter does with `COLLATE "C"`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVocabRepository {
    state: Arc<RwLock<InMemoryVocabState>>,
}

#[derive(Debug, Default)]
struct InMemoryVocabState {
    entries: Vec<VocabEntry>,
    last_id: i32,
}

impl InMemoryVocabState {
    fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word() == word)
    }

    fn push(&mut self, word: &str) -> VocabEntry {
        self.last_id += 1;
        let entry = VocabEntry::new(VocabEntryId::new(self.last_id), word);
        self.entries.push(entry.clone());
        entry
    }
}

impl InMemoryVocabRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository preloaded with words, skipping duplicates.
    #[must_use]
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = InMemoryVocabState::default();
        for word in words {
            if !state.contains(word.as_ref()) {
                state.push(word.as_ref());
            }
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

fn lock_poisoned(err: impl ToString) -> VocabRepositoryError {
    VocabRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl VocabRepository for InMemoryVocabRepository {
    async fn add(&self, word: &str) -> VocabRepositoryResult<VocabEntry> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.contains(word) {
            return Err(VocabRepositoryError::DuplicateWord(word.to_owned()));
        }
        Ok(state.push(word))
    }

    async fn search(&self, query: &VocabQuery) -> VocabRepositoryResult<Vec<VocabEntry>> {
        let clause = query.clause();
        let state = self.state.read().map_err(lock_poisoned)?;

        let mut found: Vec<VocabEntry> = state
            .entries
            .iter()
            .filter(|entry| clause.as_ref().is_none_or(|active| active.matches(entry)))
            .cloned()
            .collect();
        found.sort_by(|left, right| left.word().cmp(right.word()));
        found.truncate(query.limit());
        Ok(found)
    }
}
