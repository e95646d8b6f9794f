//! Vocabulary table entries.

use super::VocabDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a vocabulary entry, matching the `SERIAL` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabEntryId(i32);

impl VocabEntryId {
    /// Wraps a stored identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl fmt::Display for VocabEntryId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// One row of the vocabulary lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    id: VocabEntryId,
    word: String,
}

impl VocabEntry {
    /// Creates an entry from stored values.
    #[must_use]
    pub fn new(id: VocabEntryId, word: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
        }
    }

    /// Trims a word for insertion.
    ///
    /// # Errors
    ///
    /// Returns [`VocabDomainError::EmptyWord`] when nothing remains after
    /// trimming.
    pub fn normalize_word(raw: &str) -> Result<String, VocabDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VocabDomainError::EmptyWord);
        }
        Ok(trimmed.to_owned())
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> VocabEntryId {
        self.id
    }

    /// Returns the word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}
