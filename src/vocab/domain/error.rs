//! Error types for vocabulary domain validation.

use thiserror::Error;

/// Errors returned while constructing vocabulary domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VocabDomainError {
    /// The word is empty after trimming.
    #[error("vocabulary word must not be empty")]
    EmptyWord,
}
