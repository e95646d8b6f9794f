//! Error types for server state domain validation.

use thiserror::Error;

/// Errors returned while constructing server state domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerStateDomainError {
    /// The server identifier is empty after trimming.
    #[error("server state identifier must not be empty")]
    EmptyId,

    /// The server identifier exceeds the storage limit.
    #[error("server state identifier exceeds 255 character limit: {0}")]
    IdTooLong(String),
}
