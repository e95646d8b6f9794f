//! Identifier type for server state records.

use super::ServerStateDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a server state identifier.
const MAX_SERVER_STATE_ID_LENGTH: usize = 255;

/// Validated identifier of a tracked server or process instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerStateId(String);

impl ServerStateId {
    /// Creates a validated identifier.
    ///
    /// Surrounding whitespace is removed. Case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStateDomainError`] when the identifier is empty or too
    /// long.
    pub fn new(value: impl Into<String>) -> Result<Self, ServerStateDomainError> {
        let normalized = value.into().trim().to_owned();

        if normalized.is_empty() {
            return Err(ServerStateDomainError::EmptyId);
        }

        if normalized.chars().count() > MAX_SERVER_STATE_ID_LENGTH {
            return Err(ServerStateDomainError::IdTooLong(normalized));
        }

        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServerStateId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ServerStateId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
