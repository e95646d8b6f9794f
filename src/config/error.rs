//! Configuration error types.

use thiserror::Error;

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable could not be parsed.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// A numeric variable was zero.
    #[error("{0} must be greater than zero")]
    MustBePositive(&'static str),
}

impl ConfigError {
    /// Creates an [`Self::InvalidValue`] error.
    pub fn invalid(key: &'static str, value: &str, reason: &impl std::fmt::Display) -> Self {
        Self::InvalidValue {
            key,
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }
}
