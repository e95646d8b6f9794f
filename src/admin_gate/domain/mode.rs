//! Runtime environment mode.

use std::fmt;

/// Runtime environment the process was started in.
///
/// Only the exact value `development` selects [`Self::Development`]. Unknown
/// values are preserved so they can be logged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum EnvironmentMode {
    /// Local development.
    Development,
    /// Automated test runs.
    Test,
    /// Production deployment.
    #[default]
    Production,
    /// Any other configured value.
    Other(String),
}

impl EnvironmentMode {
    /// Returns the canonical string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
            Self::Other(value) => value,
        }
    }

    /// Returns `true` for [`Self::Development`].
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl From<&str> for EnvironmentMode {
    fn from(value: &str) -> Self {
        match value {
            "development" => Self::Development,
            "test" => Self::Test,
            "production" => Self::Production,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for EnvironmentMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
