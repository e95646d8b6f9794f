//! Environment-driven application configuration.
//!
//! Configuration is read once at startup. The administrative gate receives
//! its capability from here instead of inspecting the environment itself.

mod error;

pub use error::ConfigError;

use crate::admin_gate::domain::{AdminGate, EnvironmentMode};
use std::net::SocketAddr;
use std::str::FromStr;

/// Environment mode variable.
pub const APP_ENV_KEY: &str = "APP_ENV";
/// HTTP listen address variable.
pub const BIND_ADDR_KEY: &str = "WORDBANK_BIND_ADDR";
/// `PostgreSQL` connection URL variable.
pub const DATABASE_URL_KEY: &str = "DATABASE_URL";
/// Autocomplete suggestion cap variable.
pub const AUTOCOMPLETE_LIMIT_KEY: &str = "WORDBANK_AUTOCOMPLETE_LIMIT";
/// Connection pool size variable.
pub const DB_POOL_SIZE_KEY: &str = "WORDBANK_DB_POOL_SIZE";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 20;
const DEFAULT_DB_POOL_SIZE: u32 = 4;

/// Runtime configuration for the Wordbank server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    environment: EnvironmentMode,
    bind_addr: SocketAddr,
    database_url: Option<String>,
    autocomplete_limit: usize,
    db_pool_size: u32,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through a key lookup function.
    ///
    /// Missing and blank values fall back to their defaults. An unset
    /// environment mode is treated as production.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unparsable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let environment = read(APP_ENV_KEY)
            .map_or_else(EnvironmentMode::default, |raw| {
                EnvironmentMode::from(raw.as_str())
            });
        let bind_addr = parse_or(read(BIND_ADDR_KEY), BIND_ADDR_KEY, default_bind_addr())?;
        let autocomplete_limit = parse_or(
            read(AUTOCOMPLETE_LIMIT_KEY),
            AUTOCOMPLETE_LIMIT_KEY,
            DEFAULT_AUTOCOMPLETE_LIMIT,
        )?;
        let db_pool_size = parse_or(read(DB_POOL_SIZE_KEY), DB_POOL_SIZE_KEY, DEFAULT_DB_POOL_SIZE)?;

        if autocomplete_limit == 0 {
            return Err(ConfigError::MustBePositive(AUTOCOMPLETE_LIMIT_KEY));
        }
        if db_pool_size == 0 {
            return Err(ConfigError::MustBePositive(DB_POOL_SIZE_KEY));
        }

        Ok(Self {
            environment,
            bind_addr,
            database_url: read(DATABASE_URL_KEY),
            autocomplete_limit,
            db_pool_size,
        })
    }

    /// Returns the environment mode.
    #[must_use]
    pub const fn environment(&self) -> &EnvironmentMode {
        &self.environment
    }

    /// Returns the HTTP listen address.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Returns the `PostgreSQL` URL, if persistence is configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Returns the autocomplete suggestion cap.
    #[must_use]
    pub const fn autocomplete_limit(&self) -> usize {
        self.autocomplete_limit
    }

    /// Returns the connection pool size.
    #[must_use]
    pub const fn db_pool_size(&self) -> u32 {
        self.db_pool_size
    }

    /// Builds the administrative gate for the configured environment.
    #[must_use]
    pub const fn admin_gate(&self) -> AdminGate {
        AdminGate::for_mode(&self.environment)
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
}

fn parse_or<T>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map_or(Ok(default), |value| {
        value
            .parse::<T>()
            .map_err(|err| ConfigError::invalid(key, &value, &err))
    })
}
