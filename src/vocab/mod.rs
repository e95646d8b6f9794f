//! Vocabulary lookup and autocomplete search for Wordbank.
//!
//! The central piece is the filter clause builder: a free-text filter is
//! turned into an optional case-insensitive substring predicate over the
//! `word` column, which callers compose into their own queries. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
