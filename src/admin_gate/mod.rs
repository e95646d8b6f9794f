//! Environment gate for the administrative section.
//!
//! The gate decides whether a request may enter `/admin`. The decision is
//! made from an injected [`domain::AdminAccess`] capability rather than by
//! reading process state, so callers derive the capability once from
//! configuration and tests can construct either outcome directly.
//!
//! - Domain types in [`domain`]
//! - The axum middleware in [`adapters`]

pub mod adapters;
pub mod domain;

#[cfg(test)]
mod tests;
