//! Server status tracking for Wordbank.
//!
//! Each tracked server or process instance owns exactly one
//! [`domain::ServerState`] record, keyed by a text identifier and carrying a
//! boolean status flag with the time it last changed. The module follows
//! hexagonal architecture:
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
