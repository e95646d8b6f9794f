//! Wordbank: vocabulary lookup service.
//!
//! This crate provides the vocabulary autocomplete search, a
//! development-only administrative section, and per-instance server state
//! tracking behind a small HTTP surface.
//!
//! # Architecture
//!
//! Wordbank follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`admin_gate`]: Environment-gated access to the administrative section
//! - [`server_state`]: Singleton-per-id server status records
//! - [`vocab`]: Vocabulary filter clauses and autocomplete search
//! - [`config`]: Environment-driven application configuration
//! - [`http`]: axum router wiring the services together
//! - [`telemetry`]: Tracing subscriber setup

pub mod admin_gate;
pub mod config;
pub mod http;
pub mod server_state;
pub mod telemetry;
pub mod vocab;
