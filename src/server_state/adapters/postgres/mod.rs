//! `PostgreSQL` adapters for server state persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresServerStateRepository, ServerStatePgPool};
