//! Diesel row models for server state persistence.

use super::schema::server_state;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for server state records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = server_state)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ServerStateRow {
    /// Instance identifier.
    pub id: String,
    /// Status flag.
    pub status: bool,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for server state records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = server_state)]
pub struct NewServerStateRow {
    /// Instance identifier.
    pub id: String,
    /// Status flag.
    pub status: bool,
    /// Creation timestamp.
    pub updated_at: DateTime<Utc>,
}
