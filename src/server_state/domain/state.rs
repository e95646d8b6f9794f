//! Server state record.

use super::ServerStateId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Status record for one tracked server instance.
///
/// A record is created once per identifier with `status = false` and is
/// updated in place whenever the status changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerState {
    id: ServerStateId,
    status: bool,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted server state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedServerStateData {
    /// Persisted identifier.
    pub id: ServerStateId,
    /// Persisted status flag.
    pub status: bool,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ServerState {
    /// Creates a record with the default `false` status.
    #[must_use]
    pub fn new(id: ServerStateId, clock: &impl Clock) -> Self {
        Self {
            id,
            status: false,
            updated_at: clock.utc(),
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedServerStateData) -> Self {
        let PersistedServerStateData {
            id,
            status,
            updated_at,
        } = data;
        Self {
            id,
            status,
            updated_at,
        }
    }

    /// Sets the status flag and refreshes the update timestamp.
    ///
    /// Returns `true` when the flag changed.
    pub fn set_status(&mut self, status: bool, clock: &impl Clock) -> bool {
        let changed = self.status != status;
        self.status = status;
        self.updated_at = clock.utc();
        changed
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> &ServerStateId {
        &self.id
    }

    /// Returns the status flag.
    #[must_use]
    pub const fn status(&self) -> bool {
        self.status
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
