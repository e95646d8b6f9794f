//! Repository port for server state persistence.

use crate::server_state::domain::{ServerState, ServerStateId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for server state repository operations.
pub type ServerStateRepositoryResult<T> = Result<T, ServerStateRepositoryError>;

/// Persistence contract for server state records.
#[async_trait]
pub trait ServerStateRepository: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStateRepositoryError::DuplicateId`] when a record with
    /// the same identifier already exists.
    async fn insert(&self, state: &ServerState) -> ServerStateRepositoryResult<()>;

    /// Persists the status and timestamp of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStateRepositoryError::NotFound`] when the record does
    /// not exist.
    async fn update(&self, state: &ServerState) -> ServerStateRepositoryResult<()>;

    /// Finds a record by identifier.
    async fn find_by_id(
        &self,
        id: &ServerStateId,
    ) -> ServerStateRepositoryResult<Option<ServerState>>;

    /// Returns all records ordered by identifier.
    async fn list_all(&self) -> ServerStateRepositoryResult<Vec<ServerState>>;
}

/// Errors returned by server state repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ServerStateRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate server state identifier: {0}")]
    DuplicateId(ServerStateId),

    /// The record was not found.
    #[error("server state not found: {0}")]
    NotFound(ServerStateId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted server state data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ServerStateRepositoryError {
    /// Wraps persisted-data decoding or validation failures.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence-layer failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
