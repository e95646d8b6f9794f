//! Service layer for tracking server status records.

use crate::server_state::{
    domain::{ServerState, ServerStateDomainError, ServerStateId},
    ports::{ServerStateRepository, ServerStateRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for server state operations.
#[derive(Debug, Error)]
pub enum ServerStateServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ServerStateDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ServerStateRepositoryError),
}

/// Result type for server state service operations.
pub type ServerStateServiceResult<T> = Result<T, ServerStateServiceError>;

/// Server state tracking service.
///
/// The repository may be a trait object so the HTTP layer can pick an
/// adapter at startup.
pub struct ServerStateService<R, C>
where
    R: ServerStateRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for ServerStateService<R, C>
where
    R: ServerStateRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> ServerStateService<R, C>
where
    R: ServerStateRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new tracking service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Ensures a record exists for the given instance.
    ///
    /// New records start with a `false` status. Tracking an instance that
    /// already has a record returns the stored record unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStateServiceError`] when the identifier is invalid or
    /// persistence fails.
    pub async fn track(&self, raw_id: &str) -> ServerStateServiceResult<ServerState> {
        let id = ServerStateId::new(raw_id)?;
        self.find_or_create(id).await
    }

    /// Records a status change for an instance, tracking it first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStateServiceError`] when the identifier is invalid or
    /// persistence fails.
    pub async fn record_status(
        &self,
        raw_id: &str,
        status: bool,
    ) -> ServerStateServiceResult<ServerState> {
        let id = ServerStateId::new(raw_id)?;
        let mut state = self.find_or_create(id).await?;
        let changed = state.set_status(status, &*self.clock);
        self.repository.update(&state).await?;
        info!(server_id = %state.id(), status, changed, "recorded server status");
        Ok(state)
    }

    /// Finds the record for an instance.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStateServiceError`] when the identifier is invalid or
    /// persistence fails.
    pub async fn find(&self, raw_id: &str) -> ServerStateServiceResult<Option<ServerState>> {
        let id = ServerStateId::new(raw_id)?;
        Ok(self.repository.find_by_id(&id).await?)
    }

    /// Lists every tracked instance.
    ///
    /// # Errors
    ///
    /// Returns persistence-layer errors from the repository.
    pub async fn list_all(&self) -> ServerStateServiceResult<Vec<ServerState>> {
        Ok(self.repository.list_all().await?)
    }

    async fn find_or_create(&self, id: ServerStateId) -> ServerStateServiceResult<ServerState> {
        if let Some(existing) = self.repository.find_by_id(&id).await? {
            return Ok(existing);
        }

        let created = ServerState::new(id, &*self.clock);
        match self.repository.insert(&created).await {
            Ok(()) => {
                info!(server_id = %created.id(), "tracking new server instance");
                Ok(created)
            }
            Err(ServerStateRepositoryError::DuplicateId(raced_id)) => {
                debug!(server_id = %raced_id, "server instance tracked concurrently");
                let stored = self.repository.find_by_id(&raced_id).await?;
                stored.ok_or(ServerStateServiceError::Repository(
                    ServerStateRepositoryError::NotFound(raced_id),
                ))
            }
            Err(err) => Err(err.into()),
        }
    }
}
