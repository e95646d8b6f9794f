//! In-memory repository for server state records.

use crate::server_state::{
    domain::{ServerState, ServerStateId},
    ports::{ServerStateRepository, ServerStateRepositoryError, ServerStateRepositoryResult},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory server state repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryServerStateRepository {
    states: Arc<RwLock<BTreeMap<ServerStateId, ServerState>>>,
}

impl InMemoryServerStateRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl ToString) -> ServerStateRepositoryError {
    ServerStateRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ServerStateRepository for InMemoryServerStateRepository {
    async fn insert(&self, state: &ServerState) -> ServerStateRepositoryResult<()> {
        let mut states = self.states.write().map_err(lock_poisoned)?;

        if states.contains_key(state.id()) {
            return Err(ServerStateRepositoryError::DuplicateId(state.id().clone()));
        }

        states.insert(state.id().clone(), state.clone());
        Ok(())
    }

    async fn update(&self, state: &ServerState) -> ServerStateRepositoryResult<()> {
        let mut states = self.states.write().map_err(lock_poisoned)?;

        let stored = states
            .get_mut(state.id())
            .ok_or_else(|| ServerStateRepositoryError::NotFound(state.id().clone()))?;
        *stored = state.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &ServerStateId,
    ) -> ServerStateRepositoryResult<Option<ServerState>> {
        let states = self.states.read().map_err(lock_poisoned)?;
        Ok(states.get(id).cloned())
    }

    async fn list_all(&self) -> ServerStateRepositoryResult<Vec<ServerState>> {
        let states = self.states.read().map_err(lock_poisoned)?;
        Ok(states.values().cloned().collect())
    }
}
