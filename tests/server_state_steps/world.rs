//! Shared world state for server state BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use wordbank::server_state::{
    adapters::memory::InMemoryServerStateRepository,
    domain::ServerState,
    services::{ServerStateService, ServerStateServiceError},
};

/// Service type used by the BDD world.
pub type TestServerStateService = ServerStateService<InMemoryServerStateRepository, DefaultClock>;

/// Scenario world for server state behaviour tests.
pub struct ServerStateWorld {
    pub service: TestServerStateService,
    pub tracked_at: Option<DateTime<Utc>>,
    pub last_result: Option<Result<ServerState, ServerStateServiceError>>,
}

impl ServerStateWorld {
    /// Creates a world over an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: ServerStateService::new(
                Arc::new(InMemoryServerStateRepository::new()),
                Arc::new(DefaultClock),
            ),
            tracked_at: None,
            last_result: None,
        }
    }
}

impl Default for ServerStateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ServerStateWorld {
    ServerStateWorld::default()
}

/// Parses a boolean status written in a step.
///
/// # Errors
///
/// Returns an error unless the text is `true` or `false`.
pub fn parse_status(raw: &str) -> Result<bool, eyre::Report> {
    raw.parse::<bool>()
        .map_err(|err| eyre::eyre!("invalid status {raw:?} in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
