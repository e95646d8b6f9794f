//! Shared world state for administrative gate BDD scenarios.

use axum::http::StatusCode;
use rstest::fixture;

/// Status and redirect target captured from a response.
#[derive(Debug, Clone)]
pub struct ObservedResponse {
    pub status: StatusCode,
    pub location: Option<String>,
}

/// Scenario world for administrative gate behaviour tests.
#[derive(Debug, Default)]
pub struct AdminGateWorld {
    pub app_env: Option<String>,
    pub response: Option<ObservedResponse>,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AdminGateWorld {
    AdminGateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
