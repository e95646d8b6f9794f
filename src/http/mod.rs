//! HTTP surface for Wordbank.
//!
//! Public routes live under `/api`. Everything under `/admin` passes through
//! the administrative gate first.

mod error;
mod handlers;
mod response;

pub use error::ApiError;
pub use response::ApiResponse;

use crate::{
    admin_gate::{adapters::enforce_admin_gate, domain::AdminGate},
    server_state::{ports::ServerStateRepository, services::ServerStateService},
    vocab::{ports::VocabRepository, services::VocabSearchService},
};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use mockable::DefaultClock;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Vocabulary service over any repository adapter.
pub type SharedVocabService = VocabSearchService<dyn VocabRepository>;

/// Server state service over any repository adapter.
pub type SharedServerStateService = ServerStateService<dyn ServerStateRepository, DefaultClock>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    vocab: SharedVocabService,
    server_state: SharedServerStateService,
}

impl AppState {
    /// Wires services over the given repositories.
    #[must_use]
    pub fn new(
        vocab_repository: Arc<dyn VocabRepository>,
        server_state_repository: Arc<dyn ServerStateRepository>,
        autocomplete_limit: usize,
    ) -> Self {
        Self {
            vocab: VocabSearchService::new(vocab_repository, autocomplete_limit),
            server_state: ServerStateService::new(server_state_repository, Arc::new(DefaultClock)),
        }
    }
}

/// Creates the application router.
#[must_use]
pub fn create_router(state: AppState, gate: AdminGate) -> Router {
    let admin_routes = Router::new()
        .route("/server-state", get(handlers::list_server_states))
        .route(
            "/server-state/{id}",
            get(handlers::get_server_state)
                .post(handlers::track_server_state)
                .put(handlers::record_server_status),
        )
        .route("/vocab", post(handlers::add_vocab_word))
        .fallback(handlers::admin_not_found)
        .layer(middleware::from_fn_with_state(gate, enforce_admin_gate));

    let public_routes = Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/vocab", get(handlers::search_vocab));

    Router::new()
        .merge(public_routes)
        .nest("/admin", admin_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
