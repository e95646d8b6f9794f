//! Runs the Wordbank HTTP server.
//!
//! Usage:
//!
//! ```text
//! APP_ENV=development DATABASE_URL=postgres://localhost/wordbank wordbank_server
//! ```
//!
//! Without `DATABASE_URL` the server keeps records in memory. Administrative
//! routes are only served when `APP_ENV` is `development`; every other
//! environment redirects them to `/404`.

use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::{error, info};
use wordbank::{
    config::{AppConfig, ConfigError},
    http::{AppState, create_router},
    server_state::{
        adapters::{memory::InMemoryServerStateRepository, postgres::PostgresServerStateRepository},
        ports::ServerStateRepository,
    },
    telemetry::init_tracing,
    vocab::{
        adapters::{memory::InMemoryVocabRepository, postgres::PostgresVocabRepository},
        ports::VocabRepository,
    },
};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database pool init failed: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("server I/O failed: {0}")]
    Io(#[source] std::io::Error),
}

struct Repositories {
    vocab: Arc<dyn VocabRepository>,
    server_state: Arc<dyn ServerStateRepository>,
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    run().map_err(|err| {
        error!(error = %err, "wordbank server stopped");
        err.into()
    })
}

fn run() -> Result<(), ServerError> {
    let config = AppConfig::from_env()?;
    let repositories = build_repositories(&config)?;
    let state = AppState::new(
        repositories.vocab,
        repositories.server_state,
        config.autocomplete_limit(),
    );
    let router = create_router(state, config.admin_gate());

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(ServerError::RuntimeInit)?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(config.bind_addr())
            .await
            .map_err(ServerError::Io)?;
        info!(
            addr = %config.bind_addr(),
            environment = %config.environment(),
            "wordbank server listening"
        );
        axum::serve(listener, router).await.map_err(ServerError::Io)
    })
}

fn build_repositories(config: &AppConfig) -> Result<Repositories, ServerError> {
    let Some(database_url) = config.database_url() else {
        info!("DATABASE_URL unset; using in-memory repositories");
        return Ok(Repositories {
            vocab: Arc::new(InMemoryVocabRepository::new()),
            server_state: Arc::new(InMemoryServerStateRepository::new()),
        });
    };

    let pool = Pool::builder()
        .max_size(config.db_pool_size())
        .build(ConnectionManager::<PgConnection>::new(database_url))?;
    info!(pool_size = config.db_pool_size(), "connected to PostgreSQL");
    Ok(Repositories {
        vocab: Arc::new(PostgresVocabRepository::new(pool.clone())),
        server_state: Arc::new(PostgresServerStateRepository::new(pool)),
    })
}
