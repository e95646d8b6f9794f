//! `PostgreSQL` repository implementation for server state records.

use super::{
    models::{NewServerStateRow, ServerStateRow},
    schema::server_state,
};
use crate::server_state::{
    domain::{PersistedServerStateData, ServerState, ServerStateId},
    ports::{ServerStateRepository, ServerStateRepositoryError, ServerStateRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

type UpdateServerState = diesel::dsl::Update<
    diesel::dsl::Filter<server_state::table, diesel::dsl::Eq<server_state::id, String>>,
    (
        diesel::dsl::Eq<server_state::status, bool>,
        diesel::dsl::Eq<server_state::updated_at, DateTime<Utc>>,
    ),
>;

/// `PostgreSQL` connection pool type for server state adapters.
pub type ServerStatePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed repository for server state records.
#[derive(Debug, Clone)]
pub struct PostgresServerStateRepository {
    pool: ServerStatePgPool,
}

impl PostgresServerStateRepository {
    /// Creates a new repository from a `PostgreSQL` pool.
    #[must_use]
    pub const fn new(pool: ServerStatePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, operation: F) -> ServerStateRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ServerStateRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ServerStateRepositoryError::persistence)?;
            operation(&mut connection)
        })
        .await
        .map_err(ServerStateRepositoryError::persistence)?
    }
}

#[async_trait]
impl ServerStateRepository for PostgresServerStateRepository {
    async fn insert(&self, state: &ServerState) -> ServerStateRepositoryResult<()> {
        let state_id = state.id().clone();
        let new_row = to_new_row(state);

        self.run_blocking(move |connection| {
            diesel::insert_into(server_state::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ServerStateRepositoryError::DuplicateId(state_id.clone())
                    }
                    _ => ServerStateRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, state: &ServerState) -> ServerStateRepositoryResult<()> {
        let state_id = state.id().clone();
        let statement = update_statement(state);

        self.run_blocking(move |connection| {
            let updated_count = statement
                .execute(connection)
                .map_err(ServerStateRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(ServerStateRepositoryError::NotFound(state_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: &ServerStateId,
    ) -> ServerStateRepositoryResult<Option<ServerState>> {
        let raw_id = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = server_state::table
                .filter(server_state::id.eq(&raw_id))
                .select(ServerStateRow::as_select())
                .first::<ServerStateRow>(connection)
                .optional()
                .map_err(ServerStateRepositoryError::persistence)?;
            row.map(row_to_state).transpose()
        })
        .await
    }

    async fn list_all(&self) -> ServerStateRepositoryResult<Vec<ServerState>> {
        self.run_blocking(move |connection| {
            let rows = server_state::table
                .order(server_state::id.asc())
                .select(ServerStateRow::as_select())
                .load::<ServerStateRow>(connection)
                .map_err(ServerStateRepositoryError::persistence)?;
            rows.into_iter().map(row_to_state).collect()
        })
        .await
    }
}

fn to_new_row(state: &ServerState) -> NewServerStateRow {
    NewServerStateRow {
        id: state.id().as_str().to_owned(),
        status: state.status(),
        updated_at: state.updated_at(),
    }
}

fn update_statement(state: &ServerState) -> UpdateServerState {
    diesel::update(server_state::table.filter(server_state::id.eq(state.id().as_str().to_owned())))
        .set((
            server_state::status.eq(state.status()),
            server_state::updated_at.eq(state.updated_at()),
        ))
}

fn row_to_state(row: ServerStateRow) -> ServerStateRepositoryResult<ServerState> {
    let ServerStateRow {
        id,
        status,
        updated_at,
    } = row;

    let parsed_id =
        ServerStateId::new(id).map_err(ServerStateRepositoryError::invalid_persisted_data)?;

    Ok(ServerState::from_persisted(PersistedServerStateData {
        id: parsed_id,
        status,
        updated_at,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use diesel::{debug_query, pg::Pg};
    use rstest::rstest;

    fn persisted_row(id: &str) -> ServerStateRow {
        ServerStateRow {
            id: id.to_owned(),
            status: true,
            updated_at: Utc
                .with_ymd_and_hms(2026, 2, 1, 8, 30, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[rstest]
    fn row_round_trips_into_domain_state() {
        let row = persisted_row("main");
        let state = row_to_state(row.clone()).expect("row should convert");

        assert_eq!(state.id().as_str(), "main");
        assert!(state.status());
        assert_eq!(state.updated_at(), row.updated_at);

        let new_row = to_new_row(&state);
        assert_eq!(new_row.id, "main");
        assert!(new_row.status);
        assert_eq!(new_row.updated_at, row.updated_at);
    }

    #[rstest]
    fn blank_persisted_identifier_is_invalid_data() {
        let result = row_to_state(persisted_row("   "));

        assert!(matches!(
            result,
            Err(ServerStateRepositoryError::InvalidPersistedData(_))
        ));
    }

    #[rstest]
    fn update_sets_status_and_timestamp_for_one_identifier() {
        let state = row_to_state(persisted_row("main")).expect("row should convert");

        let sql = debug_query::<Pg, _>(&update_statement(&state)).to_string();

        assert!(
            sql.starts_with(r#"UPDATE "server_state" SET "status" = $1, "updated_at" = $2"#),
            "{sql}"
        );
        assert!(sql.contains("WHERE"), "{sql}");
        assert!(sql.contains(r#""server_state"."id" = $3"#), "{sql}");
        assert!(sql.contains("-- binds: [true, "), "{sql}");
        assert!(sql.ends_with(r#", "main"]"#), "{sql}");
    }
}
