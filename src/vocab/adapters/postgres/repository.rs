//! `PostgreSQL` repository implementation for vocabulary entries.

use super::{
    filter::clause_predicate,
    models::{NewVocabWordRow, VocabWordRow},
    schema::vocab_words,
};
use crate::vocab::{
    domain::{VocabEntry, VocabEntryId, VocabQuery},
    ports::{VocabRepository, VocabRepositoryError, VocabRepositoryResult},
};
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::Text;

/// `PostgreSQL` connection pool type for vocabulary adapters.
pub type VocabPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed vocabulary repository.
#[derive(Debug, Clone)]
pub struct PostgresVocabRepository {
    pool: VocabPgPool,
}

impl PostgresVocabRepository {
    /// Creates a new repository from a `PostgreSQL` pool.
    #[must_use]
    pub const fn new(pool: VocabPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, operation: F) -> VocabRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> VocabRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(VocabRepositoryError::persistence)?;
            operation(&mut connection)
        })
        .await
        .map_err(VocabRepositoryError::persistence)?
    }
}

#[async_trait]
impl VocabRepository for PostgresVocabRepository {
    async fn add(&self, word: &str) -> VocabRepositoryResult<VocabEntry> {
        let new_row = NewVocabWordRow {
            word: word.to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(vocab_words::table)
                .values(&new_row)
                .returning(VocabWordRow::as_returning())
                .get_result::<VocabWordRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        VocabRepositoryError::DuplicateWord(new_row.word.clone())
                    }
                    _ => VocabRepositoryError::persistence(err),
                })?;
            Ok(row_to_entry(row))
        })
        .await
    }

    async fn search(&self, query: &VocabQuery) -> VocabRepositoryResult<Vec<VocabEntry>> {
        let owned_query = query.clone();
        self.run_blocking(move |connection| {
            let rows = search_statement(&owned_query)
                .load::<VocabWordRow>(connection)
                .map_err(VocabRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_entry).collect())
        })
        .await
    }
}

/// Byte-order sort key, matching the in-memory adapter whatever the
/// database collation.
const WORD_SORT_KEY: &str = r#""vocab_words"."word" COLLATE "C""#;

/// Builds the ordered, limited search statement for a query.
fn search_statement(query: &VocabQuery) -> vocab_words::BoxedQuery<'static, Pg> {
    let mut statement = vocab_words::table.into_boxed();
    if let Some(clause) = query.clause() {
        statement = statement.filter(clause_predicate(&clause));
    }
    let limit = i64::try_from(query.limit()).unwrap_or(i64::MAX);
    statement
        .order(sql::<Text>(WORD_SORT_KEY).asc())
        .limit(limit)
}

fn row_to_entry(row: VocabWordRow) -> VocabEntry {
    VocabEntry::new(VocabEntryId::new(row.id), row.word)
}
