//! `PostgreSQL` adapters for vocabulary search.

mod filter;
mod models;
mod repository;
pub mod schema;

pub use filter::{VocabPredicate, clause_predicate, word_filter_clause};
pub use repository::{PostgresVocabRepository, VocabPgPool};
