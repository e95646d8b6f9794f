//! Diesel row models for vocabulary entries.

use super::schema::vocab_words;
use diesel::prelude::*;

/// Query result row for vocabulary entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = vocab_words)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VocabWordRow {
    /// Serial identifier.
    pub id: i32,
    /// The vocabulary word.
    pub word: String,
}

/// Insert model for vocabulary entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = vocab_words)]
pub struct NewVocabWordRow {
    /// The vocabulary word.
    pub word: String,
}
