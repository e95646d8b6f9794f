//! Diesel predicates for vocabulary filter clauses.

use super::schema::vocab_words;
use crate::vocab::domain::{Combinator, FilterClause, FilterCondition, SearchField, VocabFilter};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;

/// Composable predicate over the vocabulary table.
pub type VocabPredicate = Box<dyn BoxableExpression<vocab_words::table, Pg, SqlType = Bool>>;

/// Builds the autocomplete predicate for free-text filter input.
///
/// Returns `None` for absent, empty, or whitespace-only input, meaning the
/// caller must not filter. Otherwise returns `word ILIKE '%<filter>%'`. The
/// predicate is meant to be handed unchanged to a query; nothing is
/// executed here.
#[must_use]
pub fn word_filter_clause(filter: Option<&str>) -> Option<VocabPredicate> {
    VocabFilter::default()
        .build(filter)
        .map(|clause| clause_predicate(&clause))
}

/// Translates a domain clause into a Diesel predicate.
#[must_use]
pub fn clause_predicate(clause: &FilterClause) -> VocabPredicate {
    let combinator = clause.combinator();
    clause
        .tail()
        .iter()
        .fold(
            condition_predicate(clause.head()),
            |joined, condition| -> VocabPredicate {
                let next = condition_predicate(condition);
                match combinator {
                    Combinator::Any => Box::new(joined.or(next)),
                    Combinator::All => Box::new(joined.and(next)),
                }
            },
        )
}

fn condition_predicate(condition: &FilterCondition) -> VocabPredicate {
    let pattern = condition.pattern().as_str().to_owned();
    match condition.field() {
        SearchField::Word => Box::new(vocab_words::word.ilike(pattern)),
    }
}
