//! Domain model for vocabulary search.
//!
//! A [`VocabFilter`] maps search fields to match strategies and names the
//! combinator joining them. Building it against user input yields either a
//! backend-agnostic [`FilterClause`] or nothing, in which case the caller
//! must not filter at all.

mod entry;
mod error;
mod filter;
mod pattern;
mod query;

pub use entry::{VocabEntry, VocabEntryId};
pub use error::VocabDomainError;
pub use filter::{
    Combinator, FieldMatch, FilterClause, FilterCondition, MatchStrategy, SearchField, VocabFilter,
};
pub use pattern::LikePattern;
pub use query::VocabQuery;
