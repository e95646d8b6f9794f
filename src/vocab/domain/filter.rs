//! Search field to match strategy mapping and the clauses it builds.

use super::{LikePattern, VocabEntry};
use serde::{Deserialize, Serialize};

/// Searchable column of the vocabulary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// The `word` column.
    Word,
}

impl SearchField {
    /// Returns the column value of `entry` for this field.
    #[must_use]
    pub fn value_of(self, entry: &VocabEntry) -> &str {
        match self {
            Self::Word => entry.word(),
        }
    }
}

/// How filter text is matched against a field. All strategies ignore case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The field contains the text anywhere (`%text%`).
    Contains,
    /// The field starts with the text (`text%`).
    Prefix,
    /// The field equals the text (`text`).
    Exact,
}

/// Logical operator joining the conditions of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    /// At least one condition holds (`OR`).
    Any,
    /// Every condition holds (`AND`).
    All,
}

/// One field paired with the strategy used to search it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldMatch {
    /// Column to search.
    pub field: SearchField,
    /// Strategy applied to the column.
    pub strategy: MatchStrategy,
}

/// Search configuration: which fields to match, and how to join them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabFilter {
    matches: Vec<FieldMatch>,
    combinator: Combinator,
}

impl VocabFilter {
    /// Creates a filter with no field matches.
    #[must_use]
    pub const fn new(combinator: Combinator) -> Self {
        Self {
            matches: Vec::new(),
            combinator,
        }
    }

    /// Adds a field match.
    #[must_use]
    pub fn with_match(mut self, field: SearchField, strategy: MatchStrategy) -> Self {
        self.matches.push(FieldMatch { field, strategy });
        self
    }

    /// Returns the configured field matches.
    #[must_use]
    pub fn matches(&self) -> &[FieldMatch] {
        &self.matches
    }

    /// Returns the combinator joining the field matches.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Builds a clause for user-supplied filter text.
    ///
    /// Absent, empty, and whitespace-only text produce `None`, meaning the
    /// caller must not filter. Any other text is used verbatim, without
    /// escaping `LIKE` wildcards.
    #[must_use]
    pub fn build(&self, text: Option<&str>) -> Option<FilterClause> {
        let raw = text.filter(|candidate| !candidate.trim().is_empty())?;
        let mut conditions = self.matches.iter().map(|field_match| FilterCondition {
            field: field_match.field,
            pattern: LikePattern::for_strategy(field_match.strategy, raw),
        });
        let head = conditions.next()?;
        Some(FilterClause {
            combinator: self.combinator,
            head,
            tail: conditions.collect(),
        })
    }
}

impl Default for VocabFilter {
    /// Case-insensitive substring search on `word`.
    fn default() -> Self {
        Self::new(Combinator::Any).with_match(SearchField::Word, MatchStrategy::Contains)
    }
}

/// A single `field ILIKE pattern` condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    field: SearchField,
    pattern: LikePattern,
}

impl FilterCondition {
    /// Returns the searched field.
    #[must_use]
    pub const fn field(&self) -> SearchField {
        self.field
    }

    /// Returns the `LIKE` pattern.
    #[must_use]
    pub const fn pattern(&self) -> &LikePattern {
        &self.pattern
    }

    /// Evaluates the condition against an entry.
    #[must_use]
    pub fn matches(&self, entry: &VocabEntry) -> bool {
        self.pattern
            .matches_ignoring_case(self.field.value_of(entry))
    }
}

/// Non-empty set of conditions joined by a combinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    combinator: Combinator,
    head: FilterCondition,
    tail: Vec<FilterCondition>,
}

impl FilterClause {
    /// Returns the combinator.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Returns the first condition.
    #[must_use]
    pub const fn head(&self) -> &FilterCondition {
        &self.head
    }

    /// Returns the remaining conditions.
    #[must_use]
    pub fn tail(&self) -> &[FilterCondition] {
        &self.tail
    }

    /// Iterates over every condition in order.
    pub fn conditions(&self) -> impl Iterator<Item = &FilterCondition> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Evaluates the clause against an entry.
    #[must_use]
    pub fn matches(&self, entry: &VocabEntry) -> bool {
        match self.combinator {
            Combinator::Any => self.conditions().any(|condition| condition.matches(entry)),
            Combinator::All => self.conditions().all(|condition| condition.matches(entry)),
        }
    }
}
