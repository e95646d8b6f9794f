//! Autocomplete query parameters.

use super::{FilterClause, VocabFilter};

/// Parameters of one vocabulary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabQuery {
    text: Option<String>,
    filter: VocabFilter,
    limit: usize,
}

impl VocabQuery {
    /// Creates a query using the default substring filter.
    #[must_use]
    pub fn new(text: Option<String>, limit: usize) -> Self {
        Self {
            text,
            filter: VocabFilter::default(),
            limit,
        }
    }

    /// Replaces the search configuration.
    #[must_use]
    pub fn with_filter(mut self, filter: VocabFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the raw filter text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the maximum number of entries to return.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Builds the clause for this query, if the text requires filtering.
    #[must_use]
    pub fn clause(&self) -> Option<FilterClause> {
        self.filter.build(self.text())
    }
}
