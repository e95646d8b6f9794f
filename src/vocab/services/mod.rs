//! Application services for vocabulary search.

mod search;

pub use search::{VocabSearchService, VocabSearchServiceError, VocabSearchServiceResult};
