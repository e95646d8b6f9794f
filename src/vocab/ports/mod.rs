//! Port contracts for vocabulary persistence.

mod repository;

pub use repository::{VocabRepository, VocabRepositoryError, VocabRepositoryResult};
