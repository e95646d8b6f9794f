//! In-memory adapters for vocabulary search.

mod repository;

pub use repository::InMemoryVocabRepository;
