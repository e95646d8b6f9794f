//! In-memory adapters for server state persistence.

mod repository;

pub use repository::InMemoryServerStateRepository;
