//! Port contracts for server state persistence.

mod repository;

pub use repository::{
    ServerStateRepository, ServerStateRepositoryError, ServerStateRepositoryResult,
};
