//! Domain model for server state records.

mod error;
mod ids;
mod state;

pub use error::ServerStateDomainError;
pub use ids::ServerStateId;
pub use state::{PersistedServerStateData, ServerState};
