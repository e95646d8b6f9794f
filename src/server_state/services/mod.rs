//! Application services for server state tracking.

mod tracking;

pub use tracking::{ServerStateService, ServerStateServiceError, ServerStateServiceResult};
