//! Domain model for the administrative environment gate.

mod gate;
mod mode;

pub use gate::{AdminAccess, AdminGate, GateOutcome, NOT_FOUND_PATH};
pub use mode::EnvironmentMode;
