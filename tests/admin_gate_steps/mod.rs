//! Step definitions for administrative gate scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
