//! Step definitions for vocabulary autocomplete scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
