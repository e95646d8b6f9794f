//! Adapter implementations for vocabulary search.

pub mod memory;
pub mod postgres;
