//! Adapter implementations for the server state repository port.

pub mod memory;
pub mod postgres;
