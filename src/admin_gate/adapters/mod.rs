//! Adapter implementations for the administrative gate.

mod http;

pub use http::enforce_admin_gate;
