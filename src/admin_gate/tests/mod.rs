//! Unit tests for the administrative gate.
