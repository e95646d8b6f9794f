//! Unit tests for vocabulary search.
