//! Deterministic, pure simulation logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! cell sets and return deterministic outputs suitable for tests.

pub mod cell;
pub mod cell_set;
pub mod generation;
