//! Stable exit codes for the `life` CLI.

/// The simulation ran and its result was written.
pub const OK: i32 = 0;
/// Loading, configuration, or writing failed; no result was produced.
pub const FAILED: i32 = 1;
