//! Conway's Game of Life on an unbounded grid.
//!
//! Only live cells are stored, so patterns may sit anywhere in the `i64`
//! coordinate space. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (cells, cell sets, the generation rule).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (`.Life 1.06` files, TOML config).
//!
//! [`run`] coordinates the two to implement the `life` command.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
