//! I/O helpers for the `life` command.

pub mod config;
pub mod life_file;
