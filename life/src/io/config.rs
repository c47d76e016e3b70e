//! Optional simulation defaults stored in a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::io::life_file::CellOrder;

/// Defaults for a `life` run (TOML).
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LifeConfig {
    /// Generations to run when `--iterations` is not given.
    pub iterations: u64,

    /// Emit cells in ascending `(x, y)` order.
    pub sorted_output: bool,
}

impl LifeConfig {
    pub const fn cell_order(&self) -> CellOrder {
        if self.sorted_output {
            CellOrder::Sorted
        } else {
            CellOrder::Unordered
        }
    }
}

/// Load config from `path`, or defaults when no path is given.
///
/// An explicitly named file that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<LifeConfig> {
    let Some(path) = path else {
        return Ok(LifeConfig::default());
    };
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LifeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
