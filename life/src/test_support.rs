//! Test-only helpers for building patterns and `.Life 1.06` fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::cell::Cell;
use crate::core::cell_set::CellSet;
use crate::io::life_file::{CellOrder, write_cells};

/// Build a cell set from coordinate pairs.
pub fn cells(coords: &[(i64, i64)]) -> CellSet {
    coords.iter().copied().map(Cell::from).collect()
}

fn shifted(coords: &[(i64, i64)], x: i64, y: i64) -> CellSet {
    coords
        .iter()
        .map(|&(dx, dy)| Cell::new(x + dx, y + dy))
        .collect()
}

/// 2x2 still life with its minimum corner at `(x, y)`.
pub fn block(x: i64, y: i64) -> CellSet {
    shifted(&[(0, 0), (1, 0), (0, 1), (1, 1)], x, y)
}

/// Horizontal period-2 oscillator starting at `(x, y)`.
pub fn blinker(x: i64, y: i64) -> CellSet {
    shifted(&[(0, 0), (1, 0), (2, 0)], x, y)
}

/// Glider in its 3x3 bounding box at `(x, y)`; moves `(+1, +1)` every 4 generations.
pub fn glider(x: i64, y: i64) -> CellSet {
    shifted(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)], x, y)
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

/// Render `cells` as `.Life 1.06` text.
pub fn format_cells(cells: &CellSet, order: CellOrder) -> Result<String> {
    let mut buf = Vec::new();
    write_cells(&mut buf, cells, order)?;
    Ok(String::from_utf8(buf)?)
}

/// Write `cells` as a sorted `.Life 1.06` file named `name` under `dir`.
pub fn write_fixture(dir: &Path, name: &str, cells: &CellSet) -> Result<PathBuf> {
    let path = dir.join(name);
    write_text(&path, &format_cells(cells, CellOrder::Sorted)?)?;
    Ok(path)
}
