//! Reader and writer for the `.Life 1.06` text format.
//!
//! ```text
//! #Life 1.06
//! 0 1
//! -3 7
//! ```
//!
//! The header must be the first non-blank line. Other `#` lines are comments,
//! blank lines are ignored, and every remaining line is one live cell `x y`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::cell::Cell;
use crate::core::cell_set::CellSet;

/// Literal first line of every `.Life 1.06` file.
pub const HEADER: &str = "#Life 1.06";

const COMMENT_PREFIX: char = '#';

/// Failures while reading or writing a `.Life 1.06` file.
#[derive(Debug, Error)]
pub enum LifeFileError {
    /// The input file is missing or unreadable.
    #[error("read {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The first non-blank line is not [`HEADER`].
    #[error("invalid Game of Life file: needed #Life 1.06 indicator as first line")]
    MissingHeader,

    /// A cell line is not exactly two `i64` values.
    #[error("failed to parse line {line}: expected two integers `x y`, got '{content}'")]
    MalformedLine {
        /// 1-based line number in the file.
        line: usize,
        content: String,
    },

    /// The output stream failed; part of the output may already be written.
    #[error("write cells")]
    Write(#[source] io::Error),
}

/// Order in which cells are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellOrder {
    /// Whatever order the set iterates in.
    #[default]
    Unordered,
    /// Ascending `(x, y)`.
    Sorted,
}

/// Read and parse a `.Life 1.06` file.
pub fn read_cells(path: &Path) -> Result<CellSet, LifeFileError> {
    debug!(path = %path.display(), "reading cells");
    let contents = fs::read_to_string(path).map_err(|source| LifeFileError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let cells = parse_cells(&contents)?;
    debug!(path = %path.display(), population = cells.len(), "cells loaded");
    Ok(cells)
}

/// Parse `.Life 1.06` text into a cell set.
///
/// Line numbers in errors are 1-based and count every physical line.
pub fn parse_cells(input: &str) -> Result<CellSet, LifeFileError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    match lines.next() {
        Some((_, line)) if line == HEADER => {}
        _ => return Err(LifeFileError::MissingHeader),
    }

    let mut cells = CellSet::new();
    for (line_number, line) in lines {
        if line.starts_with(COMMENT_PREFIX) {
            continue;
        }
        let cell = parse_cell(line).ok_or_else(|| LifeFileError::MalformedLine {
            line: line_number,
            content: line.to_string(),
        })?;
        cells.insert(cell);
    }
    Ok(cells)
}

fn parse_cell(line: &str) -> Option<Cell> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(Cell::new(x, y))
}

/// Write `cells` as `.Life 1.06`: header, blank line, one `x y` per cell.
pub fn write_cells<W: Write>(
    writer: &mut W,
    cells: &CellSet,
    order: CellOrder,
) -> Result<(), LifeFileError> {
    write_all(writer, cells, order).map_err(LifeFileError::Write)
}

fn write_all<W: Write>(writer: &mut W, cells: &CellSet, order: CellOrder) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    writeln!(writer)?;
    match order {
        CellOrder::Unordered => {
            for cell in cells {
                writeln!(writer, "{} {}", cell.x, cell.y)?;
            }
        }
        CellOrder::Sorted => {
            for cell in cells.sorted() {
                writeln!(writer, "{} {}", cell.x, cell.y)?;
            }
        }
    }
    writer.flush()
}
