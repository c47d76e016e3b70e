//! Grid coordinates and Moore-neighborhood enumeration.

use std::fmt;

/// Offsets of the eight Moore neighbors, column by column.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A single position on the unbounded grid.
///
/// Ordering is lexicographic on `(x, y)` and only matters for sorted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Enumerate the Moore neighborhood of this cell.
    ///
    /// Neighbors that would fall outside the `i64` range are skipped, so cells
    /// on the extreme rows/columns yield fewer than eight.
    pub const fn neighbors(self) -> Neighbors {
        Neighbors {
            center: self,
            next: 0,
        }
    }

    fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Lazy iterator over the existing neighbors of a cell.
///
/// Clone it before consuming to walk the same neighborhood twice.
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Cell,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while let Some(&(dx, dy)) = NEIGHBOR_OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(cell) = self.center.offset(dx, dy) {
                return Some(cell);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(NEIGHBOR_OFFSETS.len().saturating_sub(self.next)))
    }
}

impl std::iter::FusedIterator for Neighbors {}
