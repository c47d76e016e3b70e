//! Sparse set of live cells.

use std::collections::HashSet;
use std::collections::hash_set;

use crate::core::cell::Cell;

/// The live cells of one generation.
///
/// Only live cells are stored; every other coordinate is dead. Iteration order
/// is unspecified, equality is set equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Add `cell`. No-op if it is already live.
    pub fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell);
    }

    /// Remove `cell`. No-op if it is already dead.
    pub fn remove(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Members in ascending `(x, y)` order.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    /// Number of live cells in the Moore neighborhood of `cell` (0..=8).
    ///
    /// `cell` itself does not count, whether or not it is live.
    pub fn count_live_neighbors(&self, cell: Cell) -> u8 {
        let mut count = 0;
        for neighbor in cell.neighbors() {
            if self.contains(neighbor) {
                count += 1;
            }
        }
        count
    }

    /// Dead cells adjacent to at least one live cell, deduplicated.
    ///
    /// These are the only dead cells that can be born next generation.
    pub fn candidate_dead_neighbors(&self) -> Self {
        let mut candidates = Self::new();
        for cell in self.iter() {
            for neighbor in cell.neighbors() {
                if !self.contains(neighbor) {
                    candidates.insert(neighbor);
                }
            }
        }
        candidates
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Cell;
    type IntoIter = std::iter::Copied<hash_set::Iter<'a, Cell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}
