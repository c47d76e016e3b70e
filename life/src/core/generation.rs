//! Per-generation update rule and the multi-generation driver.
//!
//! Every neighbor count within one generation reads the same snapshot; the
//! changes are computed first and applied afterwards, so evaluation order
//! cannot leak into the result.

use crate::core::cell_set::CellSet;

/// Changes that turn one generation into the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Live cells with fewer than 2 or more than 3 live neighbors.
    pub dying: CellSet,
    /// Dead cells with exactly 3 live neighbors.
    pub birthed: CellSet,
}

impl Transition {
    /// True if applying this transition leaves the generation unchanged.
    pub fn is_empty(&self) -> bool {
        self.dying.is_empty() && self.birthed.is_empty()
    }

    /// Apply the changes to the generation they were computed from.
    ///
    /// `dying` is a subset of `cells` and `birthed` is disjoint from it, so
    /// removal and insertion commute.
    pub fn apply(&self, mut cells: CellSet) -> CellSet {
        for cell in &self.dying {
            cells.remove(cell);
        }
        cells.extend(&self.birthed);
        cells
    }
}

/// Compute the transition for `current` without modifying it.
pub fn transition(current: &CellSet) -> Transition {
    let dying = current
        .iter()
        .filter(|&cell| {
            let live = current.count_live_neighbors(cell);
            !(2..=3).contains(&live)
        })
        .collect();

    let birthed = current
        .candidate_dead_neighbors()
        .into_iter()
        .filter(|&cell| current.count_live_neighbors(cell) == 3)
        .collect();

    Transition { dying, birthed }
}

/// Advance one generation.
pub fn step(current: CellSet) -> CellSet {
    transition(&current).apply(current)
}

/// Result of running the simulation for a number of generations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome {
    /// Live cells after the last generation.
    pub cells: CellSet,
    /// Generations actually computed (at most the requested count).
    pub generations_run: u64,
    /// Index of the first generation whose transition was empty, if any.
    ///
    /// Once settled, every remaining generation is identical, so the driver
    /// stops there.
    pub settled_at: Option<u64>,
}

/// Run up to `iterations` generations starting from `initial`.
///
/// `on_generation` observes each computed transition together with its
/// zero-based generation index and the snapshot it was computed from; it
/// cannot influence the result.
pub fn simulate<F: FnMut(u64, &CellSet, &Transition)>(
    initial: CellSet,
    iterations: u64,
    mut on_generation: F,
) -> SimulationOutcome {
    let mut cells = initial;
    let mut generations_run = 0u64;

    while generations_run < iterations {
        let changes = transition(&cells);
        on_generation(generations_run, &cells, &changes);
        if changes.is_empty() {
            return SimulationOutcome {
                cells,
                generations_run,
                settled_at: Some(generations_run),
            };
        }
        cells = changes.apply(cells);
        generations_run += 1;
    }

    SimulationOutcome {
        cells,
        generations_run,
        settled_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::Cell;
    use crate::test_support::{blinker, block, cells, glider};

    fn run(initial: CellSet, iterations: u64) -> CellSet {
        simulate(initial, iterations, |_, _, _| {}).cells
    }

    #[test]
    fn zero_iterations_returns_input() {
        let initial = glider(0, 0);
        let outcome = simulate(initial.clone(), 0, |_, _, _| panic!("no generation expected"));
        assert_eq!(outcome.cells, initial);
        assert_eq!(outcome.generations_run, 0);
        assert_eq!(outcome.settled_at, None);
    }

    #[test]
    fn block_is_stable() {
        let initial = block(0, 0);
        assert!(transition(&initial).is_empty());
        assert_eq!(run(initial.clone(), 1), initial);
        assert_eq!(run(initial.clone(), 50), initial);
    }

    #[test]
    fn block_settles_immediately() {
        let mut observed = Vec::new();
        let outcome = simulate(block(0, 0), 5, |index, snapshot, changes| {
            observed.push((index, snapshot.len(), changes.is_empty()));
        });

        assert_eq!(outcome.cells, block(0, 0));
        assert_eq!(outcome.generations_run, 0);
        assert_eq!(outcome.settled_at, Some(0));
        assert_eq!(observed, vec![(0, 4, true)]);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = blinker(0, 0);
        let vertical = cells(&[(1, -1), (1, 0), (1, 1)]);

        assert_eq!(step(horizontal.clone()), vertical);
        assert_eq!(run(horizontal.clone(), 2), horizontal);
        assert_eq!(run(horizontal.clone(), 3), vertical);
    }

    #[test]
    fn isolated_cell_dies() {
        let initial = cells(&[(5, 5)]);
        let changes = transition(&initial);
        assert_eq!(changes.dying, initial);
        assert!(changes.birthed.is_empty());
        assert!(step(initial).is_empty());
    }

    #[test]
    fn l_shape_births_missing_corner() {
        let initial = cells(&[(0, 0), (1, 0), (0, 1)]);
        let changes = transition(&initial);

        assert_eq!(changes.birthed, cells(&[(1, 1)]));
        assert!(changes.dying.is_empty());
        assert_eq!(step(initial), block(0, 0));
    }

    #[test]
    fn overcrowded_center_dies() {
        // Plus sign: the center has 4 live neighbors.
        let initial = cells(&[(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]);
        let changes = transition(&initial);
        assert!(changes.dying.contains(Cell::new(0, 0)));
    }

    #[test]
    fn glider_translates_diagonally_every_four_generations() {
        let initial = glider(0, 0);
        assert_eq!(run(initial, 4), glider(1, 1));
    }

    #[test]
    fn result_does_not_depend_on_insertion_order() {
        let coords = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2), (7, 7), (7, 8), (8, 7)];
        let forward = cells(&coords);
        let mut reversed_coords = coords;
        reversed_coords.reverse();
        let backward = cells(&reversed_coords);

        assert_eq!(run(forward, 9), run(backward, 9));
    }

    #[test]
    fn transition_sets_respect_snapshot_membership() {
        let initial = glider(3, -2);
        let changes = transition(&initial);
        for cell in &changes.dying {
            assert!(initial.contains(cell));
        }
        for cell in &changes.birthed {
            assert!(!initial.contains(cell));
        }
    }

    #[test]
    fn settled_population_stops_early_with_same_result() {
        let initial = cells(&[(0, 0), (1, 0), (0, 1)]);
        let mut observed = Vec::new();
        let outcome = simulate(initial.clone(), 100, |index, _, _| observed.push(index));

        assert_eq!(outcome.cells, block(0, 0));
        assert_eq!(outcome.generations_run, 1);
        assert_eq!(outcome.settled_at, Some(1));
        assert_eq!(observed, vec![0, 1]);
    }

    #[test]
    fn extinct_population_settles() {
        let outcome = simulate(cells(&[(5, 5)]), 10, |_, _, _| {});
        assert!(outcome.cells.is_empty());
        assert_eq!(outcome.settled_at, Some(1));
    }

    #[test]
    fn observer_sees_every_generation_change() {
        let mut births = 0;
        let mut deaths = 0;
        let outcome = simulate(blinker(0, 0), 2, |_, snapshot, changes| {
            assert_eq!(snapshot.len(), 3);
            births += changes.birthed.len();
            deaths += changes.dying.len();
        });
        assert_eq!(outcome.generations_run, 2);
        assert_eq!(outcome.settled_at, None);
        assert_eq!(births, 4);
        assert_eq!(deaths, 4);
    }

    #[test]
    fn cells_at_coordinate_limit_do_not_wrap() {
        // A blinker against the max x edge: the row beyond i64::MAX does not exist,
        // so nothing may appear near i64::MIN.
        let initial = cells(&[(i64::MAX, -1), (i64::MAX, 0), (i64::MAX, 1)]);
        let next = step(initial);
        assert_eq!(next, cells(&[(i64::MAX - 1, 0), (i64::MAX, 0)]));
        assert!(next.iter().all(|cell| cell.x > 0));
    }
}
