//! Observable, pull-based island traversal
//!
//! Each call to [`Traversal::next`] performs exactly one cell transition and
//! reports it as a [`TraversalStep`]. Nothing runs between calls, so a caller
//! can pace the traversal (one step per animation tick) or stop at any point.
//!
//! # Partial drains
//!
//! Stopping early leaves the grid in a well-defined intermediate state:
//! islands discovered earlier are fully sunk, the current island is partly
//! sunk (with at most one `InProgress` cell), and later islands are
//! untouched.

use std::iter::FusedIterator;

use serde::Serialize;
use tracing::{debug, trace};

use super::frontier::Frontier;
use super::CounterConfig;
use crate::grid::{Cell, GridModel};

/// One cell transition produced by a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraversalStep {
    pub row: usize,
    pub col: usize,
    /// Value written to the cell by this step
    pub cell: Cell,
    /// True only for the first step of a newly discovered island
    pub starts_island: bool,
    /// 1-based ordinal of the island this cell belongs to
    pub island: usize,
}

/// Resumable cursor of a traversal, detached from the grid it walks
///
/// [`Traversal`] pairs this with a borrowed grid. Adapters that need to own
/// the grid (for example across an FFI boundary) can keep a `GridModel` and a
/// `TraversalState` side by side and call [`TraversalState::advance`].
/// Always advance a state against the same grid.
#[derive(Debug, Clone)]
pub struct TraversalState {
    mark_in_progress: bool,
    frontier: Frontier,
    /// Flat row-major index where the outer scan resumes
    next_scan: usize,
    /// Cell marked `InProgress` by the previous step
    pending: Option<(usize, usize)>,
    islands: usize,
    steps: usize,
    finished: bool,
}

impl TraversalState {
    pub fn new(config: &CounterConfig) -> Self {
        Self {
            mark_in_progress: config.mark_in_progress,
            frontier: Frontier::new(config.order),
            next_scan: 0,
            pending: None,
            islands: 0,
            steps: 0,
            finished: false,
        }
    }

    /// Perform the next cell transition on `grid`
    ///
    /// Returns `None` once every island has been sunk, and on every call after.
    pub fn advance(&mut self, grid: &mut GridModel) -> Option<TraversalStep> {
        if self.finished {
            return None;
        }

        if let Some((row, col)) = self.pending.take() {
            grid.replace_if(row, col, Cell::InProgress, Cell::Water);
            self.frontier.push_land_neighbors(grid, row, col);
            return Some(self.emit(row, col, Cell::Water, false));
        }

        while let Some((row, col)) = self.frontier.pop() {
            if let Some(step) = self.visit(grid, row, col, false) {
                return Some(step);
            }
        }

        let (rows, cols) = grid.dimensions();
        while self.next_scan < rows * cols {
            let (row, col) = (self.next_scan / cols, self.next_scan % cols);
            self.next_scan += 1;

            if grid.cell(row, col) == Some(Cell::Land) {
                self.islands += 1;
                trace!(island = self.islands, row, col, "Discovered island");
                return self.visit(grid, row, col, true);
            }
        }

        self.finished = true;
        debug!(
            islands = self.islands,
            steps = self.steps,
            "Traversal complete"
        );
        None
    }

    /// Islands discovered so far
    pub fn islands_found(&self) -> usize {
        self.islands
    }

    /// Steps emitted so far
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// True once `advance` has returned `None`
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True while an island is partially sunk
    pub fn in_island(&self) -> bool {
        self.pending.is_some() || !self.frontier.is_empty()
    }

    /// Start sinking `(row, col)` if it is still land
    fn visit(
        &mut self,
        grid: &mut GridModel,
        row: usize,
        col: usize,
        starts_island: bool,
    ) -> Option<TraversalStep> {
        if self.mark_in_progress {
            if !grid.replace_if(row, col, Cell::Land, Cell::InProgress) {
                return None;
            }
            self.pending = Some((row, col));
            Some(self.emit(row, col, Cell::InProgress, starts_island))
        } else {
            if !grid.replace_if(row, col, Cell::Land, Cell::Water) {
                return None;
            }
            self.frontier.push_land_neighbors(grid, row, col);
            Some(self.emit(row, col, Cell::Water, starts_island))
        }
    }

    fn emit(&mut self, row: usize, col: usize, cell: Cell, starts_island: bool) -> TraversalStep {
        self.steps += 1;
        TraversalStep {
            row,
            col,
            cell,
            starts_island,
            island: self.islands,
        }
    }
}

/// Lazy sequence of [`TraversalStep`]s over a borrowed grid
///
/// Created by [`IslandCounter::traverse`](super::IslandCounter::traverse).
/// Single-pass: the grid is mutated as the sequence is drained.
#[derive(Debug)]
pub struct Traversal<'g> {
    grid: &'g mut GridModel,
    state: TraversalState,
}

impl<'g> Traversal<'g> {
    pub(crate) fn new(grid: &'g mut GridModel, config: CounterConfig) -> Self {
        Self {
            grid,
            state: TraversalState::new(&config),
        }
    }

    /// The grid as it stands after the steps taken so far
    pub fn grid(&self) -> &GridModel {
        &*self.grid
    }

    pub fn islands_found(&self) -> usize {
        self.state.islands_found()
    }

    pub fn steps_taken(&self) -> usize {
        self.state.steps_taken()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Drain the remaining steps and return the total island count
    pub fn finish(mut self) -> usize {
        for _ in self.by_ref() {}
        self.state.islands_found()
    }
}

impl Iterator for Traversal<'_> {
    type Item = TraversalStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.advance(self.grid)
    }
}

impl FusedIterator for Traversal<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{FloodOrder, IslandCounter};

    fn step(row: usize, col: usize, cell: Cell, starts_island: bool, island: usize) -> TraversalStep {
        TraversalStep {
            row,
            col,
            cell,
            starts_island,
            island,
        }
    }

    #[test]
    fn test_single_land_cell_in_progress() {
        let mut grid = GridModel::filled(1, 1, Cell::Land);
        let steps: Vec<_> = IslandCounter::default().traverse(&mut grid).collect();

        assert_eq!(
            steps,
            vec![
                step(0, 0, Cell::InProgress, true, 1),
                step(0, 0, Cell::Water, false, 1),
            ]
        );
        assert!(grid.is_cleared());
    }

    #[test]
    fn test_single_land_cell_direct() {
        let counter = IslandCounter::new(CounterConfig {
            mark_in_progress: false,
            ..Default::default()
        });
        let mut grid = GridModel::filled(1, 1, Cell::Land);
        let steps: Vec<_> = counter.traverse(&mut grid).collect();

        assert_eq!(steps, vec![step(0, 0, Cell::Water, true, 1)]);
    }

    #[test]
    fn test_block_follows_down_up_right_left() {
        // Recursive DFS from (0,0): down to (1,0), right to (1,1), up to (0,1)
        let mut grid: GridModel = "11\n11".parse().unwrap();
        let counter = IslandCounter::new(CounterConfig {
            mark_in_progress: false,
            ..Default::default()
        });
        let visited: Vec<_> = counter
            .traverse(&mut grid)
            .map(|s| (s.row, s.col))
            .collect();

        assert_eq!(visited, vec![(0, 0), (1, 0), (1, 1), (0, 1)]);
    }

    #[test]
    fn test_breadth_first_order() {
        let mut grid: GridModel = "111\n111".parse().unwrap();
        let counter = IslandCounter::new(CounterConfig {
            order: FloodOrder::BreadthFirst,
            mark_in_progress: false,
        });
        let visited: Vec<_> = counter
            .traverse(&mut grid)
            .map(|s| (s.row, s.col))
            .collect();

        assert_eq!(
            visited,
            vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]
        );
    }

    #[test]
    fn test_in_progress_precedes_water_for_every_cell() {
        let mut grid: GridModel = "110\n011\n000\n101".parse().unwrap();
        let land = grid.land_count();
        let steps: Vec<_> = IslandCounter::default().traverse(&mut grid).collect();

        assert_eq!(steps.len(), 2 * land);
        for pair in steps.chunks(2) {
            assert_eq!(pair[0].cell, Cell::InProgress);
            assert_eq!(pair[1].cell, Cell::Water);
            assert_eq!((pair[0].row, pair[0].col), (pair[1].row, pair[1].col));
            assert!(!pair[1].starts_island);
        }
        assert_eq!(steps.iter().filter(|s| s.starts_island).count(), 3);
    }

    #[test]
    fn test_partial_drain_state() {
        let mut grid: GridModel = "110\n000\n011".parse().unwrap();
        let mut traversal = IslandCounter::default().traverse(&mut grid);

        // (0,0) in progress, then sunk, then (0,1) in progress
        let taken: Vec<_> = traversal.by_ref().take(3).collect();
        assert_eq!(taken.last().map(|s| s.cell), Some(Cell::InProgress));
        assert_eq!(traversal.islands_found(), 1);
        assert_eq!(traversal.steps_taken(), 3);
        assert!(!traversal.is_finished());

        let snapshot = traversal.grid().clone();
        assert_eq!(snapshot.get(0, 0), Ok(Cell::Water));
        assert_eq!(snapshot.get(0, 1), Ok(Cell::InProgress));
        assert_eq!(snapshot.count_of(Cell::InProgress), 1);
        // The second island has not been touched
        assert_eq!(snapshot.get(2, 1), Ok(Cell::Land));
        assert_eq!(snapshot.get(2, 2), Ok(Cell::Land));

        assert_eq!(traversal.finish(), 2);
        assert!(grid.is_cleared());
    }

    #[test]
    fn test_fused_after_finish() {
        let mut grid: GridModel = "1".parse().unwrap();
        let mut traversal = IslandCounter::default().traverse(&mut grid);
        assert_eq!(traversal.by_ref().count(), 2);
        assert!(traversal.is_finished());
        assert_eq!(traversal.next(), None);
        assert_eq!(traversal.next(), None);
    }

    #[test]
    fn test_detached_state_matches_traversal() {
        let original: GridModel = "1011\n1001\n0110".parse().unwrap();
        let config = CounterConfig::default();

        let mut owned = original.clone();
        let mut state = TraversalState::new(&config);
        let detached: Vec<_> = std::iter::from_fn(|| state.advance(&mut owned)).collect();
        assert!(!state.in_island());

        let mut borrowed = original;
        let attached: Vec<_> = IslandCounter::new(config).traverse(&mut borrowed).collect();

        assert_eq!(detached, attached);
        assert_eq!(owned, borrowed);
        assert_eq!(state.islands_found(), 3);
    }
}
