//! Island counting over a [`GridModel`]
//!
//! The counter scans the grid in row-major order. Each `Land` cell it meets
//! starts a new island: the count goes up by one and a flood-fill sinks every
//! 4-connected land cell reachable from it into `Water`. A sunk cell can never
//! start another island, so every island is counted exactly once.
//!
//! Flood-fills use an explicit frontier rather than recursion, so long or
//! winding islands cannot exhaust the call stack. The traversal order only
//! changes the order cells are visited in, never the count.

mod frontier;
mod traversal;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::grid::{Cell, Direction, GridModel};
use frontier::Frontier;

pub use traversal::{Traversal, TraversalState, TraversalStep};

/// Fixed neighbour expansion order of every flood-fill
///
/// With [`FloodOrder::DepthFirst`] this reproduces the pre-order of a
/// recursive fill that tries down, up, right, then left.
pub const NEIGHBOR_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Up,
    Direction::Right,
    Direction::Left,
];

/// Frontier discipline of the flood-fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FloodOrder {
    /// Last-in first-out; follows one branch to its end before backtracking
    #[default]
    DepthFirst,
    /// First-in first-out; sinks an island in rings around the start cell
    BreadthFirst,
}

/// Counter configuration
///
/// ```
/// use island_count_core::{CounterConfig, FloodOrder};
///
/// let config = CounterConfig {
///     order: FloodOrder::BreadthFirst,
///     ..Default::default()
/// };
/// assert!(config.mark_in_progress);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    /// Flood-fill frontier discipline
    pub order: FloodOrder,
    /// Whether [`IslandCounter::traverse`] passes each cell through
    /// `InProgress` (two steps per cell) or sinks it directly (one step)
    pub mark_in_progress: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            order: FloodOrder::DepthFirst,
            mark_in_progress: true,
        }
    }
}

/// Counts islands of `Land` cells by sinking them in place
#[derive(Debug, Clone, Copy, Default)]
pub struct IslandCounter {
    config: CounterConfig,
}

impl IslandCounter {
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Count the islands in `grid`, sinking every land cell to `Water`
    ///
    /// The grid is consumed: counting it again returns 0. Clone it first if
    /// the original layout is still needed. `InProgress` cells left over from
    /// an abandoned traversal are not land and are not counted.
    pub fn count(&self, grid: &mut GridModel) -> usize {
        let (rows, cols) = grid.dimensions();
        debug!(rows, cols, order = ?self.config.order, "Counting islands");

        let mut frontier = Frontier::new(self.config.order);
        let mut islands = 0;

        for row in 0..rows {
            for col in 0..cols {
                if grid.cell(row, col) != Some(Cell::Land) {
                    continue;
                }
                islands += 1;
                let cells = sink_island(grid, &mut frontier, row, col);
                trace!(island = islands, row, col, cells, "Sank island");
            }
        }

        debug!(islands, "Island count complete");
        islands
    }

    /// Start an observable traversal of `grid`
    ///
    /// Nothing happens until the returned iterator is pulled. Draining it
    /// fully leaves `grid` exactly as [`IslandCounter::count`] would, and
    /// [`Traversal::islands_found`] then equals the count.
    pub fn traverse<'g>(&self, grid: &'g mut GridModel) -> Traversal<'g> {
        let (rows, cols) = grid.dimensions();
        debug!(
            rows,
            cols,
            order = ?self.config.order,
            mark_in_progress = self.config.mark_in_progress,
            "Starting island traversal"
        );
        Traversal::new(grid, self.config)
    }

    /// Count several independent grids in parallel
    ///
    /// Each grid is counted and sunk by a single worker; results are in input order.
    pub fn count_batch(&self, grids: &mut [GridModel]) -> Vec<usize> {
        debug!(grids = grids.len(), "Counting grid batch");
        grids.par_iter_mut().map(|grid| self.count(grid)).collect()
    }
}

/// Sink the island containing `(row, col)`, returning its size in cells
fn sink_island(grid: &mut GridModel, frontier: &mut Frontier, row: usize, col: usize) -> usize {
    let mut sunk = 0;
    frontier.push((row, col));

    while let Some((r, c)) = frontier.pop() {
        if !grid.replace_if(r, c, Cell::Land, Cell::Water) {
            continue;
        }
        sunk += 1;
        frontier.push_land_neighbors(grid, r, c);
    }

    sunk
}
