//! Island Count Core Library
//!
//! Counts the connected components ("islands") of land cells in a 2D grid
//! under 4-connectivity. Visited land is sunk into water in place, so a
//! grid is consumed by one count.
//!
//! ## Two ways to count
//!
//! - [`IslandCounter::count`] runs every flood-fill to completion and
//!   returns the number of islands.
//! - [`IslandCounter::traverse`] returns a lazy [`Traversal`] that performs
//!   one cell transition per `next()`, for callers that want to observe or
//!   animate the flood-fill. Draining it leaves the grid in the same state as
//!   `count` and reports the same number of islands.
//!
//! ```
//! use island_count_core::{GridModel, IslandCounter};
//!
//! let mut grid: GridModel = "11000\n11000\n00100\n00011".parse().unwrap();
//! assert_eq!(IslandCounter::default().count(&mut grid), 3);
//! assert!(grid.is_cleared());
//! ```

pub mod counter;
pub mod error;
pub mod grid;

pub use counter::{
    CounterConfig, FloodOrder, IslandCounter, Traversal, TraversalState, TraversalStep,
    NEIGHBOR_ORDER,
};
pub use error::GridError;
pub use grid::{Cell, Direction, GridModel};
