//! C ABI for the island counter
//!
//! All functions return an `IslandCountErrorCode`; on failure a description is
//! available from `island_count_get_last_error()` on the same thread. The C
//! header `IslandCountFFI.h` is generated by `build.rs` with cbindgen.
//!
//! Two entry points:
//! - `island_count_cells` counts a grid buffer in one call.
//! - `island_traversal_*` owns a copy of the grid and steps the observable
//!   traversal one cell transition at a time, for hosts that animate it.

mod count;
mod error;
mod helpers;
mod traversal;

pub use count::island_count_cells;
pub use error::{island_count_get_last_error, island_count_get_last_error_code, IslandCountErrorCode};
pub use traversal::{
    island_traversal_cell, island_traversal_destroy, island_traversal_islands_found,
    island_traversal_new, island_traversal_next, IslandStep, IslandTraversal,
};
