//! Grid storage for island counting

pub mod cell;
pub mod direction;
pub mod generator;
pub mod grid_model;

// Re-export main types
pub use cell::*;
pub use direction::*;
pub use grid_model::*;
