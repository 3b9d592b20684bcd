use island_count_core::{CounterConfig, GridModel, TraversalState};
use std::ptr;

use crate::count::grid_from_raw;
use crate::error::{DefaultIslandCountError, IslandCountErrorCode};
use crate::helpers::{clear_last_error, track_error, track_result};

/// Owned grid plus the cursor of an in-flight observable traversal.
///
/// Drive it from a timer or render loop with `island_traversal_next`, one
/// step per tick; the core never sleeps or schedules anything itself.
///
/// # Thread Safety
/// A handle is not synchronised. Use it from one thread at a time.
pub struct IslandTraversal {
    grid: GridModel,
    state: TraversalState,
}

/// C-compatible traversal step
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IslandStep {
    pub row: usize,
    pub col: usize,
    /// New cell value: 0 = water, 2 = in progress
    pub cell: u8,
    /// True for the first step of a newly discovered island
    pub starts_island: bool,
    /// 1-based ordinal of the island this cell belongs to
    pub island: usize,
}

/// Create a traversal over a copy of a row-major grid buffer.
///
/// With `mark_in_progress` set, every land cell produces two steps (in
/// progress, then water); otherwise one.
///
/// Returns
/// - `IslandCountErrorCode::Ok` (0) with a new handle in `out_handle`
/// - `IslandCountErrorCode::NullPointer`, `InvalidDimensions` or `InvalidCell` on failure,
///   with `out_handle` set to null
///
/// # Safety
/// - `cells` must point to `rows * cols` readable bytes (may be null when that product is 0).
/// - `out_handle` must be a valid, non-null pointer to writable memory.
/// - The caller owns the returned handle and MUST release it with
///   `island_traversal_destroy` exactly once.
#[no_mangle]
pub unsafe extern "C" fn island_traversal_new(
    cells: *const u8,
    rows: usize,
    cols: usize,
    mark_in_progress: bool,
    out_handle: *mut *mut IslandTraversal,
) -> IslandCountErrorCode {
    if out_handle.is_null() {
        return track_error(&DefaultIslandCountError::null_pointer("out_handle"));
    }

    match track_result(unsafe { grid_from_raw(cells, rows, cols) }) {
        Ok(grid) => {
            let config = CounterConfig {
                mark_in_progress,
                ..Default::default()
            };
            let handle = Box::new(IslandTraversal {
                grid,
                state: TraversalState::new(&config),
            });
            unsafe {
                *out_handle = Box::into_raw(handle);
            }
            IslandCountErrorCode::Ok
        }
        Err(code) => {
            unsafe {
                // Set to null on error (per documentation contract)
                *out_handle = ptr::null_mut();
            }
            code
        }
    }
}

/// Perform one traversal step.
///
/// Returns
/// - `IslandCountErrorCode::Ok` (0) with the step written to `out_step`
/// - `IslandCountErrorCode::Finished` once every island has been sunk; `out_step` is untouched
/// - `IslandCountErrorCode::NullPointer` if either pointer is null
///
/// # Safety
/// `handle` must come from `island_traversal_new` and not be destroyed;
/// `out_step` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn island_traversal_next(
    handle: *mut IslandTraversal,
    out_step: *mut IslandStep,
) -> IslandCountErrorCode {
    if handle.is_null() {
        return track_error(&DefaultIslandCountError::null_pointer("handle"));
    }
    if out_step.is_null() {
        return track_error(&DefaultIslandCountError::null_pointer("out_step"));
    }

    // SAFETY: non-null handle created by `island_traversal_new`
    let traversal = unsafe { &mut *handle };
    clear_last_error();

    match traversal.state.advance(&mut traversal.grid) {
        Some(step) => {
            unsafe {
                *out_step = IslandStep {
                    row: step.row,
                    col: step.col,
                    cell: step.cell.as_u8(),
                    starts_island: step.starts_island,
                    island: step.island,
                };
            }
            IslandCountErrorCode::Ok
        }
        None => IslandCountErrorCode::Finished,
    }
}

/// Number of islands discovered so far. Equals the full count once
/// `island_traversal_next` has returned `Finished`.
///
/// # Safety
/// `handle` must come from `island_traversal_new` and not be destroyed;
/// `out_count` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn island_traversal_islands_found(
    handle: *const IslandTraversal,
    out_count: *mut usize,
) -> IslandCountErrorCode {
    if handle.is_null() {
        return track_error(&DefaultIslandCountError::null_pointer("handle"));
    }
    if out_count.is_null() {
        return track_error(&DefaultIslandCountError::null_pointer("out_count"));
    }

    unsafe {
        *out_count = (*handle).state.islands_found();
    }
    clear_last_error();
    IslandCountErrorCode::Ok
}

/// Read the current value of a cell, for rendering mid-traversal.
///
/// Returns `IslandCountErrorCode::OutOfBounds` for coordinates outside the grid.
///
/// # Safety
/// `handle` must come from `island_traversal_new` and not be destroyed;
/// `out_cell` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn island_traversal_cell(
    handle: *const IslandTraversal,
    row: usize,
    col: usize,
    out_cell: *mut u8,
) -> IslandCountErrorCode {
    if handle.is_null() {
        return track_error(&DefaultIslandCountError::null_pointer("handle"));
    }
    if out_cell.is_null() {
        return track_error(&DefaultIslandCountError::null_pointer("out_cell"));
    }

    let grid = unsafe { &(*handle).grid };
    match track_result(grid.get(row, col).map_err(DefaultIslandCountError::from)) {
        Ok(cell) => {
            unsafe {
                *out_cell = cell.as_u8();
            }
            IslandCountErrorCode::Ok
        }
        Err(code) => code,
    }
}

/// Destroys a traversal handle previously created by `island_traversal_new`.
///
/// If `handle` is null, this function is a no-op.
///
/// # Safety
/// - The pointer MUST have been created by `island_traversal_new`.
/// - The pointer MUST NOT have been freed already; it must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn island_traversal_destroy(handle: *mut IslandTraversal) {
    if handle.is_null() {
        return;
    }

    // SAFETY: created by `Box::into_raw` in `island_traversal_new` and not yet freed
    unsafe {
        drop(Box::from_raw(handle));
    }
}
