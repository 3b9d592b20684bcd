use island_count_core::{Cell, GridModel, IslandCounter};

use crate::error::{DefaultIslandCountError, IslandCountErrorCode};
use crate::helpers::{track_error, track_result};

/// Copy a caller-owned row-major buffer of cell values into a `GridModel`.
///
/// A buffer with zero cells may be null.
///
/// # Safety
/// When `rows * cols > 0`, `cells` must point to at least `rows * cols`
/// readable bytes.
pub(crate) unsafe fn grid_from_raw(
    cells: *const u8,
    rows: usize,
    cols: usize,
) -> Result<GridModel, DefaultIslandCountError> {
    let len = rows
        .checked_mul(cols)
        .ok_or_else(|| DefaultIslandCountError::invalid_dimensions(rows, cols))?;
    if len == 0 {
        return Ok(GridModel::filled(rows, cols, Cell::Water));
    }
    if cells.is_null() {
        return Err(DefaultIslandCountError::null_pointer("cells"));
    }

    // SAFETY: non-null and at least `len` bytes per the caller contract
    let slice = unsafe { std::slice::from_raw_parts(cells, len) };
    let rows: Vec<Vec<u8>> = slice.chunks(cols).map(<[u8]>::to_vec).collect();

    GridModel::from_digits(&rows).map_err(Into::into)
}

/// Count the islands of a row-major grid buffer.
///
/// Cell values: 0 = water, 1 = land. The buffer is copied and never modified.
///
/// Returns
/// - `IslandCountErrorCode::Ok` (0) with the count written to `out_count`
/// - `IslandCountErrorCode::NullPointer` if `out_count` is null, or `cells` is null for a non-empty grid
/// - `IslandCountErrorCode::InvalidDimensions` if `rows * cols` overflows
/// - `IslandCountErrorCode::InvalidCell` if any value is not a known cell value
///
/// # Safety
/// - `cells` must point to `rows * cols` readable bytes (may be null when that product is 0).
/// - `out_count` must be a valid, non-null pointer to writable memory.
///
/// Example (C)
/// ```c
/// const uint8_t cells[] = {1, 1, 0,
///                          0, 0, 1};
/// size_t islands = 0;
/// if (island_count_cells(cells, 2, 3, &islands) == Ok) {
///     printf("%zu islands\n", islands); // 2
/// }
/// ```
#[no_mangle]
pub unsafe extern "C" fn island_count_cells(
    cells: *const u8,
    rows: usize,
    cols: usize,
    out_count: *mut usize,
) -> IslandCountErrorCode {
    if out_count.is_null() {
        return track_error(&DefaultIslandCountError::null_pointer("out_count"));
    }

    match track_result(unsafe { grid_from_raw(cells, rows, cols) }) {
        Ok(mut grid) => {
            let islands = IslandCounter::default().count(&mut grid);
            unsafe {
                *out_count = islands;
            }
            IslandCountErrorCode::Ok
        }
        Err(code) => code,
    }
}
