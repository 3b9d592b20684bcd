use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use island_count_core::GridError;

/// Common interface for FFI error types.
///
/// Pairs the code returned across the FFI boundary with a message callers
/// can fetch through `island_count_get_last_error()`.
pub(crate) trait IslandCountError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> IslandCountErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `IslandCountError` for FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultIslandCountError {
    code: IslandCountErrorCode,
    msg: String,
}

impl DefaultIslandCountError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"cells"`, `"out_count"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: IslandCountErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for grid dimensions whose cell count overflows `usize`.
    pub fn invalid_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            code: IslandCountErrorCode::InvalidDimensions,
            msg: format!("Grid dimensions {rows}x{cols} are too large"),
        }
    }
}

impl From<GridError> for DefaultIslandCountError {
    fn from(error: GridError) -> Self {
        let code = match error {
            GridError::Shape { .. } => IslandCountErrorCode::InvalidDimensions,
            GridError::OutOfBounds { .. } => IslandCountErrorCode::OutOfBounds,
            GridError::InvalidCell { .. } | GridError::InvalidSymbol { .. } => {
                IslandCountErrorCode::InvalidCell
            }
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl IslandCountError for DefaultIslandCountError {
    fn code(&self) -> IslandCountErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI status codes returned by island count functions.
/// Follows standard C convention: 0 = success, non-zero = error or status.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IslandCountErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Grid dimensions are inconsistent or overflow.
    InvalidDimensions = 2,

    /// A cell value other than 0 (water), 1 (land) or 2 (in progress).
    InvalidCell = 3,

    /// Coordinates outside the grid.
    OutOfBounds = 4,

    /// The traversal has no more steps. Not an error; no step was written.
    Finished = 5,
}

impl std::fmt::Display for IslandCountErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            IslandCountErrorCode::Ok => "Success",
            IslandCountErrorCode::NullPointer => "Null pointer",
            IslandCountErrorCode::InvalidDimensions => "Invalid grid dimensions",
            IslandCountErrorCode::InvalidCell => "Invalid cell value",
            IslandCountErrorCode::OutOfBounds => "Coordinates out of bounds",
            IslandCountErrorCode::Finished => "Traversal finished",
        };
        f.write_str(msg)
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, IslandCountErrorCode)> = const { RefCell::new((None, IslandCountErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, IslandCountErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, IslandCountErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if no error has occurred.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread sees only its own errors.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread that
/// sets or clears the error. **DO NOT FREE THIS POINTER.**
///
/// Example:
/// ```c
/// size_t islands = 0;
/// if (island_count_cells(cells, rows, cols, &islands) != Ok) {
///     const char* error = island_count_get_last_error();
///     if (error) {
///         fprintf(stderr, "Island count failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn island_count_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `IslandCountErrorCode::Ok` (0) if the last call on this thread succeeded.
#[no_mangle]
pub extern "C" fn island_count_get_last_error_code() -> IslandCountErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_mapping() {
        let shape: DefaultIslandCountError = GridError::Shape {
            row: 1,
            expected: 2,
            found: 3,
        }
        .into();
        assert_eq!(shape.code(), IslandCountErrorCode::InvalidDimensions);

        let cell: DefaultIslandCountError = GridError::InvalidCell {
            row: 0,
            col: 4,
            value: 9,
        }
        .into();
        assert_eq!(cell.code(), IslandCountErrorCode::InvalidCell);
        assert_eq!(cell.msg(), "Invalid cell value 9 at (0, 4)");
    }

    #[test]
    fn test_null_pointer_message() {
        let err = DefaultIslandCountError::null_pointer("out_count");
        assert_eq!(err.code(), IslandCountErrorCode::NullPointer);
        assert_eq!(err.msg(), "Parameter 'out_count' cannot be null");
    }
}
