use crate::error::{with_last_error_mut, IslandCountError, IslandCountErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing the `IslandCountError` trait.
pub(crate) fn set_last_error(error: &impl IslandCountError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl IslandCountError) -> IslandCountErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the error of a failed result; successful results clear the last error.
pub(crate) fn track_result<T, E: IslandCountError>(
    result: Result<T, E>,
) -> Result<T, IslandCountErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error)),
    }
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = IslandCountErrorCode::Ok;
    });
}
