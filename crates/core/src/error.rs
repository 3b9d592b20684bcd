//! Errors raised while building or accessing a [`GridModel`](crate::GridModel)

/// Errors that can occur when constructing or indexing a grid
///
/// Counting itself never fails: the counter bounds-checks every access, so
/// these only surface from construction or direct accessor misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's
    Shape {
        /// Index of the offending row
        row: usize,
        /// Column count of row 0
        expected: usize,
        /// Column count of the offending row
        found: usize,
    },
    /// Coordinates outside `[0, rows) x [0, cols)`
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Integer cell value with no [`Cell`](crate::Cell) mapping
    InvalidCell { row: usize, col: usize, value: u8 },
    /// Text symbol with no [`Cell`](crate::Cell) mapping
    InvalidSymbol { row: usize, col: usize, symbol: char },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::Shape {
                row,
                expected,
                found,
            } => write!(
                f,
                "Grid is not rectangular: row {row} has {found} columns, expected {expected}"
            ),
            GridError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Cell ({row}, {col}) is outside the {rows}x{cols} grid"
            ),
            GridError::InvalidCell { row, col, value } => {
                write!(f, "Invalid cell value {value} at ({row}, {col})")
            }
            GridError::InvalidSymbol { row, col, symbol } => {
                write!(f, "Invalid cell symbol {symbol:?} at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for GridError {}
