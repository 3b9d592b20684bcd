//! Rectangular cell storage with bounds-checked access

use std::str::FromStr;

use super::{Cell, Direction};
use crate::error::GridError;

/// Rectangular grid of [`Cell`] values
///
/// Cells are stored row-major in a flat vector. A grid may have zero rows,
/// or rows with zero columns; either way it holds no cells.
///
/// Counting sinks land in place, so a grid is single-use per count. Clone it
/// first if the original layout is needed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridModel {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl GridModel {
    /// Build a grid from nested rows
    ///
    /// An empty `rows` vector produces a 0x0 grid.
    ///
    /// # Errors
    /// Returns [`GridError::Shape`] if any row's length differs from the first row's.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let cols = check_shape(rows.iter().map(Vec::len))?;
        let row_count = rows.len();
        let cells = rows.into_iter().flatten().collect();

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Build a grid where every cell holds `cell`
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Self {
            rows,
            cols,
            cells: vec![cell; rows * cols],
        }
    }

    /// Build a grid by evaluating `f(row, col)` in row-major order
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Build a grid from the integer encoding (0 = water, 1 = land, 2 = in progress)
    ///
    /// # Errors
    /// Returns [`GridError::Shape`] for ragged input and
    /// [`GridError::InvalidCell`] for any value without a cell mapping.
    pub fn from_digits(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let cols = check_shape(rows.iter().map(Vec::len))?;
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let cell =
                    Cell::from_u8(value).ok_or(GridError::InvalidCell { row, col, value })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(row, col)` addresses a cell of this grid
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Read a cell
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] if `(row, col)` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.cell(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Write a cell
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] if `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self
            .index_of(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Read a cell, `None` when out of bounds
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index_of(row, col).map(|idx| self.cells[idx])
    }

    /// Flat row-major index of `(row, col)`, `None` when out of bounds
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        self.in_bounds(row, col).then(|| row * self.cols + col)
    }

    /// The in-bounds neighbour of `(row, col)` in `direction`
    #[inline]
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        direction
            .apply(row, col)
            .filter(|&(r, c)| self.in_bounds(r, c))
    }

    /// One row as a slice, `None` when out of bounds
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// All cells in row-major order as `(row, col, cell)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }

    /// Number of cells equal to `cell`
    pub fn count_of(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of unvisited land cells
    pub fn land_count(&self) -> usize {
        self.count_of(Cell::Land)
    }

    /// True once no land and no in-progress cells remain
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Water)
    }

    /// Overwrite `(row, col)` with `to` only if it currently holds `from`
    ///
    /// Returns whether the cell was replaced. Out-of-bounds coordinates are
    /// never replaced.
    #[inline]
    pub(crate) fn replace_if(&mut self, row: usize, col: usize, from: Cell, to: Cell) -> bool {
        match self.index_of(row, col) {
            Some(idx) if self.cells[idx] == from => {
                self.cells[idx] = to;
                true
            }
            _ => false,
        }
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> GridError {
        GridError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// Common column count of all rows
fn check_shape(lengths: impl IntoIterator<Item = usize>) -> Result<usize, GridError> {
    let mut lengths = lengths.into_iter().enumerate();
    let Some((_, expected)) = lengths.next() else {
        return Ok(0);
    };

    for (row, found) in lengths {
        if found != expected {
            return Err(GridError::Shape {
                row,
                expected,
                found,
            });
        }
    }

    Ok(expected)
}

/// Parses one row per non-blank line; whitespace and commas between symbols are ignored.
impl FromStr for GridModel {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for line in s.lines().filter(|line| !line.trim().is_empty()) {
            let row = rows.len();
            let mut cells = Vec::with_capacity(line.len());
            for symbol in line.chars().filter(|ch| !ch.is_whitespace() && *ch != ',') {
                let col = cells.len();
                let cell =
                    Cell::from_symbol(symbol).ok_or(GridError::InvalidSymbol { row, col, symbol })?;
                cells.push(cell);
            }
            rows.push(cells);
        }

        Self::new(rows)
    }
}

impl std::fmt::Display for GridModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..self.cols {
                write!(f, "{}", self.cells[row * self.cols + col].symbol())?;
            }
        }
        Ok(())
    }
}
