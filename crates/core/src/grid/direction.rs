/// One of the four edge-sharing neighbour directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Row and column offset of this direction
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }

    /// Step from `(row, col)` without leaving non-negative coordinates
    ///
    /// Upper bounds are not checked here; see
    /// [`GridModel::neighbor`](crate::GridModel::neighbor).
    pub fn apply(self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.offset();
        Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
    }
}
