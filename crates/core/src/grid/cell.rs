//! Cell states of an island grid

use serde::Serialize;

/// State of a single grid cell
///
/// `InProgress` only ever appears while an observable traversal is absorbing
/// that cell; it becomes `Water` on the traversal's next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// Non-traversable; also the final state of visited land
    #[default]
    Water,
    /// Traversable, not yet visited
    Land,
    /// Currently being sunk by an observable traversal
    InProgress,
}

impl Cell {
    /// Convert from the integer encoding (0 = water, 1 = land, 2 = in progress)
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Water),
            1 => Some(Cell::Land),
            2 => Some(Cell::InProgress),
            _ => None,
        }
    }

    /// Convert to the integer encoding
    pub fn as_u8(self) -> u8 {
        match self {
            Cell::Water => 0,
            Cell::Land => 1,
            Cell::InProgress => 2,
        }
    }

    /// Parse a single text symbol
    ///
    /// Accepts digits (`0`, `1`, `2`) and the map-style symbols `.`, `#`, `*`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0' | '.' => Some(Cell::Water),
            '1' | '#' => Some(Cell::Land),
            '2' | '*' => Some(Cell::InProgress),
            _ => None,
        }
    }

    /// Map-style symbol used by `Display` for grids
    pub fn symbol(self) -> char {
        match self {
            Cell::Water => '.',
            Cell::Land => '#',
            Cell::InProgress => '*',
        }
    }

    #[inline]
    pub fn is_land(self) -> bool {
        self == Cell::Land
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Cell::Water => "water",
            Cell::Land => "land",
            Cell::InProgress => "in progress",
        };
        f.write_str(name)
    }
}
