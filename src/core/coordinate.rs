//! Grid positions.
//!
//! `x` is the column and `y` is the row; `Coordinate::new(0, 0)` is the top
//! left slot. Rows grow downwards, so "falling" means increasing `y`.

use serde::{Deserialize, Serialize};

/// Immutable `(x, y)` position of a grid slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Coordinate {
    /// Create a new coordinate from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Check if both coordinates share a row or column and are one step apart.
    ///
    /// ```
    /// use dots_engine::core::Coordinate;
    ///
    /// let c = Coordinate::new(2, 2);
    /// assert!(c.is_adjacent(Coordinate::new(2, 1)));
    /// assert!(c.is_adjacent(Coordinate::new(3, 2)));
    /// assert!(!c.is_adjacent(Coordinate::new(3, 3))); // diagonal
    /// assert!(!c.is_adjacent(c));
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Check if this coordinate lies on a `size`×`size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
