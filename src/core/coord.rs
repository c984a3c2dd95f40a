//! Grid coordinates.
//!
//! A `Coord` is a 0-indexed (row, column) pair. Both components must be
//! in `[0, grid_size)` to address a cell; bounds are checked by the
//! grid, not here, so a `Coord` by itself is just a pair of indices.

use serde::{Deserialize, Serialize};

/// A 0-indexed (row, column) cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate is one of the four corners of an
    /// N-by-N grid.
    #[must_use]
    pub const fn is_corner(self, grid_size: usize) -> bool {
        (self.row == 0 || self.row + 1 == grid_size)
            && (self.col == 0 || self.col + 1 == grid_size)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
