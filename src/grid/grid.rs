//! The N-by-N marker grid.
//!
//! `Grid` owns the mutable matrix of markers. It is exclusively owned
//! by the move engine; everything outside the crate reads cells by
//! value through `get` and never receives a mutable view.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, EngineError, Marker};

/// An N-by-N matrix of markers, stored row-major.
///
/// Every cell holds exactly one `Marker` at all times; the grid is
/// never partially constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Marker>,
}

impl Grid {
    /// Create a grid with all cells empty.
    ///
    /// Size validation happens at the engine boundary; this constructor
    /// expects `size >= 1`.
    pub(crate) fn new(size: usize) -> Self {
        debug_assert!(size >= 1);
        Self {
            size,
            cells: vec![Marker::Empty; size * size],
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a coordinate addresses a cell of this grid.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Read the marker at a coordinate.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidCoordinate` if either component is outside
    /// `[0, size)`.
    pub fn get(&self, coord: Coord) -> Result<Marker, EngineError> {
        if !self.in_bounds(coord) {
            return Err(EngineError::InvalidCoordinate {
                row: coord.row,
                col: coord.col,
                grid_size: self.size,
            });
        }
        Ok(self.cells[self.index(coord)])
    }

    /// Read a cell known to be in bounds.
    ///
    /// Used on hot paths where the coordinate comes from the path
    /// catalog, which only ever holds valid cells.
    pub(crate) fn at(&self, coord: Coord) -> Marker {
        debug_assert!(self.in_bounds(coord));
        self.cells[self.index(coord)]
    }

    /// Write a marker. Crate-internal: only the move engine and the
    /// strategist's simulation copies mutate cells.
    pub(crate) fn set(&mut self, coord: Coord, marker: Marker) {
        debug_assert!(self.in_bounds(coord));
        let idx = self.index(coord);
        self.cells[idx] = marker;
    }

    /// Reset every cell to `Empty`.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Marker::Empty);
    }

    /// True iff no cell is `Empty`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// All currently empty cells, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords().filter(|&c| self.at(c).is_empty()).collect()
    }

    /// Iterate over every coordinate of the grid, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}", self.at(Coord::new(row, col)))?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
