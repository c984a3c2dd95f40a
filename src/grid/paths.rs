//! Winning lines and their catalog.
//!
//! A `WinPath` is one candidate winning line: a row, a column, or one
//! of the two diagonals, as an ordered list of coordinates. The
//! `PathCatalog` enumerates all `2N + 2` of them for a grid of side N
//! and is rebuilt only when the grid size changes.
//!
//! Catalog order matters: both diagonals come first, then rows top to
//! bottom, then columns left to right. Win detection reports the first
//! complete path in this order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, Marker};
use crate::grid::Grid;

/// One candidate winning line of exactly `grid_size` distinct cells.
///
/// SmallVec keeps the common small grid sizes inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinPath {
    cells: SmallVec<[Coord; 8]>,
}

impl WinPath {
    fn from_cells(cells: SmallVec<[Coord; 8]>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// The cells of this line, in order.
    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells in the line (always the grid size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a path holds `grid_size >= 1` cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// How many moves `player` still needs to complete this line.
    ///
    /// Returns −1 if any cell already holds the opponent's marker (the
    /// line is dead for `player`), otherwise the count of empty cells.
    /// A count of 0 means the line is already complete.
    #[must_use]
    pub fn moves_to_win(&self, grid: &Grid, player: Marker) -> i64 {
        debug_assert!(!player.is_empty());
        let opponent = player.other_player();
        if self.cells.iter().any(|&c| grid.at(c) == opponent) {
            return -1;
        }
        self.cells.iter().filter(|&&c| grid.at(c).is_empty()).count() as i64
    }

    /// The player occupying every cell of this line, or `Empty` if the
    /// line is not monochrome.
    #[must_use]
    pub fn winning_player(&self, grid: &Grid) -> Marker {
        let first = grid.at(self.cells[0]);
        if !first.is_empty() && self.cells.iter().all(|&c| grid.at(c) == first) {
            first
        } else {
            Marker::Empty
        }
    }

    /// The first empty cell of this line, if any.
    pub(crate) fn empty_cell(&self, grid: &Grid) -> Option<Coord> {
        self.cells.iter().copied().find(|&c| grid.at(c).is_empty())
    }
}

/// All `2N + 2` candidate winning lines for a grid of side N.
///
/// Immutable once built; the engine rebuilds it when the grid size
/// changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCatalog {
    grid_size: usize,
    paths: Vec<WinPath>,
}

impl PathCatalog {
    /// Enumerate every winning line for a grid of side `grid_size`.
    ///
    /// Pure function of the size; expects `grid_size >= 1` (validated
    /// at the engine boundary).
    #[must_use]
    pub fn build(grid_size: usize) -> Self {
        debug_assert!(grid_size >= 1);
        let mut paths = Vec::with_capacity(2 * grid_size + 2);

        let mut down = SmallVec::with_capacity(grid_size);
        let mut up = SmallVec::with_capacity(grid_size);
        for i in 0..grid_size {
            down.push(Coord::new(i, i));
            up.push(Coord::new(i, grid_size - i - 1));
        }
        paths.push(WinPath::from_cells(down));
        paths.push(WinPath::from_cells(up));

        for row in 0..grid_size {
            let cells = (0..grid_size).map(|col| Coord::new(row, col)).collect();
            paths.push(WinPath::from_cells(cells));
        }
        for col in 0..grid_size {
            let cells = (0..grid_size).map(|row| Coord::new(row, col)).collect();
            paths.push(WinPath::from_cells(cells));
        }

        Self { grid_size, paths }
    }

    /// Side length this catalog was built for.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// All paths, in catalog order: main diagonal, anti-diagonal,
    /// rows, columns.
    #[must_use]
    pub fn paths(&self) -> &[WinPath] {
        &self.paths
    }

    /// Number of paths (always `2 * grid_size + 2`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The first complete line on `grid`, with its owner.
    pub(crate) fn find_win(&self, grid: &Grid) -> Option<(WinPath, Marker)> {
        for path in &self.paths {
            let winner = path.winning_player(grid);
            if !winner.is_empty() {
                return Some((path.clone(), winner));
            }
        }
        None
    }
}
