//! The move engine.
//!
//! `GameEngine` owns the grid, the path catalog, and the externally
//! observable game state: the player to move, the winner, and the
//! winning line. It validates and applies moves, alternates players,
//! detects win and tie termination, and raises notifications through
//! its `NotificationHub`.
//!
//! Single-writer by construction: only the engine mutates the grid.
//! Callers get read-only cell values and must serialize access
//! themselves - the engine is synchronous and not thread-safe.

use tracing::debug;

use crate::core::{Coord, EngineError, Marker};
use crate::events::{GridRegion, NotificationHub};
use crate::grid::{Grid, PathCatalog, WinPath};

/// Grid-game engine: state owner, move validator, referee.
///
/// The "game over" signal is the `Empty` sentinel as current player -
/// the same flag gates further moves internally and reports
/// termination externally.
#[derive(Debug)]
pub struct GameEngine {
    grid: Grid,
    catalog: PathCatalog,
    current_player: Marker,
    winning_player: Marker,
    winning_path: Option<WinPath>,
    hub: NotificationHub,
}

impl GameEngine {
    /// Create an engine for a `grid_size` x `grid_size` grid and reset
    /// it with `initial_player` to move.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidConfiguration` if `grid_size < 1`.
    pub fn new(grid_size: usize, initial_player: Marker) -> Result<Self, EngineError> {
        if grid_size < 1 {
            return Err(EngineError::InvalidConfiguration { grid_size });
        }
        let mut engine = Self {
            grid: Grid::new(grid_size),
            catalog: PathCatalog::build(grid_size),
            current_player: Marker::Empty,
            winning_player: Marker::Empty,
            winning_path: None,
            hub: NotificationHub::new(),
        };
        engine.reset(initial_player);
        Ok(engine)
    }

    /// Replace the grid and catalog for a new size, then reset.
    ///
    /// Registered listeners survive the resize.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidConfiguration` if `grid_size < 1`; the
    /// engine is left unchanged in that case.
    pub fn set_grid_size(
        &mut self,
        grid_size: usize,
        initial_player: Marker,
    ) -> Result<(), EngineError> {
        if grid_size < 1 {
            return Err(EngineError::InvalidConfiguration { grid_size });
        }
        self.grid = Grid::new(grid_size);
        self.catalog = PathCatalog::build(grid_size);
        self.reset(initial_player);
        Ok(())
    }

    /// Start a fresh game: clear the grid and the win state, set
    /// `initial_player` to move.
    ///
    /// Raises `GameStarted`, then `GridChanged(Everything)`, then
    /// `PlayerChanged`, in that order.
    pub fn reset(&mut self, initial_player: Marker) {
        debug_assert!(!initial_player.is_empty(), "a player must open the game");
        debug!(grid_size = self.grid.size(), player = %initial_player, "game reset");

        self.grid.clear();
        self.winning_player = Marker::Empty;
        self.winning_path = None;
        self.current_player = initial_player;

        self.hub.notify_game_started();
        self.hub.notify_grid_changed(GridRegion::Everything);
        self.hub.notify_player_changed();
    }

    /// Whether a move at (row, col) is currently legal: the game is
    /// not over and the cell is empty.
    ///
    /// Out-of-bounds coordinates are simply not movable - this guard
    /// never errors.
    #[must_use]
    pub fn can_move(&self, row: usize, col: usize) -> bool {
        let coord = Coord::new(row, col);
        !self.game_is_over()
            && self.grid.in_bounds(coord)
            && self.grid.at(coord).is_empty()
    }

    /// Apply the current player's move at (row, col).
    ///
    /// Returns false with no side effect if the move is illegal.
    /// Otherwise writes the marker, raises `GridChanged(cell)`,
    /// re-evaluates termination, and - if the game goes on - hands the
    /// turn to the other player and raises `PlayerChanged`.
    pub fn try_move(&mut self, row: usize, col: usize) -> bool {
        if !self.can_move(row, col) {
            return false;
        }

        let coord = Coord::new(row, col);
        self.grid.set(coord, self.current_player);
        debug!(%coord, player = %self.current_player, "move applied");
        self.hub.notify_grid_changed(GridRegion::Cell(coord));

        self.update_state();
        if !self.game_is_over() {
            debug_assert!(!self.current_player.is_empty());
            self.current_player = self.current_player.other_player();
            self.hub.notify_player_changed();
        }
        true
    }

    /// True iff the game has ended in a win or a tie.
    #[must_use]
    pub fn game_is_over(&self) -> bool {
        self.current_player.is_empty()
    }

    /// Read the marker at (row, col).
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidCoordinate` for out-of-range coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Result<Marker, EngineError> {
        self.grid.get(Coord::new(row, col))
    }

    /// Side length of the grid.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    /// The player to move, or `Empty` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Marker {
        self.current_player
    }

    /// The winner, or `Empty` for a tie or an unfinished game.
    #[must_use]
    pub fn winning_player(&self) -> Marker {
        self.winning_player
    }

    /// The line that produced the win, if any.
    #[must_use]
    pub fn winning_path(&self) -> Option<&WinPath> {
        self.winning_path.as_ref()
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The winning-line catalog for the current grid size.
    #[must_use]
    pub fn catalog(&self) -> &PathCatalog {
        &self.catalog
    }

    /// The notification registry. Subscribe here.
    pub fn notifications(&mut self) -> &mut NotificationHub {
        &mut self.hub
    }

    /// Re-evaluate termination after a successful move.
    ///
    /// First complete path in catalog order wins; a full grid with no
    /// complete path is a tie. Both terminal cases park the current
    /// player on the `Empty` sentinel and raise `PlayerChanged` then
    /// `GameOver`. Rescans the whole catalog every move - fine at the
    /// intended sizes, not tuned for large grids.
    fn update_state(&mut self) {
        if self.game_is_over() {
            return;
        }
        if let Some((path, winner)) = self.catalog.find_win(&self.grid) {
            debug!(winner = %winner, "winning path completed");
            self.winning_path = Some(path);
            self.winning_player = winner;
            self.current_player = Marker::Empty;
        } else if self.grid.is_full() {
            debug!("grid full with no winner, tie");
            self.winning_player = Marker::Empty;
            self.current_player = Marker::Empty;
        }
        if self.game_is_over() {
            self.hub.notify_player_changed();
            self.hub.notify_game_over();
        }
    }
}
