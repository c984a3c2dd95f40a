//! The computer player.
//!
//! `Strategist` picks one empty cell with a three-tier greedy
//! heuristic, in strict priority order:
//!
//! 1. **Win now** - complete an own line that needs one more cell.
//! 2. **Block** - occupy the hole in an opponent line that needs one.
//! 3. **Score** - simulate each empty cell and reward positions that
//!    advance the most lines; ties break uniformly at random.
//!
//! This is single-ply greedy evaluation, not lookahead, so it is not
//! guaranteed optimal beyond the classic 3x3. Tiers 1-2 cost
//! O(paths x N); tier 3 costs O(empty x paths x N), which grows
//! cubically with grid size - fine for the intended sizes.
//!
//! The strategist never touches the grid directly: it computes a
//! target cell and forwards it through `GameEngine::try_move`, so all
//! notifications and termination checks run as for a human move.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::core::{Coord, EngineRng, Marker};
use crate::engine::GameEngine;
use crate::grid::{Grid, PathCatalog};

/// Move selector for the computer player.
///
/// Holds only the injected RNG handle used for tie-breaking; all game
/// state stays in the engine.
#[derive(Clone, Debug)]
pub struct Strategist {
    rng: EngineRng,
}

impl Strategist {
    /// Create a strategist with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(EngineRng::new(seed))
    }

    /// Create a strategist around an existing RNG handle.
    #[must_use]
    pub fn with_rng(rng: EngineRng) -> Self {
        Self { rng }
    }

    /// Play one move for the side currently to move.
    ///
    /// No-op returning `None` when the game is over; otherwise returns
    /// the cell that was played. Selection always succeeds on a live
    /// game, since a live game has at least one empty cell.
    pub fn auto_move(&mut self, engine: &mut GameEngine) -> Option<Coord> {
        if engine.game_is_over() {
            return None;
        }
        let player = engine.current_player();
        debug_assert!(!player.is_empty());

        let target = self.select_move(engine.grid(), engine.catalog(), player);
        debug!(%target, player = %player, "auto move");
        let applied = engine.try_move(target.row, target.col);
        debug_assert!(applied, "selected cell must be playable");
        Some(target)
    }

    fn select_move(&mut self, grid: &Grid, catalog: &PathCatalog, player: Marker) -> Coord {
        // Tier 1: win now.
        if let Some(cell) = self.one_move_hole(grid, catalog, player) {
            trace!(%cell, "taking winning cell");
            return cell;
        }

        // Tier 2: deny the opponent's win.
        if let Some(cell) = self.one_move_hole(grid, catalog, player.other_player()) {
            trace!(%cell, "blocking opponent");
            return cell;
        }

        // Tier 3: positional scoring over simulated placements.
        self.best_scored_cell(grid, catalog, player)
    }

    /// The empty cell of a uniformly chosen path that `player` could
    /// complete with a single move, if any such path exists.
    fn one_move_hole(
        &mut self,
        grid: &Grid,
        catalog: &PathCatalog,
        player: Marker,
    ) -> Option<Coord> {
        let candidates: Vec<_> = catalog
            .paths()
            .iter()
            .filter(|p| p.moves_to_win(grid, player) == 1)
            .collect();
        let path = self.rng.choose(&candidates)?;
        let cell = path.empty_cell(grid);
        debug_assert!(cell.is_some(), "a one-move path has exactly one hole");
        cell
    }

    /// Score every empty cell by simulating the placement on a private
    /// copy of the grid, then pick uniformly among the best.
    ///
    /// Score of a placement = sum over all paths of -1 for a path the
    /// opponent has entered, else `grid_size - moves_to_win` (paths
    /// closer to completion are worth more). Scores live in a
    /// transient table, never in the grid itself.
    fn best_scored_cell(&mut self, grid: &Grid, catalog: &PathCatalog, player: Marker) -> Coord {
        let empty = grid.empty_cells();
        debug_assert!(!empty.is_empty(), "a live game has an empty cell");
        let size = grid.size() as i64;

        let mut scores: FxHashMap<Coord, i64> = FxHashMap::default();
        let mut best = i64::MIN;
        for &cell in &empty {
            let mut probe = grid.clone();
            probe.set(cell, player);
            let score: i64 = catalog
                .paths()
                .iter()
                .map(|p| {
                    let needed = p.moves_to_win(&probe, player);
                    if needed < 0 {
                        needed
                    } else {
                        size - needed
                    }
                })
                .sum();
            trace!(%cell, score, "candidate scored");
            scores.insert(cell, score);
            best = best.max(score);
        }

        // Iterate the row-major cell list, not the map, so equal-seed
        // runs see candidates in the same order.
        let top: Vec<Coord> = empty
            .into_iter()
            .filter(|c| scores[c] == best)
            .collect();
        *self
            .rng
            .choose(&top)
            .expect("at least one candidate scored")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;

    fn engine_3x3(first: Marker) -> GameEngine {
        GameEngine::new(3, first).unwrap()
    }

    #[test]
    fn test_noop_when_game_over() {
        let mut engine = engine_3x3(Marker::X);
        // X takes row 0.
        engine.try_move(0, 0);
        engine.try_move(1, 0);
        engine.try_move(0, 1);
        engine.try_move(1, 1);
        engine.try_move(0, 2);
        assert!(engine.game_is_over());

        let mut ai = Strategist::new(1);
        assert_eq!(ai.auto_move(&mut engine), None);
        assert_eq!(engine.cell(2, 2).unwrap(), Marker::Empty);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut engine = engine_3x3(Marker::X);
        // X: (0,0), (0,1); O: (1,1), (2,2). X to move, row 0 open at (0,2).
        engine.try_move(0, 0);
        engine.try_move(1, 1);
        engine.try_move(0, 1);
        engine.try_move(2, 2);
        assert_eq!(engine.current_player(), Marker::X);

        let mut ai = Strategist::new(9);
        assert_eq!(ai.auto_move(&mut engine), Some(Coord::new(0, 2)));
        assert!(engine.game_is_over());
        assert_eq!(engine.winning_player(), Marker::X);
    }

    #[test]
    fn test_blocks_opponent_win() {
        let mut engine = engine_3x3(Marker::X);
        // X threatens row 0 with (0,0), (0,1); O has only the center.
        engine.try_move(0, 0);
        engine.try_move(1, 1);
        engine.try_move(0, 1);
        assert_eq!(engine.current_player(), Marker::O);

        let mut ai = Strategist::new(9);
        assert_eq!(ai.auto_move(&mut engine), Some(Coord::new(0, 2)));
        assert!(!engine.game_is_over());
        assert_eq!(engine.cell(0, 2).unwrap(), Marker::O);
    }

    #[test]
    fn test_win_beats_block() {
        let mut engine = engine_3x3(Marker::X);
        // Both sides threaten: X row 0, O row 2. X to move must win,
        // not block.
        engine.try_move(0, 0); // X
        engine.try_move(2, 0); // O
        engine.try_move(0, 1); // X
        engine.try_move(2, 1); // O
        assert_eq!(engine.current_player(), Marker::X);

        let mut ai = Strategist::new(3);
        assert_eq!(ai.auto_move(&mut engine), Some(Coord::new(0, 2)));
        assert_eq!(engine.winning_player(), Marker::X);
    }

    #[test]
    fn test_opening_move_prefers_center() {
        // On an empty 3x3 the center touches four paths, every other
        // cell fewer; the scoring tier must find it regardless of seed.
        for seed in 0..10 {
            let mut engine = engine_3x3(Marker::O);
            let mut ai = Strategist::new(seed);
            assert_eq!(ai.auto_move(&mut engine), Some(Coord::new(1, 1)));
        }
    }

    #[test]
    fn test_never_picks_occupied_cell() {
        let mut engine = engine_3x3(Marker::X);
        let mut ai = Strategist::new(17);
        while !engine.game_is_over() {
            let before = engine.grid().empty_cells();
            let played = ai.auto_move(&mut engine).unwrap();
            assert!(before.contains(&played));
        }
    }

    #[test]
    fn test_seeded_games_replay_identically() {
        let play = |seed| {
            let mut engine = engine_3x3(Marker::X);
            let mut ai = Strategist::new(seed);
            let mut moves = Vec::new();
            while !engine.game_is_over() {
                moves.push(ai.auto_move(&mut engine).unwrap());
            }
            moves
        };
        assert_eq!(play(5), play(5));
    }
}
