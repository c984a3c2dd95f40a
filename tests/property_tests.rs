//! Property-based tests for the grid, the path catalog, and the move
//! contract, driven by randomly generated games.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use tactix::{Coord, GameEngine, Marker, PathCatalog, Strategist};

// =============================================================================
// Strategies
// =============================================================================

/// A grid size in the range the engine is meant for.
fn arb_grid_size() -> impl Strategy<Value = usize> {
    1usize..=8
}

/// A random sequence of cell indices used to drive moves. Indices are
/// taken modulo the grid area, so any vector maps to a move sequence.
fn arb_move_indices() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..256, 0..40)
}

// =============================================================================
// Catalog Shape
// =============================================================================

proptest! {
    #[test]
    fn catalog_has_2n_plus_2_paths_of_length_n(n in arb_grid_size()) {
        let catalog = PathCatalog::build(n);
        prop_assert_eq!(catalog.len(), 2 * n + 2);
        for path in catalog.paths() {
            prop_assert_eq!(path.len(), n);
            let distinct: FxHashSet<Coord> = path.cells().iter().copied().collect();
            prop_assert_eq!(distinct.len(), n, "cells within a path are distinct");
        }
    }

    #[test]
    fn catalog_paths_cover_the_whole_grid(n in arb_grid_size()) {
        let catalog = PathCatalog::build(n);
        let covered: FxHashSet<Coord> = catalog
            .paths()
            .iter()
            .flat_map(|p| p.cells().iter().copied())
            .collect();
        prop_assert_eq!(covered.len(), n * n);
        prop_assert!(covered
            .iter()
            .all(|c| c.row < n && c.col < n));
    }
}

// =============================================================================
// Move Contract
// =============================================================================

proptest! {
    /// `can_move` and `try_move` never disagree, a successful move
    /// mutates exactly the target cell, and a failed move mutates
    /// nothing.
    #[test]
    fn can_move_and_try_move_agree(
        n in 1usize..=5,
        indices in arb_move_indices(),
    ) {
        let mut engine = GameEngine::new(n, Marker::X).unwrap();
        for idx in indices {
            let row = (idx / n) % n;
            let col = idx % n;
            let before: Vec<Marker> = snapshot(&engine);
            let mover = engine.current_player();
            let legal = engine.can_move(row, col);

            prop_assert_eq!(engine.try_move(row, col), legal);

            let after = snapshot(&engine);
            if legal {
                let changed: Vec<usize> = (0..before.len())
                    .filter(|&i| before[i] != after[i])
                    .collect();
                prop_assert_eq!(changed, vec![row * n + col]);
                prop_assert_eq!(after[row * n + col], mover);
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    /// Once over, a game stays over and rejects every move.
    #[test]
    fn game_over_is_monotonic(
        indices in arb_move_indices(),
    ) {
        let n = 3;
        let mut engine = GameEngine::new(n, Marker::X).unwrap();
        let mut was_over = false;
        for idx in indices {
            let moved = engine.try_move((idx / n) % n, idx % n);
            if was_over {
                prop_assert!(!moved, "no move succeeds after game over");
                prop_assert!(engine.game_is_over());
            }
            was_over = engine.game_is_over();
        }
    }

    /// The strategist only ever plays empty cells of a live game, and
    /// the same seed reproduces the same game.
    #[test]
    fn auto_move_plays_legal_and_deterministic(seed in 0u64..500) {
        let run = |seed: u64| {
            let mut engine = GameEngine::new(3, Marker::O).unwrap();
            let mut ai = Strategist::new(seed);
            let mut played = Vec::new();
            while !engine.game_is_over() {
                let empty = engine.grid().empty_cells();
                let cell = ai.auto_move(&mut engine).unwrap();
                assert!(empty.contains(&cell));
                played.push(cell);
            }
            // Finished game: auto_move is a no-op
            assert!(ai.auto_move(&mut engine).is_none());
            played
        };
        prop_assert_eq!(run(seed), run(seed));
    }
}

fn snapshot(engine: &GameEngine) -> Vec<Marker> {
    let n = engine.grid_size();
    (0..n * n)
        .map(|i| engine.cell(i / n, i % n).unwrap())
        .collect()
}
