//! Game setup configuration.
//!
//! The engine itself persists no configuration; the surrounding
//! application decides the grid size, which marker the human controls,
//! and whether the computer opens the game, and passes the result in
//! here. `EngineConfig` is the builder for that handshake.

use serde::{Deserialize, Serialize};

use crate::ai::Strategist;
use crate::core::{EngineError, Marker};
use crate::engine::GameEngine;

/// Setup parameters for a new game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of the grid (default: the classic 3).
    pub grid_size: usize,

    /// The marker the human plays (default: X).
    pub human_marker: Marker,

    /// Whether the computer makes the opening move (default: false).
    pub computer_plays_first: bool,

    /// Seed for the strategist's tie-breaking RNG.
    /// Same seed produces deterministic games.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: 3,
            human_marker: Marker::X,
            computer_plays_first: false,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create a config with custom grid size.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Create a config with a custom human marker.
    #[must_use]
    pub fn with_human_marker(mut self, marker: Marker) -> Self {
        self.human_marker = marker;
        self
    }

    /// Create a config where the computer opens the game.
    #[must_use]
    pub fn with_computer_first(mut self, first: bool) -> Self {
        self.computer_plays_first = first;
        self
    }

    /// Create a config with a custom RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The computer's marker under this config.
    #[must_use]
    pub fn computer_marker(&self) -> Marker {
        self.human_marker.other_player()
    }

    /// Which marker moves first under this config.
    #[must_use]
    pub fn initial_player(&self) -> Marker {
        if self.computer_plays_first {
            self.computer_marker()
        } else {
            self.human_marker
        }
    }

    /// Build the engine and its strategist.
    ///
    /// Does not play the computer's opening move; the caller decides
    /// when to invoke `Strategist::auto_move`.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidConfiguration` if `grid_size < 1`.
    pub fn build(self) -> Result<(GameEngine, Strategist), EngineError> {
        let engine = GameEngine::new(self.grid_size, self.initial_player())?;
        let strategist = Strategist::new(self.seed);
        Ok((engine, strategist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.grid_size, 3);
        assert_eq!(config.human_marker, Marker::X);
        assert!(!config.computer_plays_first);
        assert_eq!(config.initial_player(), Marker::X);
        assert_eq!(config.computer_marker(), Marker::O);
    }

    #[test]
    fn test_computer_first_flips_opener() {
        let config = EngineConfig::default().with_computer_first(true);
        assert_eq!(config.initial_player(), Marker::O);

        let config = config.with_human_marker(Marker::O);
        assert_eq!(config.computer_marker(), Marker::X);
        assert_eq!(config.initial_player(), Marker::X);
    }

    #[test]
    fn test_build() {
        let (engine, _strategist) = EngineConfig::default()
            .with_grid_size(4)
            .with_computer_first(true)
            .build()
            .unwrap();
        assert_eq!(engine.grid_size(), 4);
        assert_eq!(engine.current_player(), Marker::O);
    }

    #[test]
    fn test_build_rejects_zero_grid() {
        let err = EngineConfig::default().with_grid_size(0).build().err();
        assert_eq!(err, Some(EngineError::InvalidConfiguration { grid_size: 0 }));
    }
}
