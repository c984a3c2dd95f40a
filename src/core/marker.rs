//! Cell markers and player identity.
//!
//! A `Marker` is both the content of a grid cell and the identity of a
//! player: `X` and `O` are the two players, `Empty` is an unoccupied
//! cell. The engine also reuses `Empty` as a sentinel for "no player to
//! move" once a game has ended.
//!
//! Which marker belongs to the human and which to the computer is the
//! caller's mapping, supplied at reset time. The engine never knows.

use serde::{Deserialize, Serialize};

/// Tri-state cell value: empty, or one of the two players' symbols.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Unoccupied cell, or the "game over" sentinel when used as the
    /// current player.
    #[default]
    Empty,
    /// The X player.
    X,
    /// The O player.
    O,
}

impl Marker {
    /// Check whether this marker is the empty value.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Marker::Empty)
    }

    /// The opposing player's marker.
    ///
    /// Only meaningful for `X` and `O`; calling it on `Empty` is a
    /// logic error and returns `Empty` (debug builds assert).
    #[must_use]
    pub fn other_player(self) -> Marker {
        debug_assert!(!self.is_empty(), "Empty has no opponent");
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
            Marker::Empty => Marker::Empty,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Marker::Empty => ".",
            Marker::X => "X",
            Marker::O => "O",
        };
        write!(f, "{}", symbol)
    }
}
