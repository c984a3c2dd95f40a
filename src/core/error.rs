//! Engine error taxonomy.
//!
//! Only two things can actually fail:
//!
//! - direct cell access with an out-of-range coordinate, and
//! - constructing or resizing the engine with a grid size below 1.
//!
//! Illegal move attempts (occupied cell, game already over) are not
//! errors; `GameEngine::try_move` reports them as `false` and leaves
//! the game untouched.

use thiserror::Error;

/// Errors raised by the engine's fallible operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A cell access outside `[0, grid_size)` in either dimension.
    ///
    /// Raised only by direct accessors (`Grid::get`,
    /// `GameEngine::cell`); the `can_move`/`try_move` path treats
    /// out-of-range coordinates as "not movable" instead.
    #[error("coordinate ({row}, {col}) is outside the {grid_size}x{grid_size} grid")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Current grid side length.
        grid_size: usize,
    },

    /// A grid size below the minimum of 1.
    ///
    /// The failing call leaves the engine unchanged rather than
    /// partially reconfigured.
    #[error("grid size {grid_size} is invalid (minimum is 1)")]
    InvalidConfiguration {
        /// Rejected grid side length.
        grid_size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidCoordinate {
            row: 5,
            col: 0,
            grid_size: 3,
        };
        assert_eq!(
            err.to_string(),
            "coordinate (5, 0) is outside the 3x3 grid"
        );

        let err = EngineError::InvalidConfiguration { grid_size: 0 };
        assert_eq!(err.to_string(), "grid size 0 is invalid (minimum is 1)");
    }
}
