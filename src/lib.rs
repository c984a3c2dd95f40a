//! # tactix
//!
//! An N-by-N tic-tac-toe engine: grid ownership, winning-line
//! enumeration, move validation, win/tie detection, observer
//! notifications, and a three-tier heuristic computer player.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: rendering, pointer-to-cell mapping, and dialogs
//!    are external consumers of the public API and the notifications.
//!    They never touch grid cells directly.
//!
//! 2. **Single writer**: `GameEngine` exclusively owns the grid;
//!    everything outside reads cell values by copy.
//!
//! 3. **Injected randomness**: the AI's tie-breaking RNG is a seeded
//!    handle, so tests replay identical games.
//!
//! 4. **Generalized size**: everything works for any grid side N >= 1,
//!    though the greedy heuristic is only a solver for the classic 3x3
//!    in spirit, not in guarantee.
//!
//! ## Modules
//!
//! - `core`: markers, coordinates, errors, RNG
//! - `grid`: the marker matrix and the winning-line catalog
//! - `engine`: move validation, state transitions, game setup
//! - `events`: the notification hub consumed by presentation layers
//! - `ai`: the heuristic strategist
//!
//! ## Quick start
//!
//! ```
//! use tactix::{EngineConfig, Marker};
//!
//! let (mut engine, mut ai) = EngineConfig::default().build().unwrap();
//!
//! // Human plays the center, computer answers.
//! assert!(engine.try_move(1, 1));
//! ai.auto_move(&mut engine);
//!
//! assert_eq!(engine.current_player(), Marker::X);
//! ```

pub mod ai;
pub mod core;
pub mod engine;
pub mod events;
pub mod grid;

// Re-export commonly used types
pub use crate::core::{Coord, EngineError, EngineRng, Marker};

pub use crate::grid::{Grid, PathCatalog, WinPath};

pub use crate::engine::{EngineConfig, GameEngine};

pub use crate::events::{GridRegion, ListenerId, NotificationHub};

pub use crate::ai::Strategist;
