//! Core engine types: markers, coordinates, errors, RNG.
//!
//! This module contains the fundamental building blocks shared by the
//! grid, the move engine, and the AI strategist.

pub mod coord;
pub mod error;
pub mod marker;
pub mod rng;

pub use coord::Coord;
pub use error::EngineError;
pub use marker::Marker;
pub use rng::EngineRng;
