//! Move validation, state transition, and game setup.

pub mod config;
pub mod game;

pub use config::EngineConfig;
pub use game::GameEngine;
