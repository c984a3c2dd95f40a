//! Grid storage and winning-line enumeration.

pub mod grid;
pub mod paths;

pub use grid::Grid;
pub use paths::{PathCatalog, WinPath};
