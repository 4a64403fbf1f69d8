//! Board surfaces: cells, the play grid and the level menu.
//!
//! Everything here is plain data plus mutation. Out-of-range coordinates are
//! ignored rather than reported, so callers can pass raw click positions.

mod cell;
mod grid;
mod selector;

pub use cell::{Cell, Position};
pub use grid::Grid;
pub use selector::LevelSelector;
