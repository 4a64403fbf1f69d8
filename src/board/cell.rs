//! A single light on a board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row/column address of a cell, zero-based from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One on/off light with a fixed position.
///
/// Cells are owned by a [`Grid`](super::Grid) and only change through it;
/// the position never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    active: bool,
    position: Position,
}

impl Cell {
    /// Create an inactive cell at `position`.
    pub fn new(position: Position) -> Self {
        Self {
            active: false,
            position,
        }
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
