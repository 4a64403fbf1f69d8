//! Square grid of cells with the toggle-cross rule.

use super::cell::{Cell, Position};
use serde::{Deserialize, Serialize};

/// N×N board of [`Cell`]s stored row-major.
///
/// Every coordinate-taking method checks the position first; anything out of
/// range is a silent no-op. Edge and corner toggles rely on this, so a click
/// on row 0 simply has no neighbor above it.
///
/// # Example
///
/// ```rust
/// use lights_out::board::Grid;
///
/// let mut grid = Grid::new(5);
/// grid.toggle_cross(0, 0);
/// assert_eq!(grid.active_count(), 3);
///
/// grid.toggle_cross(0, 0);
/// assert!(grid.is_all_inactive());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size`×`size` grid with every cell inactive.
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::new(Position::new(row, col))))
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.is_valid_position(row, col).then(|| row * self.size + col)
    }

    /// Set one cell. No-op outside the grid.
    pub fn set_active(&mut self, row: usize, col: usize, active: bool) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx].set_active(active);
        }
    }

    /// State of one cell, or `None` outside the grid.
    pub fn is_active(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|idx| self.cells[idx].is_active())
    }

    /// In-range positions touched by a toggle at `(row, col)`: the target
    /// itself and its four orthogonal neighbors, each checked on its own.
    pub fn cross(&self, row: usize, col: usize) -> Vec<Position> {
        let candidates = [
            Some((row, col)),
            row.checked_add(1).map(|r| (r, col)),
            row.checked_sub(1).map(|r| (r, col)),
            col.checked_add(1).map(|c| (row, c)),
            col.checked_sub(1).map(|c| (row, c)),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter(|&(r, c)| self.is_valid_position(r, c))
            .map(|(r, c)| Position::new(r, c))
            .collect()
    }

    /// Toggle the cell at `(row, col)` and its orthogonal neighbors.
    ///
    /// Applying the same toggle twice restores the previous state.
    pub fn toggle_cross(&mut self, row: usize, col: usize) {
        for position in self.cross(row, col) {
            let idx = position.row * self.size + position.col;
            self.cells[idx].toggle();
        }
    }

    /// True when every light is off.
    pub fn is_all_inactive(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_active()).count()
    }

    /// Switch every cell off without reallocating.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.set_active(false);
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Rows from top to bottom, each as a slice of `size` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; a 0×0 grid has no cells to chunk anyway
        self.cells.chunks(self.size.max(1))
    }
}
