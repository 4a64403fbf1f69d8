//! Level selection menu laid over a grid.

use super::cell::Position;
use super::grid::Grid;

/// Menu surface for picking a level.
///
/// Wraps a [`Grid`] whose first `level_count` cells (row-major) are lit, one
/// per available level. The grid is set up once and never changes; picking a
/// level is a pure lookup.
///
/// # Example
///
/// ```rust
/// use lights_out::board::LevelSelector;
///
/// let selector = LevelSelector::new(5, 4);
/// assert_eq!(selector.select_at(0, 3), Some(4));
/// assert_eq!(selector.select_at(0, 4), None);
/// ```
#[derive(Clone, Debug)]
pub struct LevelSelector {
    grid: Grid,
    slots: Vec<Position>,
}

impl LevelSelector {
    /// Build a selector for `level_count` levels on a `size`×`size` grid.
    ///
    /// Levels beyond the grid capacity get no slot.
    pub fn new(size: usize, level_count: usize) -> Self {
        let mut grid = Grid::new(size);
        let capacity = size.saturating_mul(size);
        let slots: Vec<Position> = (0..level_count.min(capacity))
            .map(|idx| Position::new(idx / size, idx % size))
            .collect();

        for slot in &slots {
            grid.set_active(slot.row, slot.col, true);
        }

        Self { grid, slots }
    }

    /// Level number (1-based) at `(row, col)`, or `None` for a blank cell or
    /// a position outside the grid.
    pub fn select_at(&self, row: usize, col: usize) -> Option<usize> {
        if !self.grid.is_valid_position(row, col) {
            return None;
        }
        let idx = row * self.grid.size() + col;
        (idx < self.slots.len()).then_some(idx + 1)
    }

    /// Cell that represents `level` on the menu.
    pub fn level_position(&self, level: usize) -> Option<Position> {
        level
            .checked_sub(1)
            .and_then(|idx| self.slots.get(idx))
            .copied()
    }

    /// Number of levels that have a slot on the menu.
    pub fn level_count(&self) -> usize {
        self.slots.len()
    }

    /// Read-only view for drawing.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
