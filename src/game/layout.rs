//! Screen geometry: which input a click position means.

use crate::board::Position;
use crate::game::controller::Input;

/// Rectangular cells stacked into a square grid, with a menu strip
/// directly below it.
///
/// Units are whatever the front-end uses (pixels, terminal columns).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    grid_size: usize,
    cell_width: u32,
    cell_height: u32,
    strip_height: u32,
}

impl ScreenLayout {
    pub fn new(grid_size: usize, cell_width: u32, cell_height: u32, strip_height: u32) -> Self {
        Self {
            grid_size,
            cell_width,
            cell_height,
            strip_height,
        }
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn grid_width(&self) -> u32 {
        self.cell_width * self.grid_size as u32
    }

    pub fn grid_height(&self) -> u32 {
        self.cell_height * self.grid_size as u32
    }

    pub fn strip_height(&self) -> u32 {
        self.strip_height
    }

    /// Top-left corner of the cell at `position`.
    pub fn cell_origin(&self, position: Position) -> (u32, u32) {
        (
            position.col as u32 * self.cell_width,
            position.row as u32 * self.cell_height,
        )
    }

    /// Translate a click at `(x, y)`.
    ///
    /// Anything above the bottom of the grid is a cell click, even to the
    /// right of the last column; the grid drops those as out of range.
    /// The strip starts exactly at the grid's bottom edge. Clicks below the
    /// strip mean nothing.
    pub fn locate(&self, x: u32, y: u32) -> Option<Input> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }

        let grid_height = self.grid_height();
        if y < grid_height {
            Some(Input::CellAt {
                row: (y / self.cell_height) as usize,
                col: (x / self.cell_width) as usize,
            })
        } else if y < grid_height + self.strip_height {
            Some(Input::ToggleMenu)
        } else {
            None
        }
    }
}
