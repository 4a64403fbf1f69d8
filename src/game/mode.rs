//! Controller modes.

use crate::state_enum;

state_enum! {
    /// Which surface the player is interacting with.
    #[derive(Copy, Eq, Hash)]
    pub enum Mode {
        /// Clicks toggle lights on the play grid.
        Playing,
        /// Clicks pick a level from the menu.
        Selecting,
    }
}

impl Mode {
    /// The other mode; what a menu toggle switches to.
    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Selecting,
            Self::Selecting => Self::Playing,
        }
    }
}
