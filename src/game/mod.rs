//! Game flow: configuration, screen layout and the controller state machine.
//!
//! The controller is synchronous. Front-ends decode their own events into
//! [`Input`]s (usually through [`ScreenLayout::locate`]), call
//! [`GameController::handle`] and redraw [`GameController::active_grid`].

mod config;
mod controller;
mod error;
mod layout;
mod mode;

pub use config::{
    GameConfig, GameConfigBuilder, DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH,
    DEFAULT_GRID_SIZE, DEFAULT_LEVEL_COUNT,
};
pub use controller::{next_level, GameController, Input, Outcome};
pub use error::{ConfigError, GameError};
pub use layout::ScreenLayout;
pub use mode::Mode;
