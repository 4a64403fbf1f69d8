//! Lights Out: a small puzzle engine.
//!
//! A square grid of lights where clicking one flips it and its four
//! orthogonal neighbors. The goal is to switch every light off; clearing a
//! level loads the next one, wrapping after the last.
//!
//! # Modules
//!
//! - `board`: cells, the play grid with the toggle-cross rule, the level menu
//! - `level`: level patterns, their validation and repositories
//! - `game`: configuration, screen layout and the controller state machine
//! - `core`: the `State` trait and transition history used by the controller
//!
//! Rendering and event polling stay outside the library; the `lights-out`
//! binary is a terminal front-end on top of it.
//!
//! # Example
//!
//! ```rust
//! use lights_out::game::{GameConfig, GameController, Input, Mode};
//! use lights_out::level::LevelPack;
//!
//! let mut game = GameController::new(GameConfig::default(), LevelPack::builtin()).unwrap();
//!
//! game.handle(Input::ToggleMenu).unwrap();
//! assert_eq!(game.mode(), Mode::Selecting);
//!
//! // menu cell (0, 2) is level 3
//! game.handle(Input::CellAt { row: 0, col: 2 }).unwrap();
//! assert_eq!(game.mode(), Mode::Playing);
//! assert_eq!(game.current_level(), 3);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod level;
mod macros;

// Re-export commonly used types
pub use board::{Cell, Grid, LevelSelector, Position};
pub use game::{GameConfig, GameController, GameError, Input, Mode, Outcome};
pub use level::{LevelError, LevelPattern, LevelRepository};
