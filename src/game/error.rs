//! Controller and configuration errors.

use crate::level::LevelError;
use thiserror::Error;

/// Errors that can occur when building a [`GameConfig`](super::GameConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid size must be at least 1")]
    EmptyGrid,

    #[error("Grid size {size} is too large")]
    GridTooLarge { size: usize },

    #[error("At least one level is required")]
    NoLevels,

    #[error("{levels} levels do not fit on a {size}x{size} selection grid")]
    TooManyLevels { levels: usize, size: usize },

    #[error("Display width {width} is narrower than the {size} grid columns")]
    DisplayTooNarrow { width: u32, size: usize },

    #[error("Display height {height} leaves no menu strip below the {width}-wide grid")]
    NoMenuStrip { width: u32, height: u32 },
}

/// Errors surfaced by [`GameController`](super::GameController).
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
