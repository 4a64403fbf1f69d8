//! Game configuration and its builder.

use crate::game::error::ConfigError;
use crate::game::layout::ScreenLayout;
use crate::level::ParsePolicy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GRID_SIZE: usize = 5;
pub const DEFAULT_LEVEL_COUNT: usize = 4;
pub const DEFAULT_DISPLAY_WIDTH: u32 = 480;
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 640;

/// Constants the core and the presentation layer agree on.
///
/// The grid is square and fills the display width; whatever height is left
/// below it is the menu strip. The display fields describe a pixel surface
/// and feed [`GameConfig::layout`]; front-ends with their own units, like
/// the terminal one, build a [`ScreenLayout`] directly and only share
/// `grid_size` and `level_count`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the play grid and the menu grid.
    pub grid_size: usize,

    /// Number of levels; progression wraps after the last one.
    pub level_count: usize,

    /// Display width in pixels; also the height of the grid area.
    pub display_width: u32,

    /// Display height in pixels, grid plus menu strip.
    pub display_height: u32,

    /// What to do with level definitions that have issues.
    pub parse_policy: ParsePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            level_count: DEFAULT_LEVEL_COUNT,
            display_width: DEFAULT_DISPLAY_WIDTH,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            parse_policy: ParsePolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Check the invariants the builder enforces. Useful for configs that
    /// were deserialized rather than built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let capacity = self
            .grid_size
            .checked_mul(self.grid_size)
            .ok_or(ConfigError::GridTooLarge {
                size: self.grid_size,
            })?;
        if self.level_count == 0 {
            return Err(ConfigError::NoLevels);
        }
        if self.level_count > capacity {
            return Err(ConfigError::TooManyLevels {
                levels: self.level_count,
                size: self.grid_size,
            });
        }
        if (self.display_width as usize) < self.grid_size {
            return Err(ConfigError::DisplayTooNarrow {
                width: self.display_width,
                size: self.grid_size,
            });
        }
        if self.display_height <= self.grid_extent() {
            return Err(ConfigError::NoMenuStrip {
                width: self.display_width,
                height: self.display_height,
            });
        }
        Ok(())
    }

    /// Side length of one square cell in pixels. Zero when the grid has
    /// more cells per side than the display has pixels.
    pub fn cell_size(&self) -> u32 {
        u32::try_from(self.grid_size.max(1)).map_or(0, |size| self.display_width / size)
    }

    /// Height of the grid area in pixels.
    fn grid_extent(&self) -> u32 {
        u32::try_from(self.grid_size)
            .map_or(u32::MAX, |size| self.cell_size().saturating_mul(size))
    }

    /// Pixel geometry for mapping clicks to inputs.
    pub fn layout(&self) -> ScreenLayout {
        let cell = self.cell_size();
        ScreenLayout::new(
            self.grid_size,
            cell,
            cell,
            self.display_height.saturating_sub(self.grid_extent()),
        )
    }
}

/// Fluent builder for [`GameConfig`].
///
/// # Example
///
/// ```rust
/// use lights_out::game::GameConfig;
/// use lights_out::level::ParsePolicy;
///
/// let config = GameConfig::builder()
///     .level_count(3)
///     .parse_policy(ParsePolicy::Strict)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.grid_size, 5);
/// assert_eq!(config.cell_size(), 96);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_size(mut self, size: usize) -> Self {
        self.config.grid_size = size;
        self
    }

    pub fn level_count(mut self, count: usize) -> Self {
        self.config.level_count = count;
        self
    }

    /// Set the display size in pixels.
    pub fn display(mut self, width: u32, height: u32) -> Self {
        self.config.display_width = width;
        self.config.display_height = height;
        self
    }

    pub fn parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.config.parse_policy = policy;
        self
    }

    /// Build the configuration.
    /// Returns an error if the values are inconsistent.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
