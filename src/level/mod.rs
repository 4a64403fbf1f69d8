//! Level definitions: parsing, validation and where they come from.
//!
//! A level is a text grid of `o` (on) and `x` (off). Repositories map level
//! numbers to patterns; patterns know how to write themselves onto a grid.

mod error;
mod pattern;
mod repository;

pub use error::{LevelError, PatternIssue};
pub use pattern::{LevelPattern, ParsePolicy, ACTIVE, INACTIVE};
pub use repository::{DirectoryLevels, LevelPack, LevelRepository};
