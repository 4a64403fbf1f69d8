//! Level loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Problems found in a level definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternIssue {
    #[error("unknown character {ch:?} at row {row}, column {col}")]
    UnknownCharacter { row: usize, col: usize, ch: char },

    #[error("row {row} has {found} characters, expected {expected}")]
    RowLength {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("pattern has {found} rows, expected {expected}")]
    RowCount { found: usize, expected: usize },
}

/// Errors that can occur when loading a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// No definition exists for the requested level
    #[error("No definition found for level {level}")]
    NotFound { level: usize },

    /// The definition exists but could not be read
    #[error("Failed to read level file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Strict loading rejected the definition
    #[error("Level {level} is malformed ({} issue(s))", .issues.len())]
    Malformed {
        level: usize,
        issues: Vec<PatternIssue>,
    },

    /// A JSON level pack could not be parsed
    #[error("Invalid level pack: {0}")]
    Pack(#[from] serde_json::Error),
}
