//! Textual level patterns and how they are applied to a grid.

use crate::board::Grid;
use crate::level::error::{LevelError, PatternIssue};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Character that switches a cell on.
pub const ACTIVE: char = 'o';
/// Character that switches a cell off.
pub const INACTIVE: char = 'x';

/// How a loaded pattern with issues is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Apply whatever can be applied. Unknown characters and missing
    /// cells keep their previous state; issues are only logged.
    #[default]
    Lenient,

    /// Refuse any pattern with issues and leave the grid untouched.
    Strict,
}

/// One level definition: rows of `o` (on) and `x` (off) characters.
///
/// Row `r`, character `c` addresses cell `(r, c)`. Any other character is
/// skipped, so the cell under it keeps whatever state it had.
///
/// # Example
///
/// ```rust
/// use lights_out::board::Grid;
/// use lights_out::level::LevelPattern;
///
/// let pattern = LevelPattern::parse("ooxxx\nxxxxx\nxxxxx\nxxxxx\nxxxxx");
/// let mut grid = Grid::new(5);
/// pattern.apply_to(&mut grid);
///
/// assert_eq!(grid.active_count(), 2);
/// assert_eq!(grid.is_active(0, 1), Some(true));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelPattern {
    rows: Vec<String>,
}

impl LevelPattern {
    /// Split `text` into rows. `\r\n` counts as a line break and a single
    /// trailing newline does not start an extra row.
    pub fn parse(text: &str) -> Self {
        Self {
            rows: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Snapshot the current state of `grid` as a pattern.
    pub fn from_grid(grid: &Grid) -> Self {
        let rows = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_active() { ACTIVE } else { INACTIVE })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Write the pattern onto `grid`.
    ///
    /// Positions outside the grid are dropped by the grid's own bounds
    /// check; cells the pattern does not mention are left alone.
    pub fn apply_to(&self, grid: &mut Grid) {
        for (row, line) in self.rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    ACTIVE => grid.set_active(row, col, true),
                    INACTIVE => grid.set_active(row, col, false),
                    _ => {}
                }
            }
        }
    }

    /// Check the pattern against a `size`×`size` grid, accumulating every
    /// issue instead of stopping at the first.
    pub fn validate(&self, size: usize) -> Validation<(), NonEmptyVec<PatternIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<PatternIssue>>> = Vec::new();

        let row_count = if self.rows.len() == size {
            Validation::success(())
        } else {
            Validation::fail(PatternIssue::RowCount {
                found: self.rows.len(),
                expected: size,
            })
        };
        checks.push(row_count);

        for (row, line) in self.rows.iter().enumerate() {
            let found = line.chars().count();
            if found != size {
                checks.push(Validation::fail(PatternIssue::RowLength {
                    row,
                    found,
                    expected: size,
                }));
            }

            for (col, ch) in line.chars().enumerate() {
                if ch != ACTIVE && ch != INACTIVE {
                    checks.push(Validation::fail(PatternIssue::UnknownCharacter { row, col, ch }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Every issue `validate` finds, as a plain list.
    pub fn issues(&self, size: usize) -> Vec<PatternIssue> {
        match self.validate(size) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    /// Decide whether level `level` may be applied under `policy`.
    pub fn check(&self, level: usize, size: usize, policy: ParsePolicy) -> Result<(), LevelError> {
        let issues = self.issues(size);
        if issues.is_empty() {
            return Ok(());
        }

        match policy {
            ParsePolicy::Lenient => {
                for issue in &issues {
                    warn!("level {level}: {issue}; affected cells keep their previous state");
                }
                Ok(())
            }
            ParsePolicy::Strict => Err(LevelError::Malformed { level, issues }),
        }
    }
}

impl fmt::Display for LevelPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.join("\n"))
    }
}
