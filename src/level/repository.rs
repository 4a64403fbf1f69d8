//! Sources of level definitions.

use crate::level::error::LevelError;
use crate::level::pattern::LevelPattern;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const BUILTIN_LEVELS: [&str; 4] = [
    include_str!("../../levels/1"),
    include_str!("../../levels/2"),
    include_str!("../../levels/3"),
    include_str!("../../levels/4"),
];

/// Anything that can hand out the pattern for a level number.
pub trait LevelRepository {
    /// Load the definition for `level` (1-based).
    ///
    /// Returns [`LevelError::NotFound`] when no definition exists.
    fn load(&self, level: usize) -> Result<LevelPattern, LevelError>;
}

impl<R: LevelRepository + ?Sized> LevelRepository for Box<R> {
    fn load(&self, level: usize) -> Result<LevelPattern, LevelError> {
        (**self).load(level)
    }
}

/// Levels stored as one text file per level, named by its number
/// (`<root>/1`, `<root>/2`, ...).
#[derive(Clone, Debug)]
pub struct DirectoryLevels {
    root: PathBuf,
}

impl DirectoryLevels {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, level: usize) -> PathBuf {
        self.root.join(level.to_string())
    }
}

impl LevelRepository for DirectoryLevels {
    fn load(&self, level: usize) -> Result<LevelPattern, LevelError> {
        let path = self.path_for(level);
        debug!("reading level {level} from {}", path.display());

        match fs::read_to_string(&path) {
            Ok(text) => Ok(LevelPattern::parse(&text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(LevelError::NotFound { level }),
            Err(source) => Err(LevelError::Io { path, source }),
        }
    }
}

/// In-memory set of level definitions.
///
/// # Example
///
/// ```rust
/// use lights_out::level::{LevelPack, LevelRepository};
///
/// let pack = LevelPack::from_json(r#"{"levels": {"1": "ox\nxo"}}"#).unwrap();
/// assert_eq!(pack.load(1).unwrap().rows().len(), 2);
/// assert!(pack.load(2).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPack {
    levels: BTreeMap<usize, String>,
}

impl LevelPack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four 5×5 levels shipped with the crate. Each one is solvable.
    pub fn builtin() -> Self {
        BUILTIN_LEVELS
            .iter()
            .enumerate()
            .fold(Self::new(), |pack, (idx, text)| pack.with_level(idx + 1, *text))
    }

    /// Parse a pack of the form `{"levels": {"1": "ooxxx\n..."}}`.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace a level definition.
    pub fn with_level(mut self, level: usize, text: impl Into<String>) -> Self {
        self.insert(level, text);
        self
    }

    pub fn insert(&mut self, level: usize, text: impl Into<String>) {
        self.levels.insert(level, text.into());
    }

    /// Level numbers present, ascending.
    pub fn levels(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl LevelRepository for LevelPack {
    fn load(&self, level: usize) -> Result<LevelPattern, LevelError> {
        self.levels
            .get(&level)
            .map(|text| LevelPattern::parse(text))
            .ok_or(LevelError::NotFound { level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Grid;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lights-out-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn builtin_pack_has_four_valid_levels() {
        let pack = LevelPack::builtin();
        assert_eq!(pack.levels().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        for level in pack.levels() {
            let pattern = pack.load(level).unwrap();
            assert!(pattern.issues(5).is_empty(), "level {level} is malformed");

            let mut grid = Grid::new(5);
            pattern.apply_to(&mut grid);
            assert!(!grid.is_all_inactive(), "level {level} starts solved");
        }
    }

    #[test]
    fn pack_reports_missing_level() {
        let pack = LevelPack::builtin();
        assert!(matches!(pack.load(0), Err(LevelError::NotFound { level: 0 })));
        assert!(matches!(pack.load(5), Err(LevelError::NotFound { level: 5 })));
    }

    #[test]
    fn with_level_replaces_definition() {
        let pack = LevelPack::new().with_level(1, "ox").with_level(1, "xo");
        assert_eq!(pack.len(), 1);
        assert_eq!(pack.load(1).unwrap().rows(), &["xo".to_string()]);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            LevelPack::from_json("{\"levels\": 3}"),
            Err(LevelError::Pack(_))
        ));
    }

    #[test]
    fn directory_loads_numbered_files() {
        let dir = scratch_dir("dir-load");
        fs::write(dir.join("1"), "oxxxx\nxxxxx\nxxxxx\nxxxxx\nxxxxo\n").unwrap();

        let levels = DirectoryLevels::new(&dir);
        let pattern = levels.load(1).unwrap();
        assert_eq!(pattern.rows().len(), 5);
        assert_eq!(pattern.rows()[4], "xxxxo");

        assert!(matches!(levels.load(2), Err(LevelError::NotFound { level: 2 })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_not_found() {
        let levels = DirectoryLevels::new("/definitely/not/a/level/dir");
        assert!(matches!(levels.load(1), Err(LevelError::NotFound { level: 1 })));
    }

    #[test]
    fn boxed_repository_delegates() {
        let boxed: Box<dyn LevelRepository> = Box::new(LevelPack::builtin());
        assert!(boxed.load(3).is_ok());
        assert!(boxed.load(9).is_err());
    }
}
