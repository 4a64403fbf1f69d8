//! The game state machine: mode, current level and win handling.

use crate::board::{Grid, LevelSelector, Position};
use crate::core::{State, StateHistory, StateTransition};
use crate::game::config::GameConfig;
use crate::game::error::GameError;
use crate::game::mode::Mode;
use crate::level::{LevelError, LevelPattern, LevelRepository};
use chrono::Utc;
use log::{debug, info, warn};

/// A decoded player action, already mapped from screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Click on the grid area.
    CellAt { row: usize, col: usize },
    /// Click on the menu strip below the grid.
    ToggleMenu,
}

/// What an input did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A play move that did not clear the level.
    Toggled { position: Position },
    /// A play move cleared `cleared`; `next` is now loaded.
    LevelCleared { cleared: usize, next: usize },
    /// A level was picked from the menu and loaded.
    LevelSelected { level: usize },
    /// A menu click on a blank cell.
    NoSelection,
    /// The menu strip switched modes.
    ModeChanged { mode: Mode },
}

/// Level that follows `current` when progression wraps after `max_level`.
///
/// ```rust
/// use lights_out::game::next_level;
///
/// assert_eq!(next_level(2, 4), 3);
/// assert_eq!(next_level(4, 4), 1);
/// ```
pub fn next_level(current: usize, max_level: usize) -> usize {
    current % max_level.max(1) + 1
}

/// Owns the play grid and the level menu and routes inputs between them.
///
/// Starts in [`Mode::Playing`] on level 1. Every input resolves completely,
/// including a reload after a win, before `handle` returns. When a level
/// cannot be loaded the transition is refused: mode, level and grid stay as
/// they were and the error is returned.
///
/// # Example
///
/// ```rust
/// use lights_out::game::{GameConfig, GameController, Input, Mode, Outcome};
/// use lights_out::level::LevelPack;
///
/// let mut game = GameController::new(GameConfig::default(), LevelPack::builtin()).unwrap();
/// assert_eq!(game.mode(), Mode::Playing);
///
/// // the first built-in level is a single cross around the centre
/// let outcome = game.handle(Input::CellAt { row: 2, col: 2 }).unwrap();
/// assert_eq!(outcome, Outcome::LevelCleared { cleared: 1, next: 2 });
/// assert_eq!(game.current_level(), 2);
/// ```
pub struct GameController<R: LevelRepository> {
    config: GameConfig,
    repository: R,
    mode: Mode,
    current_level: usize,
    play_grid: Grid,
    selector: LevelSelector,
    history: StateHistory<Mode>,
}

impl<R: LevelRepository> GameController<R> {
    /// Create a controller and load level 1.
    pub fn new(config: GameConfig, repository: R) -> Result<Self, GameError> {
        config.validate()?;

        let mut controller = Self {
            play_grid: Grid::new(config.grid_size),
            selector: LevelSelector::new(config.grid_size, config.level_count),
            mode: Mode::Playing,
            current_level: 1,
            history: StateHistory::new(),
            config,
            repository,
        };

        let pattern = controller.fetch(1)?;
        controller.install(1, &pattern);
        Ok(controller)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn play_grid(&self) -> &Grid {
        &self.play_grid
    }

    pub fn selector(&self) -> &LevelSelector {
        &self.selector
    }

    /// The surface to draw for the current mode.
    pub fn active_grid(&self) -> &Grid {
        match self.mode {
            Mode::Playing => &self.play_grid,
            Mode::Selecting => self.selector.grid(),
        }
    }

    pub fn history(&self) -> &StateHistory<Mode> {
        &self.history
    }

    /// Process one input.
    pub fn handle(&mut self, input: Input) -> Result<Outcome, GameError> {
        match (self.mode, input) {
            (_, Input::ToggleMenu) => Ok(self.toggle_menu()),
            (Mode::Playing, Input::CellAt { row, col }) => self.play(row, col),
            (Mode::Selecting, Input::CellAt { row, col }) => self.select(row, col),
        }
    }

    /// Switch between playing and the level menu.
    pub fn toggle_menu(&mut self) -> Outcome {
        let to = self.mode.toggled();
        self.transition(to, self.current_level);
        Outcome::ModeChanged { mode: to }
    }

    /// Clear the play grid and load the current level again.
    pub fn restart_level(&mut self) -> Result<(), GameError> {
        let pattern = self.fetch(self.current_level)?;
        self.play_grid.reset();
        self.install(self.current_level, &pattern);
        Ok(())
    }

    fn play(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        self.play_grid.toggle_cross(row, col);
        debug!(
            "toggled ({row}, {col}), {} lights on",
            self.play_grid.active_count()
        );

        if !self.play_grid.is_all_inactive() {
            return Ok(Outcome::Toggled {
                position: Position::new(row, col),
            });
        }

        let cleared = self.current_level;
        let next = next_level(cleared, self.config.level_count);
        info!("level {cleared} cleared");

        let pattern = self.fetch(next)?;
        self.install(next, &pattern);
        self.transition(Mode::Playing, next);
        Ok(Outcome::LevelCleared { cleared, next })
    }

    fn select(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        let Some(level) = self.selector.select_at(row, col) else {
            debug!("no level at ({row}, {col})");
            return Ok(Outcome::NoSelection);
        };

        let pattern = self.fetch(level)?;
        self.install(level, &pattern);
        self.transition(Mode::Playing, level);
        Ok(Outcome::LevelSelected { level })
    }

    /// Load and check a level without touching any state.
    fn fetch(&self, level: usize) -> Result<LevelPattern, LevelError> {
        let pattern = self.repository.load(level).inspect_err(|err| {
            warn!("cannot load level {level}: {err}");
        })?;
        pattern.check(level, self.config.grid_size, self.config.parse_policy)?;
        Ok(pattern)
    }

    fn install(&mut self, level: usize, pattern: &LevelPattern) {
        pattern.apply_to(&mut self.play_grid);
        self.current_level = level;
        info!(
            "level {level} loaded, {} lights on",
            self.play_grid.active_count()
        );
    }

    fn transition(&mut self, to: Mode, level: usize) {
        debug!("{} -> {} on level {level}", self.mode.name(), to.name());
        self.history.push(StateTransition {
            from: self.mode,
            to,
            level,
            timestamp: Utc::now(),
        });
        self.mode = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::error::ConfigError;
    use crate::level::{LevelPack, ParsePolicy};

    const TWO_ON: &str = "ooxxx\nxxxxx\nxxxxx\nxxxxx\nxxxxx";

    fn builtin_game() -> GameController<LevelPack> {
        GameController::new(GameConfig::default(), LevelPack::builtin()).unwrap()
    }

    fn click(game: &mut GameController<LevelPack>, row: usize, col: usize) -> Outcome {
        game.handle(Input::CellAt { row, col }).unwrap()
    }

    fn active_positions(grid: &Grid) -> Vec<Position> {
        grid.cells()
            .filter(|cell| cell.is_active())
            .map(|cell| cell.position())
            .collect()
    }

    #[test]
    fn starts_playing_level_one() {
        let game = builtin_game();
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.play_grid().active_count(), 5);
        assert!(game.history().is_empty());
    }

    #[test]
    fn new_fails_without_level_one() {
        let pack = LevelPack::new().with_level(2, TWO_ON);
        let result = GameController::new(GameConfig::default(), pack);
        assert!(matches!(
            result,
            Err(GameError::Level(LevelError::NotFound { level: 1 }))
        ));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = GameConfig {
            level_count: 0,
            ..GameConfig::default()
        };
        let result = GameController::new(config, LevelPack::builtin());
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn clicking_toggles_cross() {
        let pack = LevelPack::new().with_level(1, TWO_ON);
        let mut game = GameController::new(GameConfig::default(), pack).unwrap();

        let outcome = click(&mut game, 0, 1);

        assert_eq!(
            outcome,
            Outcome::Toggled {
                position: Position::new(0, 1)
            }
        );
        assert_eq!(
            active_positions(game.play_grid()),
            vec![Position::new(0, 2), Position::new(1, 1)]
        );
    }

    #[test]
    fn toggle_menu_flips_mode_and_surface() {
        let mut game = builtin_game();

        assert_eq!(
            game.handle(Input::ToggleMenu).unwrap(),
            Outcome::ModeChanged {
                mode: Mode::Selecting
            }
        );
        assert_eq!(game.active_grid().active_count(), 4);

        game.handle(Input::ToggleMenu).unwrap();
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.active_grid(), game.play_grid());
    }

    #[test]
    fn selecting_a_level_loads_it_and_resumes_play() {
        let mut game = builtin_game();
        game.toggle_menu();

        let outcome = click(&mut game, 0, 2);

        assert_eq!(outcome, Outcome::LevelSelected { level: 3 });
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.current_level(), 3);
        let expected = LevelPack::builtin().load(3).unwrap();
        assert_eq!(LevelPattern::from_grid(game.play_grid()), expected);
    }

    #[test]
    fn blank_menu_cell_changes_nothing() {
        let mut game = builtin_game();
        game.toggle_menu();
        let grid_before = game.play_grid().clone();

        assert_eq!(click(&mut game, 0, 4), Outcome::NoSelection);
        assert_eq!(click(&mut game, 7, 7), Outcome::NoSelection);
        assert_eq!(game.mode(), Mode::Selecting);
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.play_grid(), &grid_before);
    }

    #[test]
    fn solving_advances_to_next_level() {
        let mut game = builtin_game();

        let outcome = click(&mut game, 2, 2);

        assert_eq!(outcome, Outcome::LevelCleared { cleared: 1, next: 2 });
        assert_eq!(game.current_level(), 2);
        assert_eq!(game.mode(), Mode::Playing);
        assert!(!game.play_grid().is_all_inactive());
    }

    #[test]
    fn clearing_last_level_wraps_to_first() {
        let mut game = builtin_game();
        game.toggle_menu();
        click(&mut game, 0, 3);
        assert_eq!(game.current_level(), 4);

        let solution = [(0, 2), (2, 0), (2, 4), (4, 2), (2, 2)];
        let mut last = None;
        for (row, col) in solution {
            last = Some(click(&mut game, row, col));
        }

        assert_eq!(last, Some(Outcome::LevelCleared { cleared: 4, next: 1 }));
        assert_eq!(game.current_level(), 1);
    }

    #[test]
    fn missing_next_level_keeps_current_level() {
        let config = GameConfig::builder().level_count(2).build().unwrap();
        let pack = LevelPack::new().with_level(1, LevelPack::builtin().load(1).unwrap().to_string());
        let mut game = GameController::new(config, pack).unwrap();

        let result = game.handle(Input::CellAt { row: 2, col: 2 });

        assert!(matches!(
            result,
            Err(GameError::Level(LevelError::NotFound { level: 2 }))
        ));
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.mode(), Mode::Playing);
        assert!(game.history().is_empty());
    }

    #[test]
    fn missing_selected_level_stays_in_menu() {
        let pack = LevelPack::new().with_level(1, TWO_ON);
        let mut game = GameController::new(GameConfig::default(), pack).unwrap();
        game.toggle_menu();
        let grid_before = game.play_grid().clone();

        let result = game.handle(Input::CellAt { row: 0, col: 1 });

        assert!(matches!(
            result,
            Err(GameError::Level(LevelError::NotFound { level: 2 }))
        ));
        assert_eq!(game.mode(), Mode::Selecting);
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.play_grid(), &grid_before);
    }

    #[test]
    fn strict_policy_refuses_malformed_level() {
        let config = GameConfig::builder()
            .parse_policy(ParsePolicy::Strict)
            .build()
            .unwrap();
        let pack = LevelPack::builtin().with_level(2, "ooxxx\nxx?xx");
        let mut game = GameController::new(config, pack).unwrap();
        game.toggle_menu();
        let grid_before = game.play_grid().clone();

        let result = game.handle(Input::CellAt { row: 0, col: 1 });

        assert!(matches!(
            result,
            Err(GameError::Level(LevelError::Malformed { level: 2, .. }))
        ));
        assert_eq!(game.play_grid(), &grid_before);
    }

    #[test]
    fn lenient_policy_keeps_stale_cells() {
        let pack = LevelPack::new()
            .with_level(1, "oxxxx\nxxxxx\nxxxxx\nxxxxx\nxxxxx")
            .with_level(2, "x?xxx\nxxxxx\nxxxxx\nxxxxx\nxxxxx");
        let mut game = GameController::new(GameConfig::default(), pack).unwrap();
        // lights (0,1), which level 2 does not define
        click(&mut game, 1, 1);
        assert_eq!(game.play_grid().is_active(0, 1), Some(true));

        game.toggle_menu();
        click(&mut game, 0, 1);

        assert_eq!(game.current_level(), 2);
        assert_eq!(game.play_grid().is_active(0, 0), Some(false));
        assert_eq!(game.play_grid().is_active(0, 1), Some(true));
    }

    #[test]
    fn restart_restores_initial_pattern() {
        let mut game = builtin_game();
        click(&mut game, 0, 0);
        click(&mut game, 4, 4);

        game.restart_level().unwrap();

        let expected = LevelPack::builtin().load(1).unwrap();
        assert_eq!(LevelPattern::from_grid(game.play_grid()), expected);
        assert_eq!(game.current_level(), 1);
    }

    #[test]
    fn history_records_mode_and_level_changes() {
        let mut game = builtin_game();
        game.toggle_menu();
        click(&mut game, 0, 1);
        for (row, col) in [(0, 0), (4, 4), (2, 2)] {
            click(&mut game, row, col);
        }

        let history = game.history();
        assert_eq!(
            history.get_path(),
            vec![&Mode::Playing, &Mode::Selecting, &Mode::Playing, &Mode::Playing]
        );
        assert_eq!(history.levels_visited(), vec![1, 2, 3]);
    }

    #[test]
    fn every_transition_adds_one_entry() {
        let mut game = builtin_game();
        for expected in 1..=6 {
            game.toggle_menu();
            assert_eq!(game.history().len(), expected);
        }
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.history().levels_visited(), vec![1]);
    }

    #[test]
    fn new_rejects_oversized_grid_from_json() {
        let config: GameConfig = serde_json::from_str(r#"{"grid_size": 8589934592}"#).unwrap();
        let result = GameController::new(config, LevelPack::builtin());
        assert!(matches!(
            result,
            Err(GameError::Config(ConfigError::GridTooLarge { .. }))
        ));
    }

    #[test]
    fn next_level_wraps() {
        assert_eq!(next_level(1, 4), 2);
        assert_eq!(next_level(2, 4), 3);
        assert_eq!(next_level(4, 4), 1);
        assert_eq!(next_level(1, 1), 1);
    }
}
