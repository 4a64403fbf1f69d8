//! Terminal front-end for the Lights Out engine.
//!
//! Levels come from `./lvl/<n>` when that directory exists, otherwise from
//! the built-in pack. Set `RUST_LOG=debug` and redirect stderr to see the
//! controller's log.

mod terminal;

use lights_out::game::{GameConfig, GameController};
use lights_out::level::{DirectoryLevels, LevelPack, LevelRepository};
use std::path::Path;

const LEVEL_DIR: &str = "lvl";

fn level_source() -> Box<dyn LevelRepository> {
    if Path::new(LEVEL_DIR).is_dir() {
        log::info!("Loading levels from {LEVEL_DIR}/");
        Box::new(DirectoryLevels::new(LEVEL_DIR))
    } else {
        log::info!("No {LEVEL_DIR}/ directory, using built-in levels");
        Box::new(LevelPack::builtin())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let game = GameController::new(GameConfig::default(), level_source())?;
    terminal::run(game)?;

    log::info!("Quit requested, exiting.");
    Ok(())
}
