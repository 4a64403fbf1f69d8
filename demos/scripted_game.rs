//! Scripted Game
//!
//! This example drives the game controller without a window: it replays
//! pixel clicks on the default 480x640 display, opening the level menu,
//! picking a level and solving it, and prints the board after each step.
//!
//! Key concepts:
//! - `GameConfig::layout` turns pixel positions into inputs
//! - Clearing a level loads the next one before `handle` returns
//! - The controller keeps a history of mode changes
//!
//! Run with: cargo run --example scripted_game

use lights_out::board::Grid;
use lights_out::core::State;
use lights_out::game::{GameConfig, GameController};
use lights_out::level::LevelPack;

fn show(grid: &Grid) {
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|cell| if cell.is_active() { '#' } else { '.' })
            .collect();
        println!("  {line}");
    }
}

fn main() {
    println!("=== Scripted Lights Out ===\n");

    let config = GameConfig::default();
    let layout = config.layout();
    let mut game = GameController::new(config, LevelPack::builtin()).unwrap();
    println!("Level {} ({}):", game.current_level(), game.mode().name());
    show(game.play_grid());

    // Pixel clicks: the strip below the grid, menu cell (0, 1) for level 2,
    // then the three clicks that clear it
    let clicks = [(240, 560), (140, 40), (40, 40), (440, 440), (240, 240)];

    for (x, y) in clicks {
        let Some(input) = layout.locate(x, y) else {
            println!("\n({x}, {y}) is outside the board");
            continue;
        };
        let outcome = game.handle(input).unwrap();
        println!("\n({x}, {y}) -> {input:?} -> {outcome:?}");
        show(game.active_grid());
    }

    println!("\nNow on level {}", game.current_level());
    println!("Levels visited: {:?}", game.history().levels_visited());
    println!("Mode path: {:?}", game.history().get_path());

    println!("\n=== Example Complete ===");
}
