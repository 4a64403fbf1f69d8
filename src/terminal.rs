//! Crossterm presentation: draws the active surface and turns mouse and
//! key events into controller inputs.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use lights_out::core::State;
use lights_out::game::{GameController, Input, Mode, Outcome, ScreenLayout};
use lights_out::level::LevelRepository;
use log::debug;
use std::io::{self, Write};

// A terminal cell is roughly twice as tall as it is wide.
const CELL_WIDTH: u32 = 6;
const CELL_HEIGHT: u32 = 3;
const STRIP_HEIGHT: u32 = 3;

const LIT: Color = Color::Rgb {
    r: 250,
    g: 210,
    b: 60,
};
const UNLIT: Color = Color::Rgb {
    r: 50,
    g: 50,
    b: 70,
};
const MENU_SLOT: Color = Color::Rgb {
    r: 80,
    g: 170,
    b: 230,
};
const STRIP: Color = Color::Rgb {
    r: 90,
    g: 90,
    b: 110,
};

const HELP: &str = "click a light | m: menu | r: restart | q: quit";

/// Everything a terminal event can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Game(Input),
    Restart,
    Quit,
}

/// Raw mode, alternate screen and mouse capture for as long as it lives.
struct RawTerminal;

impl RawTerminal {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Layout of the board in terminal character cells, anchored top-left.
fn terminal_layout(grid_size: usize) -> ScreenLayout {
    ScreenLayout::new(grid_size, CELL_WIDTH, CELL_HEIGHT, STRIP_HEIGHT)
}

fn command_for(event: &Event, layout: &ScreenLayout) -> Option<Command> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('m') => Some(Command::Game(Input::ToggleMenu)),
            KeyCode::Char('r') => Some(Command::Restart),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => layout
            .locate(u32::from(*column), u32::from(*row))
            .map(Command::Game),
        _ => None,
    }
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Toggled { .. } => String::new(),
        Outcome::LevelCleared { cleared, next } => {
            format!("Level {cleared} cleared! On to level {next}.")
        }
        Outcome::LevelSelected { level } => format!("Level {level}"),
        Outcome::NoSelection => "No level there".to_string(),
        Outcome::ModeChanged { mode: Mode::Selecting } => "Pick a level".to_string(),
        Outcome::ModeChanged { mode: Mode::Playing } => String::new(),
    }
}

/// Text on the menu strip: the current mode and what a click there does.
fn strip_label(mode: Mode, level: usize) -> String {
    match mode {
        Mode::Playing => format!("{} level {level} | select level", mode.name()),
        Mode::Selecting => format!("{} | back to level {level}", mode.name()),
    }
}

fn draw<R: LevelRepository>(
    out: &mut impl Write,
    game: &GameController<R>,
    layout: &ScreenLayout,
    status: &str,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    // one blank column and row between cells
    let block = " ".repeat(layout.cell_width().saturating_sub(1) as usize);
    let lit = match game.mode() {
        Mode::Playing => LIT,
        Mode::Selecting => MENU_SLOT,
    };

    for cell in game.active_grid().cells() {
        let (x, y) = layout.cell_origin(cell.position());
        let color = if cell.is_active() { lit } else { UNLIT };
        for dy in 0..layout.cell_height().saturating_sub(1) {
            queue!(
                out,
                MoveTo(x as u16, (y + dy) as u16),
                SetBackgroundColor(color),
                Print(&block),
                ResetColor
            )?;
        }
    }

    if game.mode() == Mode::Selecting {
        let selector = game.selector();
        for level in 1..=selector.level_count() {
            if let Some(position) = selector.level_position(level) {
                let (x, y) = layout.cell_origin(position);
                queue!(
                    out,
                    MoveTo(x as u16 + 1, y as u16),
                    SetBackgroundColor(MENU_SLOT),
                    SetForegroundColor(Color::Black),
                    Print(level),
                    ResetColor
                )?;
            }
        }
    }

    let label = strip_label(game.mode(), game.current_level());
    let width = layout.grid_width().saturating_sub(1) as usize;
    let strip_top = layout.grid_height();
    for dy in 0..layout.strip_height().saturating_sub(1) {
        let text = if dy == 0 {
            format!("{label:^width$}")
        } else {
            " ".repeat(width)
        };
        queue!(
            out,
            MoveTo(0, (strip_top + dy) as u16),
            SetBackgroundColor(STRIP),
            SetForegroundColor(Color::White),
            Print(text),
            ResetColor
        )?;
    }

    let status_row = (strip_top + layout.strip_height()) as u16;
    queue!(
        out,
        MoveTo(0, status_row),
        Print(status),
        MoveTo(0, status_row + 1),
        Print(HELP)
    )?;

    out.flush()
}

/// Run the game until the player quits.
pub fn run<R: LevelRepository>(mut game: GameController<R>) -> io::Result<()> {
    let _raw = RawTerminal::enter()?;
    let mut out = io::stdout();
    let layout = terminal_layout(game.config().grid_size);
    let mut status = String::new();

    loop {
        draw(&mut out, &game, &layout, &status)?;

        let event = event::read()?;
        let Some(command) = command_for(&event, &layout) else {
            continue;
        };
        debug!("{command:?}");

        match command {
            Command::Quit => break,
            Command::Restart => {
                status = match game.restart_level() {
                    Ok(()) => format!("Level {} restarted", game.current_level()),
                    Err(err) => err.to_string(),
                };
            }
            Command::Game(input) => {
                status = match game.handle(input) {
                    Ok(outcome) => describe(outcome),
                    Err(err) => err.to_string(),
                };
            }
        }
    }

    Ok(())
}
