//! Terminal 2048 runner (default binary).
//!
//! Turn-based event loop: block on a key press, apply it to the engine,
//! spawn a tile when the board changed, redraw.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{GameState, TileSpawner};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{GameView, TerminalRenderer};
use tui_2048::types::{GameAction, BOARD_SIZE, INITIAL_TILES};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn start_game(game: &mut GameState, spawner: &mut TileSpawner) {
    game.clear();
    for _ in 0..INITIAL_TILES {
        spawner.spawn(game);
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(BOARD_SIZE);
    let mut spawner = TileSpawner::new(clock_seed());
    start_game(&mut game, &mut spawner);

    let view = GameView::new();

    loop {
        // The game-over query also ratchets the max score.
        let over = game.game_over();
        term.draw(&view.render(&game.snapshot()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        match handle_key_event(key) {
            Some(GameAction::Tilt(side)) => {
                if !over && game.tilt(side) {
                    spawner.spawn(&mut game);
                }
            }
            Some(GameAction::Restart) => {
                start_game(&mut game, &mut spawner);
            }
            None => {}
        }
    }
}
