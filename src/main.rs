//! Terminal Blockfall runner (default binary).
//!
//! Polls crossterm for key presses, buffers them as commands and feeds them to the simulation
//! once per fixed tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::cli::parse_args;
use blockfall::core::GameState;
use blockfall::input::{should_quit, CommandBuffer};
use blockfall::term::{GameView, TerminalRenderer};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    let mut game_state = cli.build_game()?;
    println!("[Game] seed {}", game_state.seed());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game_state);

    // Always try to restore terminal state.
    let _ = term.exit();

    println!(
        "[Game] pieces {} lines {} game overs {}",
        game_state.pieces_spawned(),
        game_state.lines_cleared(),
        game_state.game_overs()
    );
    result
}

fn run(term: &mut TerminalRenderer, game_state: &mut GameState) -> Result<()> {
    game_state.start();

    let view = GameView::default();
    let mut commands = CommandBuffer::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        term.draw(&view.render(&game_state.snapshot()))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(());
                }
                commands.handle_key_event(key);
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick(TICK_MS, &commands.drain());
        }
    }
}
