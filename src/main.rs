//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_2048::term`. The engine only ever sees directions; everything else
//! (restart, quit, drawing) is handled here.

mod args;

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use simplelog::{Config, WriteLogger};

use tui_2048::core::{Game, GameSnapshot};
use tui_2048::input::{handle_key_event, InputAction};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

use args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        WriteLogger::init(args.log_level, Config::default(), file)
            .context("installing logger")?;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("starting game with seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut game = Game::new(seed);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match handle_key_event(key) {
                Some(InputAction::Move(direction)) => {
                    // Ignored by the engine once the game is won or lost.
                    game.apply_move(direction);
                }
                Some(InputAction::Restart) => {
                    info!("restart after {} moves", game.moves());
                    game.reset();
                }
                Some(InputAction::Quit) => return Ok(()),
                None => {}
            },
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
