//! Terminal gridfall runner.
//!
//! Wires the pieces together: a shared game session, the gravity clock
//! thread, crossterm key input, and the framebuffer renderer. The gravity
//! period in milliseconds may be given as the single optional argument
//! (`gridfall 250`); it is the only tunable.

use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{Game, GameSnapshot};
use gridfall::engine::{GravityClock, Session};
use gridfall::input::map_key;
use gridfall::term::{BoardView, TerminalRenderer, Viewport};
use gridfall::types::{Command, GRAVITY_PERIOD_MS};

/// Frame pacing for rendering and input polling.
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let period = gravity_period_from_args()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, period);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, period: Duration) -> Result<()> {
    let mut game = Game::new(seed_from_clock());
    game.start();

    let session = Session::new(game);
    let clock = GravityClock::spawn(session.clone(), period);

    let view = BoardView::default();
    let mut snapshot = GameSnapshot::default();
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        // Render the latest state; the view only ever sees snapshots.
        session.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with a frame-length timeout.
        if event::poll(frame)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match map_key(key) {
                        Some(Command::Quit) => break,
                        Some(command) => {
                            session.apply(command);
                        }
                        None => {}
                    }
                }
            }
        }
    }

    clock.shutdown();
    Ok(())
}

fn gravity_period_from_args() -> Result<Duration> {
    match env::args().nth(1) {
        Some(arg) => {
            let ms: u64 = arg
                .parse()
                .with_context(|| format!("invalid gravity period: {arg:?}"))?;
            if ms == 0 {
                bail!("gravity period must be at least 1ms");
            }
            Ok(Duration::from_millis(ms))
        }
        None => Ok(Duration::from_millis(GRAVITY_PERIOD_MS)),
    }
}

/// Seed the shape picker from the wall clock.
fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
