//! Terminal Game of Life runner (default binary).
//!
//! Fills the terminal with a board, one column per cell and one row kept for
//! the status line, then evolves it until the user quits.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use topolife::cli::{Command, Opts, HELP_TEXT, VERSION};
use topolife::core::LifeSnapshot;
use topolife::engine::Life;
use topolife::input::{handle_key_event, should_quit};
use topolife::session::{Outcome, Session};
use topolife::term::{FrameBuffer, LifeView, TerminalRenderer, Viewport};
use topolife::types::Mode;

fn main() -> Result<()> {
    let opts = match Opts::parse()? {
        Command::Run(opts) => opts,
        Command::Help => {
            println!("{HELP_TEXT}");
            return Ok(());
        }
        Command::Version => {
            println!("topolife {VERSION}");
            return Ok(());
        }
    };
    init_logging(&opts)?;

    let view = LifeView::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let (rows, cols) = view.board_size(Viewport::new(w, h));

    let mut life = Life::new(&opts.life_config(rows, cols))?;
    let mode = if opts.draw {
        Mode::Drawing
    } else {
        life.randomize();
        Mode::Running
    };
    let mut session = Session::new(life, mode, opts.delay_ms)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &view, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        generation = session.life().generation(),
        population = session.life().population(),
        "session ended"
    );
    result
}

/// Log to the file named by `TOPOLIFE_LOG`; without one, logging stays off.
fn init_logging(opts: &Opts) -> Result<()> {
    let Some(path) = &opts.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let filter = EnvFilter::try_new(&opts.log_filter)
        .with_context(|| format!("invalid log filter '{}'", opts.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, view: &LifeView, session: &mut Session) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = LifeSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let state = session.view_into(&mut snap);
        view.render_into(&snap, &state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let tick = Duration::from_millis(session.delay_ms());
        let timeout = tick.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if session.apply(action) == Outcome::Blocked {
                            term.bell()?;
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= Duration::from_millis(session.delay_ms()) {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
