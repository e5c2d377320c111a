//! Interactive session: the mode machine between key actions and the engine.
//!
//! The session owns the [`Life`] engine, the drawing cursor, the current
//! [`Mode`] and the generation delay. It performs no I/O, so the whole
//! interaction can be driven from tests.

use anyhow::{bail, Result};
use tracing::{debug, info};

use crate::core::{Cursor, LifeSnapshot};
use crate::engine::Life;
use crate::term::ViewState;
use crate::types::{Geometry, LifeAction, Mode, MAX_DELAY_MS, MIN_DELAY_MS};

/// Result of applying one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action was applied, or it does nothing in this mode.
    Continue,
    /// The action was refused: a cursor move into an unglued edge, or a
    /// speed change past its limit.
    Blocked,
}

/// Generation delays must lie in `MIN_DELAY_MS..=MAX_DELAY_MS`.
pub fn check_delay(delay_ms: u64) -> Result<()> {
    if !(MIN_DELAY_MS..=MAX_DELAY_MS).contains(&delay_ms) {
        bail!("{delay_ms} ms is outside {MIN_DELAY_MS}..={MAX_DELAY_MS}");
    }
    Ok(())
}

pub struct Session {
    life: Life,
    mode: Mode,
    cursor: Cursor,
    delay_ms: u64,
}

impl Session {
    /// Start a session in `mode` with the cursor at the board center.
    ///
    /// Fails if `delay_ms` is outside the supported range.
    pub fn new(life: Life, mode: Mode, delay_ms: u64) -> Result<Self> {
        check_delay(delay_ms)?;
        let cursor = Cursor::centered(life.rows(), life.cols());
        Ok(Self {
            life,
            mode,
            cursor,
            delay_ms,
        })
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn geometry(&self) -> Geometry {
        self.life.geometry()
    }

    /// Apply one user action.
    pub fn apply(&mut self, action: LifeAction) -> Outcome {
        match action {
            LifeAction::Move(direction) => {
                if self.mode != Mode::Drawing {
                    return Outcome::Continue;
                }
                match self.cursor.step(
                    direction,
                    self.life.geometry(),
                    self.life.rows(),
                    self.life.cols(),
                ) {
                    Some(next) => self.cursor = next,
                    None => return Outcome::Blocked,
                }
            }
            LifeAction::Toggle => {
                if self.mode != Mode::Drawing {
                    return Outcome::Continue;
                }
                // The cursor always stays inside the board.
                if self.life.toggle_cell(self.cursor.row, self.cursor.col).is_err() {
                    return Outcome::Blocked;
                }
            }
            LifeAction::StartPause => {
                self.set_mode(match self.mode {
                    Mode::Drawing | Mode::Paused => Mode::Running,
                    Mode::Running => Mode::Paused,
                });
            }
            LifeAction::Draw => self.set_mode(Mode::Drawing),
            LifeAction::Step => {
                if self.mode == Mode::Running {
                    self.set_mode(Mode::Paused);
                }
                self.life.evolve();
            }
            LifeAction::Randomize => self.life.randomize(),
            LifeAction::Clear => self.life.clear(),
            LifeAction::CycleGeometry => {
                let geometry = self.life.cycle_geometry();
                info!(geometry = geometry.as_str(), "switched geometry");
            }
            LifeAction::Faster => return self.set_delay(self.delay_ms / 2),
            LifeAction::Slower => return self.set_delay(self.delay_ms.saturating_mul(2)),
        }
        Outcome::Continue
    }

    /// Advance one generation if running. Returns whether the board evolved.
    pub fn tick(&mut self) -> bool {
        if self.mode != Mode::Running {
            return false;
        }
        self.life.evolve();
        true
    }

    /// Copy everything the view needs into `snap`, returning the host state.
    pub fn view_into(&self, snap: &mut LifeSnapshot) -> ViewState {
        self.life.snapshot_into(snap);
        ViewState {
            mode: self.mode,
            cursor: (self.mode == Mode::Drawing).then_some(self.cursor),
            delay_ms: self.delay_ms,
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(from = self.mode.as_str(), to = mode.as_str(), "mode changed");
            self.mode = mode;
        }
    }

    fn set_delay(&mut self, wanted: u64) -> Outcome {
        let delay = wanted.clamp(MIN_DELAY_MS, MAX_DELAY_MS);
        if delay == self.delay_ms {
            return Outcome::Blocked;
        }
        debug!(delay_ms = delay, "delay changed");
        self.delay_ms = delay;
        Outcome::Continue
    }
}
