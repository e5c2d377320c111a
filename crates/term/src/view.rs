//! LifeView: maps a [`LifeSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested against framebuffer text.

use crate::core::{Cursor, LifeSnapshot};
use crate::fb::{FrameBuffer, Tone};
use crate::types::{Mode, CH_ALIVE, CH_DEAD};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Host state shown alongside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub mode: Mode,
    /// Drawing cursor; None hides it
    pub cursor: Option<Cursor>,
    pub delay_ms: u64,
}

/// Renders the board from the top-left corner with a status line on the
/// last terminal row.
#[derive(Debug, Clone, Copy)]
pub struct LifeView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for LifeView {
    fn default() -> Self {
        Self { cell_w: 1 }
    }
}

impl LifeView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    /// Board size that fills `viewport`, keeping one row for the status line.
    ///
    /// Never returns a zero dimension.
    pub fn board_size(&self, viewport: Viewport) -> (usize, usize) {
        let rows = viewport.height.saturating_sub(1).max(1) as usize;
        let cols = (viewport.width / self.cell_w).max(1) as usize;
        (rows, cols)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &LifeSnapshot,
        state: &ViewState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        if viewport.height == 0 {
            return;
        }

        let status_y = viewport.height - 1;
        let visible_rows = snap.rows.min(status_y as usize);
        for r in 0..visible_rows {
            for c in 0..snap.cols {
                let x = c as u16 * self.cell_w;
                if x >= viewport.width {
                    break;
                }
                let alive = snap.get(r, c).unwrap_or(false);
                let under_cursor = state.cursor.is_some_and(|cur| cur.row == r && cur.col == c);
                let (ch, tone) = match (alive, under_cursor) {
                    (true, false) => (CH_ALIVE, Tone::Alive),
                    (false, false) => (CH_DEAD, Tone::Blank),
                    (true, true) => (CH_ALIVE, Tone::CursorAlive),
                    (false, true) => (CH_DEAD, Tone::Cursor),
                };
                for dx in 0..self.cell_w {
                    fb.put(x + dx, r as u16, ch, tone);
                }
            }
        }

        self.draw_status(fb, snap, state, status_y);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &LifeSnapshot, state: &ViewState, y: u16) {
        let mut x = fb.put_str(0, y, " ", Tone::Status);
        x = fb.put_str(x, y, state.mode.as_str(), Tone::Accent);
        x = fb.put_str(x, y, " | ", Tone::Status);
        x = fb.put_str(x, y, snap.geometry.label(), Tone::Accent);
        x = fb.put_str(x, y, " | gen ", Tone::Status);
        x = fb.put_u64(x, y, snap.generation, Tone::Status);
        x = fb.put_str(x, y, " | pop ", Tone::Status);
        x = fb.put_u64(x, y, snap.population as u64, Tone::Status);
        if let Some(seed) = snap.seed {
            x = fb.put_str(x, y, " | seed ", Tone::Status);
            x = fb.put_u64(x, y, seed, Tone::Status);
        }
        x = fb.put_str(x, y, " | ", Tone::Status);
        x = fb.put_u64(x, y, state.delay_ms, Tone::Status);
        x = fb.put_str(x, y, "ms", Tone::Status);

        let hint = match state.mode {
            Mode::Drawing => " | enter toggle, space run, q quit",
            Mode::Running | Mode::Paused => " | space pause, d draw, q quit",
        };
        fb.put_str(x, y, hint, Tone::Status);
    }
}
