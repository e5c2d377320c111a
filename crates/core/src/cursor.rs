//! Drawing cursor that moves across glued edges
//!
//! Stepping off an edge follows the same gluing map as neighbor counting,
//! so on a Mobius strip the cursor leaves the left edge and reappears on the
//! right edge with its row mirrored. Where an edge is open the step is
//! refused and the host signals it (the terminal bell).

use crate::topology::glue;
use crate::types::{Direction, Geometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cursor in the middle of a `rows x cols` board.
    pub fn centered(rows: usize, cols: usize) -> Self {
        Self {
            row: rows / 2,
            col: cols / 2,
        }
    }

    /// Position after one step, or None if the edge in that direction is
    /// open.
    pub fn step(
        &self,
        direction: Direction,
        geometry: Geometry,
        rows: usize,
        cols: usize,
    ) -> Option<Cursor> {
        let (dr, dc) = direction.delta();
        let r = self.row as isize + dr;
        let c = self.col as isize + dc;
        glue(geometry, rows, cols, r, c).map(|(row, col)| Cursor { row, col })
    }
}
