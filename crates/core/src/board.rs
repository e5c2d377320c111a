//! Board module - the padded cell grid
//!
//! The board is a `rows x cols` grid of living/dead cells surrounded by a
//! one-cell border. Storage is a flat row-major array of
//! `(rows + 2) * (cols + 2)` cells so the 3x3 neighborhood of every interior
//! cell is always in bounds.
//!
//! The border is never written directly: every interior mutation ends with a
//! call into [`padding`](crate::padding), which recomputes the border for
//! the active geometry. Public coordinates are always interior coordinates,
//! `(row, col)` with `row < rows` and `col < cols`.

use arrayvec::ArrayVec;

use crate::error::{LifeError, Result};
use crate::padding::sync_border;
use crate::snapshot::LifeSnapshot;
use crate::topology::glue;
use crate::types::Geometry;

/// Offsets of the 8 surrounding cells, row-major.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A Game of Life board on one of the six geometries
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    geometry: Geometry,
    /// Padded cells, row-major (pr * (cols + 2) + pc)
    cells: Vec<bool>,
}

impl Board {
    /// Create an all-dead board.
    ///
    /// Fails with [`LifeError::ZeroDimension`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize, geometry: Geometry) -> Result<Self> {
        if rows == 0 {
            return Err(LifeError::ZeroDimension { name: "rows" });
        }
        if cols == 0 {
            return Err(LifeError::ZeroDimension { name: "cols" });
        }
        Ok(Self {
            rows,
            cols,
            geometry,
            cells: vec![false; (rows + 2) * (cols + 2)],
        })
    }

    /// Flat index of padded position `(pr, pc)`
    #[inline(always)]
    fn padded_index(&self, pr: usize, pc: usize) -> usize {
        pr * (self.cols + 2) + pc
    }

    /// Flat index of interior cell `(row, col)`, if in range
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.padded_index(row + 1, col + 1))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Switch geometry in place and rebuild the border.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
        self.sync();
    }

    /// Get interior cell `(row, col)`.
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Copy of the interior, one `Vec` per row
    pub fn state(&self) -> Vec<Vec<bool>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Interior row `r` as a slice
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    pub fn row(&self, r: usize) -> &[bool] {
        let start = self.padded_index(r + 1, 1);
        &self.cells[start..start + self.cols]
    }

    /// Replace the whole interior.
    ///
    /// The grid must have exactly `rows` rows of `cols` cells each;
    /// otherwise nothing is written and [`LifeError::ShapeMismatch`] is
    /// returned.
    pub fn set_state<R: AsRef<[bool]>>(&mut self, grid: &[R]) -> Result<()> {
        let bad_row = grid.iter().find(|row| row.as_ref().len() != self.cols);
        if grid.len() != self.rows || bad_row.is_some() {
            let cols = bad_row
                .or_else(|| grid.first())
                .map(|row| row.as_ref().len())
                .unwrap_or(0);
            return Err(LifeError::ShapeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: grid.len(),
                cols,
            });
        }

        for (r, row) in grid.iter().enumerate() {
            let start = self.padded_index(r + 1, 1);
            self.cells[start..start + self.cols].copy_from_slice(row.as_ref());
        }
        self.sync();
        Ok(())
    }

    /// Replace the interior from a row-major slice of `rows * cols` cells.
    ///
    /// Same all-or-nothing contract as [`Board::set_state`]. A slice of the
    /// wrong length is reported as a single row of that length.
    pub fn set_flat(&mut self, cells: &[bool]) -> Result<()> {
        if cells.len() != self.rows * self.cols {
            return Err(LifeError::ShapeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: 1,
                cols: cells.len(),
            });
        }
        for (r, row) in cells.chunks_exact(self.cols).enumerate() {
            let start = self.padded_index(r + 1, 1);
            self.cells[start..start + self.cols].copy_from_slice(row);
        }
        self.sync();
        Ok(())
    }

    /// Set every interior cell from a function of its coordinates.
    ///
    /// Cells are visited in row-major order.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> bool) {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let i = self.padded_index(r + 1, c + 1);
                self.cells[i] = f(r, c);
            }
        }
        self.sync();
    }

    /// Flip interior cell `(row, col)`.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        let i = self.index(row, col).ok_or(LifeError::CellOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })?;
        self.cells[i] = !self.cells[i];
        self.sync();
        Ok(())
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        // A dead interior has a dead border under every geometry.
        self.cells.fill(false);
    }

    /// Number of living interior cells
    pub fn population(&self) -> usize {
        (0..self.rows)
            .map(|r| self.row(r).iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// Count living cells among the 8 surrounding `(row, col)`, border
    /// included.
    ///
    /// Returns None if out of bounds
    pub fn live_neighbors(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col)?;
        let (pr, pc) = (row + 1, col + 1);
        let mut count = 0u8;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let i = self.padded_index(
                (pr as isize + dr) as usize,
                (pc as isize + dc) as usize,
            );
            count += self.cells[i] as u8;
        }
        Some(count)
    }

    /// Interior coordinates of the 8 cells surrounding `(row, col)` under
    /// the board's geometry.
    ///
    /// Positions on an open edge are left out. A cell may appear more than
    /// once (or be its own neighbor) on very small boards, exactly as it is
    /// counted by [`Board::live_neighbors`].
    pub fn neighbors(&self, row: usize, col: usize) -> ArrayVec<(usize, usize), 8> {
        let mut out = ArrayVec::new();
        if self.index(row, col).is_none() {
            return out;
        }
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if let Some(cell) = glue(self.geometry, self.rows, self.cols, r, c) {
                out.push(cell);
            }
        }
        out
    }

    /// The whole padded buffer, border included (row-major, stride
    /// `cols + 2`)
    pub fn padded_cells(&self) -> &[bool] {
        &self.cells
    }

    /// Recompute the border from the interior.
    ///
    /// Every mutating method already does this; it is exposed so callers
    /// can check that the border depends on the interior alone.
    pub fn sync(&mut self) {
        sync_border(self.geometry, self.rows, self.cols, &mut self.cells);
    }

    /// Copy the interior and board metadata into `snap`.
    ///
    /// Reuses the snapshot's allocation when the size is unchanged.
    pub fn snapshot_into(&self, snap: &mut LifeSnapshot) {
        snap.rows = self.rows;
        snap.cols = self.cols;
        snap.geometry = self.geometry;
        snap.cells.clear();
        snap.cells.reserve(self.rows * self.cols);
        for r in 0..self.rows {
            snap.cells.extend_from_slice(self.row(r));
        }
        snap.population = snap.cells.iter().filter(|&&alive| alive).count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(3, 4, Geometry::Rectangle).unwrap();
        // stride is cols + 2 = 6
        assert_eq!(board.index(0, 0), Some(7));
        assert_eq!(board.index(0, 3), Some(10));
        assert_eq!(board.index(2, 3), Some(22));
        assert_eq!(board.index(3, 0), None);
        assert_eq!(board.index(0, 4), None);
        assert_eq!(board.padded_cells().len(), 30);
    }

    #[test]
    fn test_board_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 3, Geometry::Torus),
            Err(LifeError::ZeroDimension { name: "rows" })
        );
        assert_eq!(
            Board::new(3, 0, Geometry::Torus),
            Err(LifeError::ZeroDimension { name: "cols" })
        );
    }

    #[test]
    fn test_toggle_updates_border() {
        let mut board = Board::new(2, 3, Geometry::Torus).unwrap();
        board.toggle_cell(0, 0).unwrap();

        // The right border of row 0 caches interior (0, 0).
        let right = board.padded_index(1, 4);
        assert!(board.cells[right]);
        // The bottom border of column 0 caches interior (0, 0).
        let bottom = board.padded_index(3, 1);
        assert!(board.cells[bottom]);

        board.toggle_cell(0, 0).unwrap();
        assert!(board.cells.iter().all(|&v| !v));
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut board = Board::new(2, 2, Geometry::Rectangle).unwrap();
        assert_eq!(
            board.toggle_cell(2, 0),
            Err(LifeError::CellOutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_set_flat_round_trip() {
        let mut board = Board::new(2, 3, Geometry::KleinBottle).unwrap();
        let flat = [true, false, true, false, true, true];
        board.set_flat(&flat).unwrap();
        assert_eq!(
            board.state(),
            vec![vec![true, false, true], vec![false, true, true]]
        );
        assert!(board.set_flat(&flat[..5]).is_err());
        assert_eq!(board.population(), 4);
    }

    #[test]
    fn test_set_flat_reports_slice_length() {
        let mut board = Board::new(2, 3, Geometry::Torus).unwrap();
        let err = board.set_flat(&[true; 5]).unwrap_err();
        assert_eq!(
            err,
            LifeError::ShapeMismatch {
                expected_rows: 2,
                expected_cols: 3,
                rows: 1,
                cols: 5,
            }
        );
        assert_eq!(err.to_string(), "expected a 2x3 grid, got 1x5");
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_neighbors_on_open_corner() {
        let board = Board::new(3, 3, Geometry::Rectangle).unwrap();
        let n = board.neighbors(0, 0);
        assert_eq!(n.as_slice(), &[(0, 1), (1, 0), (1, 1)]);
        assert!(board.neighbors(3, 3).is_empty());
    }
}
