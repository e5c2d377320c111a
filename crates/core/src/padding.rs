//! Border synchronization - one rule per geometry
//!
//! The board stores `(rows + 2) x (cols + 2)` cells in a flat row-major
//! buffer. The outer ring is the border: each border cell caches the interior
//! cell it is glued to, so neighbor counting never needs to know the
//! geometry. After any interior write, [`sync_border`] recomputes the whole
//! ring from the interior alone.
//!
//! Padded coordinates: interior cell `(r, c)` lives at `(r + 1, c + 1)`.
//! Row `0` is the top border, row `rows + 1` the bottom border, and likewise
//! for columns.

use crate::types::Geometry;

/// Mutable view over a padded buffer.
struct Padded<'a> {
    cells: &'a mut [bool],
    rows: usize,
    cols: usize,
}

impl Padded<'_> {
    #[inline(always)]
    fn idx(&self, pr: usize, pc: usize) -> usize {
        pr * (self.cols + 2) + pc
    }

    /// Read interior cell `(r, c)` (0-based, unpadded).
    #[inline(always)]
    fn interior(&self, r: usize, c: usize) -> bool {
        self.cells[self.idx(r + 1, c + 1)]
    }

    #[inline(always)]
    fn set(&mut self, pr: usize, pc: usize, value: bool) {
        let i = self.idx(pr, pc);
        self.cells[i] = value;
    }

    fn bottom(&self) -> usize {
        self.rows + 1
    }

    fn right(&self) -> usize {
        self.cols + 1
    }

    /// Top and bottom border rows, corners included, all dead.
    fn clear_top_bottom(&mut self) {
        let width = self.cols + 2;
        let bottom = self.idx(self.bottom(), 0);
        self.cells[..width].fill(false);
        self.cells[bottom..bottom + width].fill(false);
    }

    /// Left and right border columns, corners included, all dead.
    fn clear_left_right(&mut self) {
        for pr in 0..self.rows + 2 {
            let right = self.right();
            self.set(pr, 0, false);
            self.set(pr, right, false);
        }
    }

    /// Top border = last interior row, bottom border = first interior row.
    fn wrap_top_bottom(&mut self, reversed: bool) {
        let (bottom, last_row, last_col) = (self.bottom(), self.rows - 1, self.cols - 1);
        for c in 0..self.cols {
            let src = if reversed { last_col - c } else { c };
            let top = self.interior(last_row, src);
            let low = self.interior(0, src);
            self.set(0, c + 1, top);
            self.set(bottom, c + 1, low);
        }
    }

    /// Left border = last interior column, right border = first interior
    /// column, optionally with the rows mirrored.
    fn wrap_left_right(&mut self, reversed: bool) {
        let (right, last_row, last_col) = (self.right(), self.rows - 1, self.cols - 1);
        for r in 0..self.rows {
            let src = if reversed { last_row - r } else { r };
            let left = self.interior(src, last_col);
            let rgt = self.interior(src, 0);
            self.set(r + 1, 0, left);
            self.set(r + 1, right, rgt);
        }
    }

    /// Fill the four corners from interior cells, in the order
    /// top-left, top-right, bottom-left, bottom-right.
    fn corners(&mut self, sources: [(usize, usize); 4]) {
        let (bottom, right) = (self.bottom(), self.right());
        let targets = [(0, 0), (0, right), (bottom, 0), (bottom, right)];
        for ((pr, pc), (r, c)) in targets.into_iter().zip(sources) {
            let value = self.interior(r, c);
            self.set(pr, pc, value);
        }
    }
}

/// Recompute the border of a padded buffer from its interior.
///
/// `cells` must hold exactly `(rows + 2) * (cols + 2)` entries and both
/// dimensions must be positive; [`Board`](crate::Board) guarantees this.
pub(crate) fn sync_border(geometry: Geometry, rows: usize, cols: usize, cells: &mut [bool]) {
    debug_assert_eq!(cells.len(), (rows + 2) * (cols + 2));
    let mut padded = Padded { cells, rows, cols };
    match geometry {
        Geometry::Rectangle => sync_rectangle(&mut padded),
        Geometry::Cylinder => sync_cylinder(&mut padded),
        Geometry::Torus => sync_torus(&mut padded),
        Geometry::MobiusStrip => sync_mobius_strip(&mut padded),
        Geometry::KleinBottle => sync_klein_bottle(&mut padded),
        Geometry::ProjectivePlane => sync_projective_plane(&mut padded),
    }
}

fn sync_rectangle(p: &mut Padded<'_>) {
    p.clear_top_bottom();
    p.clear_left_right();
}

fn sync_cylinder(p: &mut Padded<'_>) {
    p.clear_top_bottom();
    p.wrap_left_right(false);
}

fn sync_torus(p: &mut Padded<'_>) {
    let (lr, lc) = (p.rows - 1, p.cols - 1);
    p.wrap_top_bottom(false);
    p.wrap_left_right(false);
    p.corners([(lr, lc), (lr, 0), (0, lc), (0, 0)]);
}

fn sync_mobius_strip(p: &mut Padded<'_>) {
    p.clear_top_bottom();
    p.wrap_left_right(true);
}

fn sync_klein_bottle(p: &mut Padded<'_>) {
    let (lr, lc) = (p.rows - 1, p.cols - 1);
    p.wrap_top_bottom(false);
    p.wrap_left_right(true);
    p.corners([(0, lc), (0, 0), (lr, lc), (lr, 0)]);
}

fn sync_projective_plane(p: &mut Padded<'_>) {
    let (lr, lc) = (p.rows - 1, p.cols - 1);
    p.wrap_top_bottom(true);
    p.wrap_left_right(true);
    // Identity corners; see the pinned test in tests/topology_tests.rs.
    p.corners([(0, 0), (0, lc), (lr, 0), (lr, lc)]);
}
