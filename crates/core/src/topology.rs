//! Gluing map - the edge identifications of each geometry on coordinates
//!
//! A board with `rows x cols` cells is extended by one ring of positions on
//! every side. [`glue`] answers, for any position in that extended range,
//! which interior cell it stands for. Positions on an open edge map to
//! `None` and behave as permanently dead cells.
//!
//! The padding module writes the same identifications directly into the
//! border of a board's buffer; tests check that the two agree cell for cell.
//!
//! Coordinates: `r` ranges `-1..=rows`, `c` ranges `-1..=cols`. Anything
//! further out is not a neighbor of any cell and returns `None`.

use crate::types::Geometry;

/// Map an extended coordinate to the interior cell glued to it.
///
/// Interior coordinates map to themselves.
///
/// # Examples
///
/// ```
/// use topolife_core::topology::glue;
/// use topolife_core::types::Geometry;
///
/// // Left of (0, 0) on a 4x5 torus is the last column of the same row.
/// assert_eq!(glue(Geometry::Torus, 4, 5, 0, -1), Some((0, 4)));
///
/// // On a Mobius strip the same step lands on the mirrored row.
/// assert_eq!(glue(Geometry::MobiusStrip, 4, 5, 0, -1), Some((3, 4)));
///
/// // Above the top edge of a cylinder there is nothing.
/// assert_eq!(glue(Geometry::Cylinder, 4, 5, -1, 2), None);
/// ```
pub fn glue(
    geometry: Geometry,
    rows: usize,
    cols: usize,
    r: isize,
    c: isize,
) -> Option<(usize, usize)> {
    if rows == 0 || cols == 0 {
        return None;
    }
    let (nr, nc) = (rows as isize, cols as isize);
    if r < -1 || r > nr || c < -1 || c > nc {
        return None;
    }

    let row_out = r == -1 || r == nr;
    let col_out = c == -1 || c == nc;
    if !row_out && !col_out {
        return Some((r as usize, c as usize));
    }
    if (row_out && !geometry.glues_rows()) || (col_out && !geometry.glues_columns()) {
        return None;
    }

    let last_row = rows - 1;
    let last_col = cols - 1;
    // Straight wraparound along each axis.
    let wrap_row = || if r == -1 { last_row } else { 0 };
    let wrap_col = || if c == -1 { last_col } else { 0 };
    // Row index mirrored top-to-bottom; only valid when the row is inside.
    let mirror_row = || last_row - r as usize;
    let mirror_col = || last_col - c as usize;

    match geometry {
        Geometry::Rectangle => None,
        Geometry::Cylinder => Some((r as usize, wrap_col())),
        Geometry::Torus => {
            let row = if row_out { wrap_row() } else { r as usize };
            let col = if col_out { wrap_col() } else { c as usize };
            Some((row, col))
        }
        Geometry::MobiusStrip => Some((mirror_row(), wrap_col())),
        Geometry::KleinBottle => match (row_out, col_out) {
            (true, false) => Some((wrap_row(), c as usize)),
            (false, _) => Some((mirror_row(), wrap_col())),
            // Corners stay on their own row and wrap the column.
            (true, true) => {
                let row = if r == -1 { 0 } else { last_row };
                Some((row, wrap_col()))
            }
        },
        Geometry::ProjectivePlane => match (row_out, col_out) {
            (true, false) => Some((wrap_row(), mirror_col())),
            (false, _) => Some((mirror_row(), wrap_col())),
            // Corners map to the interior's own same-side corner.
            (true, true) => {
                let row = if r == -1 { 0 } else { last_row };
                let col = if c == -1 { 0 } else { last_col };
                Some((row, col))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: usize = 4;
    const C: usize = 5;

    fn corners(g: Geometry) -> [Option<(usize, usize)>; 4] {
        let (r, c) = (R as isize, C as isize);
        [
            glue(g, R, C, -1, -1),
            glue(g, R, C, -1, c),
            glue(g, R, C, r, -1),
            glue(g, R, C, r, c),
        ]
    }

    #[test]
    fn test_interior_maps_to_itself() {
        for g in Geometry::ALL {
            for r in 0..R {
                for c in 0..C {
                    assert_eq!(glue(g, R, C, r as isize, c as isize), Some((r, c)));
                }
            }
        }
    }

    #[test]
    fn test_far_outside_is_never_glued() {
        for g in Geometry::ALL {
            assert_eq!(glue(g, R, C, -2, 0), None);
            assert_eq!(glue(g, R, C, 0, C as isize + 1), None);
        }
    }

    #[test]
    fn test_rectangle_has_no_gluing() {
        assert_eq!(corners(Geometry::Rectangle), [None; 4]);
        assert_eq!(glue(Geometry::Rectangle, R, C, 1, -1), None);
        assert_eq!(glue(Geometry::Rectangle, R, C, -1, 1), None);
    }

    #[test]
    fn test_torus_corners_are_diagonally_opposite() {
        assert_eq!(
            corners(Geometry::Torus),
            [Some((3, 4)), Some((3, 0)), Some((0, 4)), Some((0, 0))]
        );
    }

    #[test]
    fn test_klein_corners_wrap_columns_only() {
        assert_eq!(
            corners(Geometry::KleinBottle),
            [Some((0, 4)), Some((0, 0)), Some((3, 4)), Some((3, 0))]
        );
    }

    #[test]
    fn test_projective_corners_are_identity() {
        assert_eq!(
            corners(Geometry::ProjectivePlane),
            [Some((0, 0)), Some((0, 4)), Some((3, 0)), Some((3, 4))]
        );
    }

    #[test]
    fn test_projective_top_edge_is_column_reversed() {
        assert_eq!(glue(Geometry::ProjectivePlane, R, C, -1, 0), Some((3, 4)));
        assert_eq!(glue(Geometry::ProjectivePlane, R, C, -1, 1), Some((3, 3)));
        assert_eq!(glue(Geometry::ProjectivePlane, R, C, R as isize, 4), Some((0, 0)));
    }

    #[test]
    fn test_open_edges_follow_geometry_flags() {
        let (r, c) = (R as isize, C as isize);
        for g in Geometry::ALL {
            for row in [-1, r] {
                assert_eq!(glue(g, R, C, row, 2).is_some(), g.glues_rows(), "{g:?} row {row}");
            }
            for col in [-1, c] {
                assert_eq!(glue(g, R, C, 1, col).is_some(), g.glues_columns(), "{g:?} col {col}");
            }
            // A corner needs both pairs of edges glued.
            let both = g.glues_rows() && g.glues_columns();
            assert_eq!(corners(g).iter().all(Option::is_some), both, "{g:?}");
            assert_eq!(corners(g).iter().any(Option::is_some), both, "{g:?}");
        }
    }

    #[test]
    fn test_zero_sized_board_has_nothing() {
        assert_eq!(glue(Geometry::Torus, 0, 3, 0, 0), None);
    }
}
