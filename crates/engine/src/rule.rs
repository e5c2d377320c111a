//! Generation rule - Conway's B3/S23 over a padded board
//!
//! The next state of a cell depends on the cell itself and its 8 neighbors.
//! Both are folded into one weighted sum over the 3x3 window of the padded
//! buffer, with weight 10 on the center and 1 on each neighbor:
//!
//! | Sum | Meaning | Next state |
//! |-----|---------|------------|
//! | 3 | dead, 3 neighbors | alive |
//! | 12 | alive, 2 neighbors | alive |
//! | 13 | alive, 3 neighbors | alive |
//! | anything else | | dead |
//!
//! Because the border already caches glued neighbors, the rule never looks
//! at the geometry.

use topolife_core::Board;

/// Kernel weight of the center cell
const CENTER_WEIGHT: u8 = 10;

/// Whether a weighted 3x3 sum means "alive next generation"
#[inline(always)]
pub fn survives(weighted_sum: u8) -> bool {
    matches!(weighted_sum, 3 | 12 | 13)
}

/// Direct form of the rule from a cell state and its neighbor count
#[inline(always)]
pub fn next_cell(alive: bool, neighbors: u8) -> bool {
    neighbors == 3 || (alive && neighbors == 2)
}

/// Compute the next interior into `out` (row-major, `rows * cols` cells)
/// with the weighted kernel.
///
/// Reads the current board only, so every cell updates simultaneously.
pub fn next_generation(board: &Board, out: &mut Vec<bool>) {
    let (rows, cols) = (board.rows(), board.cols());
    let stride = cols + 2;
    let padded = board.padded_cells();

    out.clear();
    out.reserve(rows * cols);
    for pr in 1..=rows {
        let above = &padded[(pr - 1) * stride..pr * stride];
        let here = &padded[pr * stride..(pr + 1) * stride];
        let below = &padded[(pr + 1) * stride..(pr + 2) * stride];
        for pc in 1..=cols {
            let mut sum = CENTER_WEIGHT * here[pc] as u8;
            for window in [above, here, below] {
                sum += window[pc - 1] as u8 + window[pc + 1] as u8;
            }
            sum += above[pc] as u8 + below[pc] as u8;
            out.push(survives(sum));
        }
    }
}

/// Compute the next interior by counting each cell's neighbors one at a
/// time.
///
/// Slower than [`next_generation`]; kept as the reference it is tested
/// against.
pub fn next_generation_direct(board: &Board, out: &mut Vec<bool>) {
    out.clear();
    for r in 0..board.rows() {
        for c in 0..board.cols() {
            let alive = board.get(r, c).unwrap_or(false);
            let neighbors = board.live_neighbors(r, c).unwrap_or(0);
            out.push(next_cell(alive, neighbors));
        }
    }
}
