use crate::types::Geometry;

/// Plain copy of a board for rendering
///
/// Filled by [`Board::snapshot_into`](crate::Board::snapshot_into); the
/// engine adds the generation counter and seed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LifeSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub geometry: Geometry,
    /// Interior cells, row-major
    pub cells: Vec<bool>,
    pub population: usize,
    pub generation: u64,
    pub seed: Option<u64>,
}

impl LifeSnapshot {
    /// Interior cell `(row, col)`, or None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.population == 0
    }
}
