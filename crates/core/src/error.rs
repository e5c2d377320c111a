//! Error types for board construction and mutation.

use thiserror::Error;

/// Errors raised by [`Board`](crate::Board) and the engine built on it.
///
/// Border synchronization and evolution never fail; every variant here comes
/// from validating caller input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// A board dimension was zero.
    #[error("parameter '{name}' must be positive")]
    ZeroDimension { name: &'static str },

    /// The alive probability was NaN or outside `[0, 1]`.
    #[error("probability must be between 0 and 1, got {0}")]
    InvalidProbability(f64),

    /// A geometry name did not match any supported topology.
    #[error("unsupported geometry: {0:?}")]
    UnknownGeometry(String),

    /// `toggle_cell` was given coordinates outside the interior.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// `set_state` was given a grid of the wrong shape.
    ///
    /// `cols` is the length of the first row that disagrees with the board,
    /// or of the first row when only the row count is wrong. A flat slice
    /// counts as one row.
    #[error("expected a {expected_rows}x{expected_cols} grid, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
}

impl LifeError {
    /// True for errors that abort construction.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            LifeError::ZeroDimension { .. }
                | LifeError::InvalidProbability(_)
                | LifeError::UnknownGeometry(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_errors_are_classified() {
        assert!(LifeError::ZeroDimension { name: "rows" }.is_construction());
        assert!(LifeError::InvalidProbability(1.5).is_construction());
        assert!(LifeError::UnknownGeometry("sphere".into()).is_construction());
        assert!(!LifeError::CellOutOfRange {
            row: 3,
            col: 0,
            rows: 3,
            cols: 3
        }
        .is_construction());
    }

    #[test]
    fn messages_name_the_problem() {
        let err = LifeError::ZeroDimension { name: "cols" };
        assert_eq!(err.to_string(), "parameter 'cols' must be positive");

        let err = LifeError::CellOutOfRange {
            row: 5,
            col: 1,
            rows: 4,
            cols: 4,
        };
        assert_eq!(err.to_string(), "cell (5, 1) is outside the 4x4 board");
    }
}
