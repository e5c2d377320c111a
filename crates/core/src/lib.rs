//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the board representation and the edge identification
//! rules of every supported geometry. It has **zero dependencies** on
//! terminal I/O or randomness, making it:
//!
//! - **Deterministic**: The border depends on the interior alone
//! - **Testable**: Every geometry rule is checked cell for cell
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: padded `rows x cols` grid that keeps its border synchronized
//! - [`padding`]: one border synchronization rule per geometry
//! - [`topology`]: the same gluing rules expressed on coordinates
//! - [`cursor`]: a drawing cursor that crosses glued edges
//! - [`snapshot`]: plain board copies for rendering
//! - [`error`]: validation errors
//!
//! # Example
//!
//! ```
//! use topolife_core::Board;
//! use topolife_core::types::Geometry;
//!
//! let mut board = Board::new(3, 3, Geometry::Torus).unwrap();
//! board.toggle_cell(0, 0).unwrap();
//!
//! // On a 3x3 torus every other cell is a neighbor of (0, 0).
//! assert_eq!(board.neighbors(1, 1).len(), 8);
//! assert_eq!(board.live_neighbors(2, 2), Some(1));
//! ```

pub mod board;
pub mod cursor;
pub mod error;
mod padding;
pub mod snapshot;
pub mod topology;

pub use topolife_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cursor::Cursor;
pub use error::{LifeError, Result};
pub use snapshot::LifeSnapshot;

use types::Geometry;

/// Parse a geometry name, reporting unknown names as a construction error.
///
/// ```
/// use topolife_core::{parse_geometry, LifeError};
/// use topolife_core::types::Geometry;
///
/// assert_eq!(parse_geometry("Klein bottle"), Ok(Geometry::KleinBottle));
/// assert!(matches!(parse_geometry("sphere"), Err(LifeError::UnknownGeometry(_))));
/// ```
pub fn parse_geometry(name: &str) -> Result<Geometry> {
    Geometry::from_str(name).ok_or_else(|| LifeError::UnknownGeometry(name.to_string()))
}
