//! Simulation engine - drives a board one generation at a time
//!
//! [`Life`] owns a [`Board`](topolife_core::Board), a seeded ChaCha8
//! generator, and the alive probability used by `randomize`. The rule itself
//! lives in [`rule`] and reads only the padded board, so it is the same for
//! every geometry.
//!
//! # Example
//!
//! ```
//! use topolife_engine::{Life, LifeConfig};
//! use topolife_engine::types::Geometry;
//!
//! let config = LifeConfig::new(5, 5).with_geometry(Geometry::Rectangle).with_seed(42);
//! let mut life = Life::new(&config).unwrap();
//!
//! // A horizontal blinker turns vertical.
//! for col in 1..4 {
//!     life.toggle_cell(2, col).unwrap();
//! }
//! life.evolve();
//! assert_eq!(life.board().get(1, 2), Some(true));
//! assert_eq!(life.board().get(3, 2), Some(true));
//! assert_eq!(life.board().get(2, 1), Some(false));
//! ```

pub mod config;
pub mod life;
pub mod rule;

pub use topolife_core as core;
pub use topolife_types as types;

pub use config::LifeConfig;
pub use life::Life;
pub use rule::{next_generation, next_generation_direct};
