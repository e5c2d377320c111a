//! Conway's Game of Life on compact surfaces (workspace facade crate).
//!
//! The board, engine, input and rendering live in dedicated crates under
//! `crates/`; this package re-exports them as
//! `topolife::{core,engine,input,term,types}` and adds the interactive host
//! pieces used by the binary.

pub use topolife_core as core;
pub use topolife_engine as engine;
pub use topolife_input as input;
pub use topolife_term as term;
pub use topolife_types as types;

pub mod cli;
pub mod session;
