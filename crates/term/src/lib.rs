//! Terminal rendering for the life board.
//!
//! Rendering is split into a pure step and an I/O step:
//!
//! - [`LifeView`] draws a [`LifeSnapshot`](topolife_core::LifeSnapshot) and
//!   a status line into a [`FrameBuffer`]
//! - [`TerminalRenderer`] flushes the framebuffer, writing only what changed
//!   since the previous frame

pub mod fb;
pub mod renderer;
pub mod view;

pub use topolife_core as core;
pub use topolife_types as types;

pub use fb::{FrameBuffer, Glyph, Tone};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{LifeView, ViewState, Viewport};
