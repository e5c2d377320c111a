//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events. It maps keys into [`crate::types::LifeAction`];
//! what an action does in the current mode is decided by the session.

pub mod map;

pub use topolife_types as types;

pub use map::{handle_key_event, should_quit};
