//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Polling
//! and threading live in the runtime; this crate only answers "what does
//! this key mean".

pub mod map;

pub use term_tetris_types as types;

pub use map::{handle_key_event, should_quit, KeyIntent};
