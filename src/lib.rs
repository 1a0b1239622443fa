//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! Re-exports the workspace crates as `term_tetris::{core,input,journal,runtime,term,types}`.

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_journal as journal;
pub use term_tetris_runtime as runtime;
pub use term_tetris_term as term;
pub use term_tetris_types as types;
