//! Terminal rendering layer.
//!
//! Renders a [`core::GameSnapshot`] into an in-memory framebuffer and flushes
//! only the changed cells to the terminal.
//!
//! - [`fb`]: styled character grid
//! - [`game_view`]: pure snapshot-to-framebuffer mapping (unit-tested, no I/O)
//! - [`renderer`]: raw-mode terminal session and diff flushing via crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
