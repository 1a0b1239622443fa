//! Runtime: the I/O shell around the game session.
//!
//! - [`config`]: environment-variable configuration
//! - [`drivers`]: gravity timer and keyboard pump, both feeding one channel
//! - [`event_loop`]: the single consumer that owns and mutates the session
//! - [`app`]: full terminal game (raw mode, rendering, journal)

pub mod app;
pub mod config;
pub mod drivers;
pub mod event_loop;

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_journal as journal;
pub use term_tetris_term as term;
pub use term_tetris_types as types;

pub use app::run;
pub use config::GameConfig;
pub use drivers::{spawn_gravity, spawn_input_pump, CrosstermEvents, EventSource, TermEvent};
pub use event_loop::{drive, hold_final_frame, LoopEvent, Outcome, EVENT_QUEUE_DEPTH, GAME_OVER_HOLD};
