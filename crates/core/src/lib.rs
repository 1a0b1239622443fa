//! Core game logic module - pure and testable
//!
//! This crate contains all the game rules and state management. It has
//! **zero dependencies** on terminal I/O, which keeps it:
//!
//! - **Deterministic**: a seeded piece source replays the same game
//! - **Testable**: every rule is covered by unit and integration tests
//! - **Portable**: the terminal shell is just one consumer of [`GameSnapshot`]
//! - **Allocation-free** on the tick path (fixed arrays throughout)
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven 4x4 shape grids
//! - [`rotation`]: clockwise rotation within the 4x4 grid
//! - [`collision`]: whether a shape fits at a board position
//! - [`board`]: 10x20 occupancy grid with merge and line clearing
//! - [`rng`]: uniform random (or scripted) piece selection
//! - [`session`]: active piece, score and the gravity/input state machine
//! - [`snapshot`]: plain-data view consumed by renderers
//!
//! # Game Rules
//!
//! - Pieces spawn with their grid origin at (3, 0)
//! - Rotation is clockwise only, without wall kicks; a blocked rotation is dropped
//! - A piece that cannot fall merges immediately (no lock delay)
//! - Each cleared row is worth 100 points
//! - The game ends when a new piece does not fit at the spawn origin
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{ScriptedPieces, Session};
//! use term_tetris_types::{GameAction, PieceKind};
//!
//! let mut session = Session::new(ScriptedPieces::repeat(PieceKind::O));
//! session.handle_input(GameAction::MoveLeft);
//! session.handle_input(GameAction::RotateCw);
//!
//! let snap = session.tick();
//! assert!(!snap.game_over);
//! assert_eq!(session.score(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod session;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use collision::can_place;
pub use pieces::{shape_of, MinoOffset, Shape};
pub use rng::{random_piece, PieceSource, RandomPieces, ScriptedPieces};
pub use rotation::rotate_clockwise;
pub use session::{ActivePiece, Phase, Session};
pub use snapshot::{ActiveSnapshot, BoardGrid, GameSnapshot};
