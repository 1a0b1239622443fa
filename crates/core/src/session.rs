//! Game session - the falling piece state machine
//!
//! Ties together the board, the piece catalog and the piece source. A
//! session alternates between `Falling` and the transient merge/clear/spawn
//! steps until a freshly spawned piece does not fit, which ends the game.
//!
//! ```text
//! Spawning -> Falling -> Merging -> LineClearing -> Spawning
//!     |
//!     +-> GameOver
//! ```
//!
//! Gravity ticks and player input both mutate the session, so callers must
//! serialize them; the runtime does this with a single event queue.

use crate::board::Board;
use crate::collision::can_place;
use crate::pieces::{shape_of, Shape};
use crate::rng::{PieceSource, RandomPieces};
use crate::rotation::rotate_clockwise;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn origin
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn fits(&self, board: &Board) -> bool {
        can_place(&self.shape, board, self.x, self.y)
    }

    fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Resting states of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<S: PieceSource = RandomPieces> {
    board: Board,
    active: Option<ActivePiece>,
    source: S,
    phase: Phase,
    score: u32,
    lines: u32,
    /// Successful spawns, including the first piece.
    pieces_spawned: u32,
    /// Last merge event (consumed by observers).
    last_event: Option<CoreLastEvent>,
}

impl Session<RandomPieces> {
    /// Start a session with a seeded random piece source
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomPieces::new(seed))
    }
}

impl<S: PieceSource> Session<S> {
    /// Start a session on an empty board and spawn the first piece
    pub fn new(source: S) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// Start a session on a prepared board and spawn the first piece
    ///
    /// If the first piece does not fit the session is over immediately.
    pub fn with_board(board: Board, source: S) -> Self {
        let mut session = Self {
            board,
            active: None,
            source,
            phase: Phase::Falling,
            score: 0,
            lines: 0,
            pieces_spawned: 0,
            last_event: None,
        };
        session.spawn_piece();
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Take the last merge event, if any.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_grid();
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance one gravity step and report the resulting state.
    ///
    /// A piece that cannot fall is merged, full rows are cleared and the
    /// next piece is spawned. Does nothing once the game is over.
    pub fn tick(&mut self) -> GameSnapshot {
        if !self.is_game_over() {
            self.step_down();
        }
        self.snapshot()
    }

    /// Apply one player action. Actions that do not fit are dropped.
    pub fn handle_input(&mut self, action: GameAction) {
        if self.is_game_over() {
            return;
        }
        match action {
            GameAction::RotateCw => {
                self.try_rotate();
            }
            GameAction::MoveLeft => {
                self.try_move(-1, 0);
            }
            GameAction::MoveRight => {
                self.try_move(1, 0);
            }
            GameAction::SoftDrop => self.step_down(),
        }
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if moved.fits(&self.board) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    /// Rotate clockwise in place; no kicks.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = ActivePiece {
            shape: rotate_clockwise(&active.shape),
            ..active
        };
        if rotated.fits(&self.board) {
            self.active = Some(rotated);
            return true;
        }
        false
    }

    fn step_down(&mut self) {
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
    }

    /// Merge the active piece, clear full rows and spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active.shape, active.x, active.y);

        let cleared = self.board.clear_full_lines().len() as u32;
        let line_clear_score = cleared * LINE_CLEAR_BONUS;
        self.lines += cleared;
        self.score += line_clear_score;
        self.last_event = Some(CoreLastEvent {
            lines_cleared: cleared,
            line_clear_score,
        });

        self.spawn_piece();
    }

    /// Spawn a new piece from the source
    fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.source.next_piece());

        if !piece.fits(&self.board) {
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
