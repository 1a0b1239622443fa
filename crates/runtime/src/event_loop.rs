//! Single-consumer event loop.
//!
//! Gravity ticks and key presses arrive on one channel and are applied to
//! the session strictly one at a time. The loop is the only owner of the
//! session, so a gravity step can never interleave with a move or rotate.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::core::{GameSnapshot, PieceSource, Session};
use crate::journal::{JournalRecord, RecordSink};
use crate::types::GameAction;

/// Capacity of the shared event channel.
pub const EVENT_QUEUE_DEPTH: usize = 64;

/// How long the final frame stays up after game over if no key is pressed.
pub const GAME_OVER_HOLD: Duration = Duration::from_secs(3);

/// Messages consumed by [`drive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// One gravity step.
    Gravity,
    /// One player action.
    Input(GameAction),
    /// The terminal changed size; redraw without touching the session.
    Redraw,
    /// The player abandoned the session.
    Quit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    /// Ended by quitting (or losing every producer) rather than by game over.
    pub abandoned: bool,
}

/// Apply events to `session` until game over, `Quit`, or a closed channel.
///
/// `on_frame` is called with the initial state and after every applied
/// event; its errors abort the loop.
pub async fn drive<S, J, F>(
    session: &mut Session<S>,
    events: &mut mpsc::Receiver<LoopEvent>,
    journal: &J,
    mut on_frame: F,
) -> Result<Outcome>
where
    S: PieceSource,
    J: RecordSink,
    F: FnMut(&GameSnapshot) -> Result<()>,
{
    record_spawn(session, journal);
    on_frame(&session.snapshot())?;

    let mut abandoned = false;
    while !session.is_game_over() {
        let Some(event) = events.recv().await else {
            abandoned = true;
            break;
        };

        let spawned_before = session.pieces_spawned();
        let snap = match event {
            LoopEvent::Gravity => session.tick(),
            LoopEvent::Input(action) => {
                journal.record(JournalRecord::input(action));
                session.handle_input(action);
                session.snapshot()
            }
            LoopEvent::Redraw => session.snapshot(),
            LoopEvent::Quit => {
                abandoned = true;
                break;
            }
        };

        if let Some(lock) = session.take_last_event() {
            journal.record(JournalRecord::Lock {
                lines_cleared: lock.lines_cleared,
                line_clear_score: lock.line_clear_score,
                score: session.score(),
            });
        }
        if session.pieces_spawned() != spawned_before {
            record_spawn(session, journal);
        }

        on_frame(&snap)?;
    }

    let outcome = Outcome {
        score: session.score(),
        lines: session.lines(),
        pieces: session.pieces_spawned(),
        abandoned,
    };
    journal.record(JournalRecord::GameOver {
        score: outcome.score,
        lines: outcome.lines,
        pieces: outcome.pieces,
        abandoned,
    });
    Ok(outcome)
}

/// Keep the last frame on screen until a key arrives or `limit` passes.
///
/// Gravity and redraw events are discarded while waiting.
pub async fn hold_final_frame(events: &mut mpsc::Receiver<LoopEvent>, limit: Duration) {
    let wait_for_key = async {
        while let Some(event) = events.recv().await {
            if matches!(event, LoopEvent::Input(_) | LoopEvent::Quit) {
                break;
            }
        }
    };
    let _ = tokio::time::timeout(limit, wait_for_key).await;
}

fn record_spawn<S: PieceSource, J: RecordSink>(session: &Session<S>, journal: &J) {
    if let Some(active) = session.active() {
        journal.record(JournalRecord::spawn(active.kind, active.x, active.y));
    }
}
