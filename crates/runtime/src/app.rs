//! Terminal game session: wires config, drivers, loop and renderer together.

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::config::GameConfig;
use crate::core::{RandomPieces, Session};
use crate::drivers::{spawn_gravity, spawn_input_pump, CrosstermEvents};
use crate::event_loop::{drive, hold_final_frame, Outcome, EVENT_QUEUE_DEPTH, GAME_OVER_HOLD};
use crate::journal::{Journal, JournalRecord, RecordSink};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Play one game on the controlling terminal.
///
/// The terminal is restored before this returns, on success and on error.
pub async fn run(config: GameConfig) -> Result<Outcome> {
    let journal = match config.log_path.as_deref() {
        Some(path) => Some(Journal::open(path).await?),
        None => None,
    };
    journal.record(JournalRecord::Start {
        seed: config.seed,
        gravity_ms: config.gravity_ms,
    });

    let source = match config.seed {
        Some(seed) => RandomPieces::new(seed),
        None => RandomPieces::from_entropy(),
    };
    let mut session = Session::new(source);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let (tx, mut rx) = mpsc::channel(EVENT_QUEUE_DEPTH);
    let gravity = spawn_gravity(tx.clone(), config.gravity());
    let input = spawn_input_pump(tx, CrosstermEvents);

    let view = GameView::new(config.cell_width);
    let mut fb = FrameBuffer::new(0, 0);
    let result = drive(&mut session, &mut rx, &journal, |snap| {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)
    })
    .await;

    if matches!(result, Ok(Outcome { abandoned: false, .. })) {
        hold_final_frame(&mut rx, GAME_OVER_HOLD).await;
    }

    // Dropping the receiver stops both producers.
    drop(rx);
    gravity.abort();
    let restored = term.exit();
    let pumped = input.await.context("input pump panicked")?;

    if let Some(journal) = journal {
        journal.close().await?;
    }

    restored?;
    let outcome = result?;
    pumped.context("reading terminal input")?;
    Ok(outcome)
}
