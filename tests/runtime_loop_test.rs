use std::cell::RefCell;
use std::time::Duration;

use tokio::sync::mpsc;

use term_tetris::core::{ScriptedPieces, Session};
use term_tetris::journal::{JournalRecord, RecordSink};
use term_tetris::runtime::{
    drive, spawn_gravity, spawn_input_pump, EventSource, LoopEvent, TermEvent, EVENT_QUEUE_DEPTH,
};
use term_tetris::types::{GameAction, PieceKind};

#[derive(Default)]
struct Recorded(RefCell<Vec<JournalRecord>>);

impl RecordSink for Recorded {
    fn record(&self, rec: JournalRecord) {
        self.0.borrow_mut().push(rec);
    }
}

fn queue(events: impl IntoIterator<Item = LoopEvent>) -> mpsc::Receiver<LoopEvent> {
    let events: Vec<_> = events.into_iter().collect();
    let (tx, rx) = mpsc::channel(events.len().max(1));
    for ev in events {
        tx.try_send(ev).unwrap();
    }
    rx
}

#[tokio::test]
async fn gravity_only_game_stacks_until_spawn_is_blocked() {
    // Nine O pieces pile up in columns 4-5; the tenth has nowhere to go.
    let mut session = Session::new(ScriptedPieces::repeat(PieceKind::O));
    let mut rx = queue(std::iter::repeat(LoopEvent::Gravity).take(200));
    let journal = Recorded::default();

    let mut frames = 0;
    let outcome = drive(&mut session, &mut rx, &journal, |_| {
        frames += 1;
        Ok(())
    })
    .await
    .unwrap();

    assert!(!outcome.abandoned);
    assert_eq!(outcome.pieces, 9);
    assert_eq!(outcome.score, 0);
    assert!(session.is_game_over());
    // Initial frame plus 90 gravity steps.
    assert_eq!(frames, 91);

    let records = journal.0.into_inner();
    let spawns = records
        .iter()
        .filter(|r| matches!(r, JournalRecord::Spawn { .. }))
        .count();
    let locks = records
        .iter()
        .filter(|r| matches!(r, JournalRecord::Lock { .. }))
        .count();
    assert_eq!(spawns, 9);
    assert_eq!(locks, 9);
    assert_eq!(
        records.last(),
        Some(&JournalRecord::GameOver {
            score: 0,
            lines: 0,
            pieces: 9,
            abandoned: false,
        })
    );
}

#[tokio::test]
async fn inputs_and_gravity_interleave_in_arrival_order() {
    let mut session = Session::new(ScriptedPieces::repeat(PieceKind::I));
    let mut events = vec![
        LoopEvent::Input(GameAction::MoveLeft),
        LoopEvent::Input(GameAction::MoveLeft),
        LoopEvent::Input(GameAction::MoveLeft),
        LoopEvent::Gravity,
        LoopEvent::Input(GameAction::SoftDrop),
    ];
    events.extend(std::iter::repeat(LoopEvent::Input(GameAction::SoftDrop)).take(17));
    events.push(LoopEvent::Quit);
    let mut rx = queue(events);

    let mut last = None;
    let outcome = drive(&mut session, &mut rx, &None::<Recorded>, |snap| {
        last = Some(*snap);
        Ok(())
    })
    .await
    .unwrap();

    // The I landed flat along the left half of the bottom row.
    assert!(outcome.abandoned);
    assert_eq!(outcome.pieces, 2);
    let snap = last.unwrap();
    assert_eq!(snap.board[19][..4], [true; 4]);
    assert_eq!(snap.board[19][4..], [false; 6]);
}

#[tokio::test]
async fn redraw_renders_without_changing_state() {
    let mut session = Session::new(ScriptedPieces::repeat(PieceKind::T));
    let before = session.snapshot();
    let mut rx = queue([LoopEvent::Redraw, LoopEvent::Redraw, LoopEvent::Quit]);

    let mut frames = Vec::new();
    drive(&mut session, &mut rx, &None::<Recorded>, |snap| {
        frames.push(*snap);
        Ok(())
    })
    .await
    .unwrap();

    assert_eq!(frames, vec![before; 3]);
}

#[tokio::test]
async fn clearing_a_line_is_journaled_with_its_score() {
    let mut board = term_tetris::core::Board::new();
    board.fill_row(19);
    for x in 0..4 {
        board.set(x, 19, false);
    }
    let mut session = Session::with_board(board, ScriptedPieces::repeat(PieceKind::I));
    let mut moves = vec![LoopEvent::Input(GameAction::MoveLeft); 3];
    moves.extend(std::iter::repeat(LoopEvent::Gravity).take(19));
    moves.push(LoopEvent::Quit);
    let mut rx = queue(moves);
    let journal = Recorded::default();

    let outcome = drive(&mut session, &mut rx, &journal, |_| Ok(())).await.unwrap();

    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.lines, 1);
    assert!(journal.0.borrow().contains(&JournalRecord::Lock {
        lines_cleared: 1,
        line_clear_score: 100,
        score: 100,
    }));
}

struct DeadTerminal;

impl EventSource for DeadTerminal {
    fn poll_event(&mut self, _timeout: Duration) -> anyhow::Result<Option<TermEvent>> {
        anyhow::bail!("tty gone")
    }
}

#[tokio::test]
async fn input_failure_ends_the_game_while_gravity_runs() {
    let mut session = Session::new(ScriptedPieces::repeat(PieceKind::O));
    let (tx, mut rx) = mpsc::channel(EVENT_QUEUE_DEPTH);
    let gravity = spawn_gravity(tx.clone(), Duration::from_millis(5));
    let input = spawn_input_pump(tx, DeadTerminal);

    let mut frames = 0;
    let outcome = drive(&mut session, &mut rx, &None::<Recorded>, |_| {
        frames += 1;
        Ok(())
    })
    .await
    .unwrap();
    drop(rx);
    gravity.abort();

    assert!(outcome.abandoned);
    assert!(!session.is_game_over());
    assert!(frames < 10, "loop kept going for {frames} frames");

    let err = input.await.unwrap().unwrap_err();
    assert_eq!(err.to_string(), "tty gone");
}
