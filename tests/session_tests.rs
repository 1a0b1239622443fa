//! Session tests - gravity, input, locking, scoring and game over

use proptest::prelude::*;
use term_tetris::core::{rotate_clockwise, shape_of, Board, Phase, ScriptedPieces, Session};
use term_tetris::types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

fn session_of(kind: PieceKind) -> Session<ScriptedPieces> {
    Session::new(ScriptedPieces::repeat(kind))
}

fn board_with_rows(rows: impl IntoIterator<Item = usize>) -> Board {
    let mut board = Board::new();
    for y in rows {
        board.fill_row(y);
    }
    board
}

fn occupied(board: &Board) -> Vec<(i8, i8)> {
    let mut out = Vec::new();
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            if board.is_occupied(x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn test_o_piece_falls_and_locks_on_floor() {
    let mut session = session_of(PieceKind::O);

    for _ in 0..17 {
        session.tick();
    }
    assert_eq!(session.active().unwrap().y, 17);
    assert_eq!(session.board().occupied_count(), 0);

    session.tick();
    assert_eq!(occupied(session.board()), vec![(4, 18), (5, 18), (4, 19), (5, 19)]);
    assert_eq!(session.score(), 0);
    assert_eq!(session.pieces_spawned(), 2);

    let next = session.active().unwrap();
    assert_eq!((next.x, next.y), (SPAWN_X, SPAWN_Y));
}

#[test]
fn test_soft_drop_matches_gravity() {
    let mut by_gravity = session_of(PieceKind::O);
    let mut by_drop = session_of(PieceKind::O);

    for _ in 0..18 {
        by_gravity.tick();
        by_drop.handle_input(GameAction::SoftDrop);
    }
    assert_eq!(by_gravity.snapshot(), by_drop.snapshot());
}

#[test]
fn test_tick_returns_current_snapshot() {
    let mut session = session_of(PieceKind::T);
    let snap = session.tick();
    assert_eq!(snap, session.snapshot());
    assert_eq!(snap.active.unwrap().y, 1);
    assert!(snap.playable());
}

#[test]
fn test_two_line_clear_scores_200() {
    let mut board = board_with_rows([18, 19]);
    for y in [18, 19] {
        board.set(4, y, false);
        board.set(5, y, false);
    }
    let mut session = Session::with_board(board, ScriptedPieces::repeat(PieceKind::O));

    for _ in 0..18 {
        session.tick();
    }
    assert_eq!(session.score(), 200);
    assert_eq!(session.lines(), 2);
    assert_eq!(session.board().occupied_count(), 0);
    assert!(!session.is_game_over());
}

#[test]
fn test_single_line_clear_shifts_stack() {
    // Bottom row full except cols 4-5, one extra block above it.
    let mut board = board_with_rows([19]);
    board.set(4, 19, false);
    board.set(5, 19, false);
    board.set(0, 18, true);
    let mut session = Session::with_board(board, ScriptedPieces::repeat(PieceKind::O));

    for _ in 0..18 {
        session.tick();
    }
    assert_eq!(session.score(), 100);
    assert_eq!(session.lines(), 1);
    // Upper half of the O and the stray block both moved down one row.
    assert_eq!(occupied(session.board()), vec![(0, 19), (4, 19), (5, 19)]);
}

#[test]
fn test_blocked_spawn_ends_game_immediately() {
    let session = Session::with_board(board_with_rows(0..4), ScriptedPieces::repeat(PieceKind::T));
    assert!(session.is_game_over());
    assert_eq!(session.phase(), Phase::GameOver);
    assert!(session.active().is_none());
    assert_eq!(session.pieces_spawned(), 0);
}

#[test]
fn test_full_row_one_blocks_every_spawn() {
    for kind in PieceKind::ALL {
        let session = Session::with_board(board_with_rows([1]), ScriptedPieces::repeat(kind));
        assert!(session.is_game_over(), "{:?}", kind);
    }
}

#[test]
fn test_stack_below_spawn_area_keeps_playing() {
    // Column 0 stays open so nothing clears when the O locks.
    let mut board = board_with_rows(3..BOARD_HEIGHT as usize);
    for y in 3..BOARD_HEIGHT as i8 {
        board.set(0, y, false);
    }
    let mut session = Session::with_board(board, ScriptedPieces::repeat(PieceKind::O));
    assert!(!session.is_game_over());

    // The O rests on row 3 immediately and locks in rows 1-2.
    session.tick();
    assert_eq!(session.lines(), 0);
    assert!(session.board().is_occupied(4, 1));
    assert!(session.board().is_occupied(5, 2));

    // Its successor overlaps it at the spawn position.
    assert!(session.is_game_over());
    assert!(session.snapshot().game_over);
}

#[test]
fn test_game_over_ignores_ticks_and_input() {
    let mut session = Session::with_board(board_with_rows(0..4), ScriptedPieces::repeat(PieceKind::I));
    let before = session.snapshot();

    session.tick();
    for action in [
        GameAction::RotateCw,
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
    ] {
        session.handle_input(action);
    }
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_move_left_stops_at_wall() {
    let mut session = session_of(PieceKind::O);
    for _ in 0..10 {
        session.handle_input(GameAction::MoveLeft);
    }
    // O's cells start at grid column 1.
    assert_eq!(session.active().unwrap().x, -1);
}

#[test]
fn test_move_right_stops_at_wall() {
    let mut session = session_of(PieceKind::I);
    for _ in 0..10 {
        session.handle_input(GameAction::MoveRight);
    }
    assert_eq!(session.active().unwrap().x, 6);
}

#[test]
fn test_rotation_against_wall_is_discarded() {
    let mut session = session_of(PieceKind::I);
    session.handle_input(GameAction::RotateCw);
    for _ in 0..10 {
        session.handle_input(GameAction::MoveRight);
    }
    let vertical = session.active().unwrap();
    assert_eq!(vertical.x, 7);
    assert_eq!(vertical.shape, rotate_clockwise(&shape_of(PieceKind::I)));

    // Back to horizontal would reach column 10.
    session.handle_input(GameAction::RotateCw);
    assert_eq!(session.active().unwrap(), vertical);
}

#[test]
fn test_move_blocked_by_stack() {
    let mut board = Board::new();
    board.set(3, 1, true);
    let mut session = Session::with_board(board, ScriptedPieces::repeat(PieceKind::O));

    session.handle_input(GameAction::MoveLeft);
    assert_eq!(session.active().unwrap().x, SPAWN_X);
}

#[test]
fn test_scripted_sequence_cycles() {
    let mut session = Session::new(ScriptedPieces::new(vec![PieceKind::I, PieceKind::O]));
    assert_eq!(session.active().unwrap().kind, PieceKind::I);

    // The flat I drops to row 19 (its cells sit in grid row 1).
    for _ in 0..19 {
        session.tick();
    }
    assert_eq!(session.active().unwrap().kind, PieceKind::O);
}

#[test]
fn test_seeded_sessions_are_deterministic() {
    let mut a = Session::with_seed(7);
    let mut b = Session::with_seed(7);
    for _ in 0..400 {
        assert_eq!(a.tick(), b.tick());
    }
    assert_eq!(a.pieces_spawned(), b.pieces_spawned());
}

fn any_action() -> impl Strategy<Value = Option<GameAction>> {
    prop_oneof![
        Just(None),
        Just(Some(GameAction::RotateCw)),
        Just(Some(GameAction::MoveLeft)),
        Just(Some(GameAction::MoveRight)),
        Just(Some(GameAction::SoftDrop)),
    ]
}

proptest! {
    #[test]
    fn prop_session_invariants_hold(seed in any::<u64>(), actions in proptest::collection::vec(any_action(), 0..400)) {
        let mut session = Session::with_seed(seed);
        let mut last_score = 0;

        for action in actions {
            match action {
                None => {
                    session.tick();
                }
                Some(action) => session.handle_input(action),
            }

            prop_assert_eq!(session.score(), session.lines() * 100);
            prop_assert!(session.score() >= last_score);
            last_score = session.score();

            for y in 0..BOARD_HEIGHT as usize {
                prop_assert!(!session.board().is_row_full(y));
            }
            match session.active() {
                Some(active) => prop_assert!(active.fits(session.board())),
                None => prop_assert!(session.is_game_over()),
            }
        }
    }
}
