//! Integration tests - full turns through the session and the engine

use perfect_fit::autoplay::play_game;
use perfect_fit::core::{piece, Board, GameState, Hand};
use perfect_fit::engine::{apply_place, PlaceError};
use perfect_fit::types::{CellPlacement, Color, PieceKind, CELL_POINTS, HAND_SIZE, LINE_POINTS};

fn dots() -> Hand {
    Hand::new([piece(PieceKind::Dot); HAND_SIZE])
}

/// Rows 0..3 filled except column 7, plus one stray cell so clears never empty the board.
fn staircase_board() -> Board {
    let mut cells = Vec::new();
    for r in 0..3 {
        for c in 0..7 {
            cells.push(CellPlacement::new(r, c, Color::Indigo));
        }
    }
    cells.push(CellPlacement::new(7, 0, Color::Red));
    Board::new().with_cells_set(&cells)
}

// ============== Combo ==============

#[test]
fn test_combo_builds_and_resets() {
    let mut gs = GameState::from_parts(staircase_board(), dots(), 3);

    let t1 = apply_place(&mut gs, 0, 0, 7).unwrap();
    assert_eq!(t1.score.combo, 1);
    assert_eq!(t1.score.total, CELL_POINTS + 15);

    let t2 = apply_place(&mut gs, 1, 1, 7).unwrap();
    assert_eq!(t2.score.combo, 2);
    assert_eq!(t2.score.total, CELL_POINTS + 20);

    let t3 = apply_place(&mut gs, 2, 2, 7).unwrap();
    assert_eq!(t3.score.combo, 3);
    assert_eq!(t3.score.total, CELL_POINTS + 30);
    assert!(!t3.perfect_clear);
    assert!(t3.dealt_new_hand);

    assert_eq!(gs.combo(), 3);
    assert_eq!(gs.max_combo(), 3);
    assert_eq!(gs.lines(), 3);
    assert_eq!(gs.board().filled_count(), 1);

    // Only (7, 0) is filled: nothing the new hand places at (2, 2) can finish a line.
    let t4 = apply_place(&mut gs, 0, 2, 2).unwrap();
    assert!(t4.line_clears.is_empty());
    assert_eq!(gs.combo(), 0);
    assert_eq!(gs.max_combo(), 3);
}

#[test]
fn test_perfect_clear_awards_bonus() {
    let cells: Vec<CellPlacement> = (0..7).map(|c| CellPlacement::new(4, c, Color::Teal)).collect();
    let board = Board::new().with_cells_set(&cells);
    let mut gs = GameState::from_parts(board, dots(), 1);

    let outcome = apply_place(&mut gs, 0, 4, 7).unwrap();
    assert!(outcome.perfect_clear);
    assert_eq!(outcome.score.perfect_clear_bonus, 300);
    assert!(gs.board().is_empty());
    assert_eq!(gs.perfect_clears(), 1);
    assert!(gs.score() >= LINE_POINTS);
}

// ============== Rejections ==============

#[test]
fn test_rejected_place_reports_reason() {
    let board = Board::new().with_cells_set(&[CellPlacement::new(0, 0, Color::Red)]);
    let mut gs = GameState::from_parts(board, dots(), 1);

    assert_eq!(apply_place(&mut gs, 0, 0, 0).unwrap_err(), PlaceError::Blocked);
    assert_eq!(apply_place(&mut gs, 0, 8, 0).unwrap_err(), PlaceError::OutOfBounds);
    assert_eq!(apply_place(&mut gs, 5, 1, 1).unwrap_err(), PlaceError::SlotOutOfRange);
    assert_eq!(gs.turns(), 0);
    assert_eq!(gs.score(), 0);
}

#[test]
fn test_game_over_blocks_placement() {
    let mut cells = Vec::new();
    for r in 0..8 {
        for c in 0..8 {
            if (r + c) % 2 == 0 {
                cells.push(CellPlacement::new(r, c, Color::Green));
            }
        }
    }
    let board = Board::new().with_cells_set(&cells);
    let mut gs = GameState::from_parts(board, Hand::new([piece(PieceKind::Square2); HAND_SIZE]), 1);

    assert!(gs.game_over());
    assert_eq!(apply_place(&mut gs, 0, 0, 1).unwrap_err(), PlaceError::GameOver);
}

// ============== Determinism ==============

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(12345);
    let mut b = GameState::new(12345);
    assert_eq!(a.hand(), b.hand());

    let sa = play_game(&mut a, 200, |_| Ok(())).unwrap();
    let sb = play_game(&mut b, 200, |_| Ok(())).unwrap();
    assert_eq!(sa, sb);
    assert_eq!(a.board(), b.board());
}

// ============== Autoplay ==============

#[test]
fn test_autoplay_emits_one_observation_per_turn() {
    let mut gs = GameState::new(99);
    let mut seqs = Vec::new();
    let summary = play_game(&mut gs, 50, |obs| {
        assert!(obs.last_event.is_some());
        seqs.push(obs.seq);
        Ok(())
    })
    .unwrap();

    assert_eq!(seqs.len() as u32, summary.turns);
    assert!(seqs.iter().enumerate().all(|(i, &s)| s == i as u64 + 1));
    assert!(summary.turns <= 50);
    assert!(summary.game_over || summary.turns == 50);
    assert!(summary.score >= summary.turns * CELL_POINTS);
}

#[test]
fn test_autoplay_stops_on_callback_error() {
    let mut gs = GameState::new(5);
    let result = play_game(&mut gs, 100, |_| anyhow::bail!("sink closed"));
    assert!(result.is_err());
    assert_eq!(gs.turns(), 1);
}
