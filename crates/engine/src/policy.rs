//! Greedy placement policy
//!
//! Scores every legal (slot, anchor) pair one turn ahead and returns the best. Used for
//! in-game hints and by the headless autoplay runner.
//!
//! The evaluation prefers, in order of weight:
//! - clearing lines (and above all emptying the board),
//! - leaving rows and columns close to completion,
//! - not leaving single empty cells walled in on all sides, which only the dot fits.

use crate::core::{
    apply_line_clears, apply_placement, detect_line_clears, valid_anchors, Board, GameState,
};
use crate::types::{Position, GRID_SIZE};

const LINE_WEIGHT: i64 = 1000;
const PERFECT_CLEAR_WEIGHT: i64 = 5000;
const HOLE_PENALTY: i64 = 40;

/// A legal move together with its evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub slot: usize,
    pub anchor: Position,
    pub lines: usize,
    pub evaluation: i64,
}

/// Every legal (slot, anchor) pair, slot-major then row-major
pub fn legal_moves(state: &GameState) -> Vec<(usize, Position)> {
    if state.game_over() {
        return Vec::new();
    }
    let board = state.board();
    state
        .hand()
        .iter()
        .flat_map(|(slot, piece)| valid_anchors(board, piece).map(move |p| (slot, p)))
        .collect()
}

/// Best move for the current hand, or None if nothing fits.
///
/// Ties go to the lowest slot, then the lowest row, then the lowest column.
pub fn best_placement(state: &GameState) -> Option<Candidate> {
    if state.game_over() {
        return None;
    }
    let board = state.board();
    let mut best: Option<Candidate> = None;

    for (slot, piece) in state.hand().iter() {
        for anchor in valid_anchors(board, piece) {
            let placed = apply_placement(board, piece, anchor.row, anchor.col);
            let clears = detect_line_clears(&placed.board);
            let after = apply_line_clears(&placed.board, &clears.rows, &clears.cols).board;

            let mut evaluation = clears.count() as i64 * LINE_WEIGHT + evaluate_board(&after);
            if !clears.is_empty() && after.is_empty() {
                evaluation += PERFECT_CLEAR_WEIGHT;
            }

            let candidate = Candidate {
                slot,
                anchor,
                lines: clears.count(),
                evaluation,
            };
            if best.map_or(true, |b| candidate.evaluation > b.evaluation) {
                best = Some(candidate);
            }
        }
    }

    best
}

/// Static evaluation of a board with no pending clears
pub fn evaluate_board(board: &Board) -> i64 {
    let mut value: i64 = 0;
    for i in 0..GRID_SIZE as i8 {
        let row = board.row_fill(i) as i64;
        let col = board.col_fill(i) as i64;
        value += row * row + col * col;
    }
    value - isolated_holes(board) as i64 * HOLE_PENALTY
}

/// Empty cells whose four neighbours are all filled or off the board
pub fn isolated_holes(board: &Board) -> usize {
    let size = GRID_SIZE as i8;
    let mut holes = 0;
    for row in 0..size {
        for col in 0..size {
            if !board.is_free(row, col) {
                continue;
            }
            let walled = [(-1, 0), (1, 0), (0, -1), (0, 1)]
                .iter()
                .all(|&(dr, dc)| !board.is_free(row + dr, col + dc));
            if walled {
                holes += 1;
            }
        }
    }
    holes
}
