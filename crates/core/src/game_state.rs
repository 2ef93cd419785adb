//! Game state module - manages the complete game session
//!
//! This module ties together all core components: board, pieces, hand, dealer, and
//! scoring. One call to [`GameState::place`] runs a full turn: placement, line
//! clears, combo and score update, hand refill, and game-over detection.
//!
//! The board is replaced wholesale on every turn; the [`TurnOutcome`] carries the
//! boards before and after so presentation code can diff or undo.

use crate::board::Board;
use crate::hand::Hand;
use crate::pieces::{Piece, PieceCells};
use crate::placement::{
    apply_line_clears, apply_placement, can_place_piece, detect_line_clears,
    get_potential_line_clear, is_game_over, ClearResult, LineClears,
};
use crate::rng::HandDealer;
use crate::scoring::{calculate_turn_score, ScoreResult};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Everything a single accepted turn produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub slot: usize,
    pub piece: Piece,
    pub anchor: Position,
    /// Cells the piece now covers (before any clears)
    pub placed_cells: PieceCells,
    pub line_clears: LineClears,
    /// Removed cells with their pre-clear colors
    pub cleared: ClearResult,
    pub score: ScoreResult,
    pub perfect_clear: bool,
    pub board_before: Board,
    pub board_after_placement: Board,
    /// A fresh hand was dealt because this turn used the last slot
    pub dealt_new_hand: bool,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    hand: Hand,
    dealer: HandDealer,
    /// Dealer state the current episode started from.
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Last accepted turn (consumed by observers).
    last_event: Option<TurnEvent>,
    score: u32,
    combo: u32,
    max_combo: u32,
    lines: u32,
    turns: u32,
    perfect_clears: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and deal the first hand
    pub fn new(seed: u32) -> Self {
        let mut dealer = HandDealer::new(seed);
        let board = Board::new();
        let hand = dealer.deal_for(&board);

        Self {
            board,
            hand,
            dealer,
            seed,
            episode_id: 0,
            last_event: None,
            score: 0,
            combo: 0,
            max_combo: 0,
            lines: 0,
            turns: 0,
            perfect_clears: 0,
            game_over: is_game_over(&board, &hand),
        }
    }

    /// Build a session around an existing board and hand (puzzles, tests, replays).
    pub fn from_parts(board: Board, hand: Hand, seed: u32) -> Self {
        let mut state = Self::new(seed);
        state.board = board;
        state.hand = if hand.is_exhausted() {
            state.dealer.deal_for(&board)
        } else {
            hand
        };
        state.game_over = is_game_over(&state.board, &state.hand);
        state
    }

    /// Start a new episode, continuing the dealer's random sequence
    pub fn restart(&mut self) {
        let seed = self.dealer.seed();
        let episode_id = self.episode_id.wrapping_add(1);
        *self = Self::new(seed);
        self.episode_id = episode_id;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Total lines cleared this episode
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Pieces placed this episode
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn perfect_clears(&self) -> u32 {
        self.perfect_clears
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Board is crowded but the game is still going
    pub fn is_danger(&self) -> bool {
        !self.game_over && self.board.filled_count() >= DANGER_FILL_CELLS
    }

    /// Check a placement without committing it
    pub fn can_place(&self, slot: usize, row: i8, col: i8) -> bool {
        !self.game_over
            && self
                .hand
                .get(slot)
                .is_some_and(|piece| can_place_piece(&self.board, piece, row, col))
    }

    /// Hover preview: lines the piece in `slot` would complete at (row, col).
    ///
    /// None if the slot is empty or out of range.
    pub fn preview(&self, slot: usize, row: i8, col: i8) -> Option<LineClears> {
        let piece = self.hand.get(slot)?;
        Some(get_potential_line_clear(&self.board, piece, row, col))
    }

    /// Place the piece in `slot` with its anchor at (row, col) and run the turn.
    ///
    /// Returns None and leaves the state untouched when the game is over, the slot
    /// is empty or out of range, or the piece does not fit.
    pub fn place(&mut self, slot: usize, row: i8, col: i8) -> Option<TurnOutcome> {
        if self.game_over {
            return None;
        }
        let piece = *self.hand.get(slot)?;
        if !can_place_piece(&self.board, &piece, row, col) {
            return None;
        }

        let board_before = self.board;
        let placement = apply_placement(&board_before, &piece, row, col);
        let line_clears = detect_line_clears(&placement.board);
        let cleared = apply_line_clears(&placement.board, &line_clears.rows, &line_clears.cols);
        let perfect_clear = !line_clears.is_empty() && cleared.board.is_empty();

        let score = calculate_turn_score(
            placement.placed_cells.len(),
            line_clears.count(),
            self.combo,
            perfect_clear,
        );

        self.board = cleared.board;
        self.score = self.score.saturating_add(score.total);
        self.combo = score.combo;
        self.max_combo = self.max_combo.max(self.combo);
        self.lines = self.lines.saturating_add(line_clears.count() as u32);
        self.turns = self.turns.wrapping_add(1);
        if perfect_clear {
            self.perfect_clears += 1;
        }

        self.hand.take(slot);
        let dealt_new_hand = self.hand.is_exhausted();
        if dealt_new_hand {
            self.hand = self.dealer.deal_for(&self.board);
        }
        self.game_over = is_game_over(&self.board, &self.hand);

        self.last_event = Some(TurnEvent {
            piece: piece.kind,
            slot: slot as u8,
            cells_placed: placement.placed_cells.len() as u32,
            lines_cleared: line_clears.count() as u32,
            score_delta: score.total,
            combo: self.combo,
            perfect_clear,
        });

        Some(TurnOutcome {
            slot,
            piece,
            anchor: Position::new(row, col),
            placed_cells: placement.placed_cells,
            line_clears,
            cleared,
            score,
            perfect_clear,
            board_before,
            board_after_placement: placement.board,
            dealt_new_hand,
            game_over: self.game_over,
        })
    }

    /// Take and clear the last turn event.
    pub fn take_last_event(&mut self) -> Option<TurnEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.hand = self.hand.kinds();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.score = self.score;
        out.combo = self.combo;
        out.max_combo = self.max_combo;
        out.lines = self.lines;
        out.turns = self.turns;
        out.perfect_clears = self.perfect_clears;
        out.danger = self.is_danger();
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece;

    fn dots() -> Hand {
        Hand::new([piece(PieceKind::Dot); HAND_SIZE])
    }

    #[test]
    fn new_game_is_playable() {
        let gs = GameState::new(1);
        assert!(gs.board().is_empty());
        assert_eq!(gs.hand().remaining(), HAND_SIZE);
        assert!(!gs.game_over());
        assert!(!gs.is_danger());
        assert_eq!(gs.score(), 0);
    }

    fn board_where(filled: impl Fn(i8, i8) -> bool) -> Board {
        let mut cells = Vec::new();
        for r in 0..GRID_SIZE as i8 {
            for c in 0..GRID_SIZE as i8 {
                if filled(r, c) {
                    cells.push(CellPlacement::new(r, c, Color::Blue));
                }
            }
        }
        Board::new().with_cells_set(&cells)
    }

    #[test]
    fn danger_at_threshold() {
        // Two free cells per row and column, no full line.
        let board = board_where(|r, c| (c - r).rem_euclid(4) != 0);
        assert_eq!(board.filled_count(), DANGER_FILL_CELLS);

        let gs = GameState::from_parts(board, dots(), 1);
        assert!(!gs.game_over());
        assert!(gs.is_danger());
        assert!(gs.snapshot().danger);
    }

    #[test]
    fn no_danger_below_threshold() {
        let board = board_where(|r, c| (c - r).rem_euclid(4) != 0 && (r, c) != (0, 1));
        assert_eq!(board.filled_count(), DANGER_FILL_CELLS - 1);

        let gs = GameState::from_parts(board, dots(), 1);
        assert!(!gs.is_danger());
        assert!(!gs.snapshot().danger);
    }

    #[test]
    fn no_danger_once_game_over() {
        // Every free cell is isolated, so a 2x2 square never fits.
        let board = board_where(|r, c| r % 2 == 1 || c % 2 == 1);
        assert!(board.filled_count() >= DANGER_FILL_CELLS);

        let gs = GameState::from_parts(board, Hand::new([piece(PieceKind::Square2); HAND_SIZE]), 1);
        assert!(gs.game_over());
        assert!(!gs.is_danger());
        assert!(!gs.snapshot().danger);
    }

    #[test]
    fn rejected_place_changes_nothing() {
        let mut gs = GameState::from_parts(Board::new(), dots(), 1);
        assert!(gs.place(0, 0, 0).is_some());
        let before = gs.clone();

        // Occupied, out of bounds, used slot, bad slot.
        assert!(gs.place(1, 0, 0).is_none());
        assert!(gs.place(1, 8, 0).is_none());
        assert!(gs.place(0, 1, 1).is_none());
        assert!(gs.place(HAND_SIZE, 1, 1).is_none());

        assert_eq!(gs.board(), before.board());
        assert_eq!(gs.score(), before.score());
        assert_eq!(gs.hand(), before.hand());
    }

    #[test]
    fn hand_refills_after_last_slot() {
        let mut gs = GameState::from_parts(Board::new(), dots(), 1);
        assert!(!gs.place(0, 0, 0).unwrap().dealt_new_hand);
        assert!(!gs.place(1, 0, 1).unwrap().dealt_new_hand);
        let last = gs.place(2, 0, 2).unwrap();
        assert!(last.dealt_new_hand);
        assert_eq!(gs.hand().remaining(), HAND_SIZE);
    }

    #[test]
    fn last_event_is_consumed_once() {
        let mut gs = GameState::from_parts(Board::new(), dots(), 1);
        gs.place(0, 3, 3).unwrap();
        let ev = gs.take_last_event().unwrap();
        assert_eq!(ev.piece, PieceKind::Dot);
        assert_eq!(ev.cells_placed, 1);
        assert_eq!(ev.score_delta, CELL_POINTS);
        assert!(gs.take_last_event().is_none());
    }

    #[test]
    fn restart_bumps_episode_and_resets_counters() {
        let mut gs = GameState::from_parts(Board::new(), dots(), 1);
        gs.place(0, 0, 0).unwrap();
        gs.restart();
        assert_eq!(gs.episode_id(), 1);
        assert_eq!(gs.score(), 0);
        assert_eq!(gs.turns(), 0);
        assert!(gs.board().is_empty());
    }
}
