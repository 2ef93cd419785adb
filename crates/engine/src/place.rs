use tracing::{debug, info};

use crate::core::{GameState, TurnOutcome};
use crate::types::{Position, HAND_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    GameOver,
    SlotOutOfRange,
    EmptySlot,
    OutOfBounds,
    Blocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::GameOver => "game_over",
            PlaceError::SlotOutOfRange | PlaceError::EmptySlot => "invalid_slot",
            PlaceError::OutOfBounds | PlaceError::Blocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::GameOver => "game is over",
            PlaceError::SlotOutOfRange => "hand slot does not exist",
            PlaceError::EmptySlot => "hand slot was already used",
            PlaceError::OutOfBounds => "piece would extend past the board edge",
            PlaceError::Blocked => "piece would overlap a filled cell",
        }
    }
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Work out why the piece in `slot` cannot go at (row, col), if it cannot.
pub fn check_place(state: &GameState, slot: usize, row: i8, col: i8) -> Result<(), PlaceError> {
    if state.game_over() {
        return Err(PlaceError::GameOver);
    }
    if slot >= HAND_SIZE {
        return Err(PlaceError::SlotOutOfRange);
    }
    let Some(piece) = state.hand().get(slot) else {
        return Err(PlaceError::EmptySlot);
    };

    let mut blocked = false;
    for (dr, dc) in piece.offsets() {
        let pos = Position::new(row.saturating_add(dr), col.saturating_add(dc));
        if !pos.in_bounds() {
            return Err(PlaceError::OutOfBounds);
        }
        if state.board().is_occupied(pos.row, pos.col) {
            blocked = true;
        }
    }
    if blocked {
        return Err(PlaceError::Blocked);
    }
    Ok(())
}

/// Place the piece in `slot` at (row, col), reporting why when it is rejected.
///
/// A rejected placement leaves `state` untouched.
pub fn apply_place(
    state: &mut GameState,
    slot: usize,
    row: i8,
    col: i8,
) -> Result<TurnOutcome, PlaceError> {
    if let Err(err) = check_place(state, slot, row, col) {
        debug!(slot, row, col, code = err.code(), "placement rejected: {}", err.message());
        return Err(err);
    }

    let Some(outcome) = state.place(slot, row, col) else {
        // check_place mirrors GameState::place; reaching here means they disagree.
        debug!(slot, row, col, "placement rejected by session");
        return Err(PlaceError::Blocked);
    };

    if !outcome.line_clears.is_empty() {
        debug!(
            rows = ?outcome.line_clears.rows.as_slice(),
            cols = ?outcome.line_clears.cols.as_slice(),
            combo = outcome.score.combo,
            delta = outcome.score.total,
            perfect = outcome.perfect_clear,
            "lines cleared"
        );
    }
    if outcome.game_over {
        info!(
            score = state.score(),
            lines = state.lines(),
            turns = state.turns(),
            "game over"
        );
    }

    Ok(outcome)
}
