//! Scoring module - placement points, line clears and combo multipliers
//!
//! A turn scores in three parts:
//! - Placement: `CELL_POINTS` per placed cell, never multiplied.
//! - Lines: `LINE_POINTS` per cleared row or column, scaled by the combo multiplier
//!   in effect after this turn's combo update.
//! - Perfect clear: a flat `PERFECT_CLEAR_BONUS` when the clear empties the board.
//!
//! The combo counts consecutive turns that clear at least one line and drops to zero
//! on a turn without a clear. Multipliers are kept in tenths so all math is integer.

use crate::types::{
    CELL_POINTS, COMBO_MULTIPLIER_TENTHS, COMBO_STEP_TENTHS, LINE_POINTS, PERFECT_CLEAR_BONUS,
};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points for the cells placed this turn.
    pub placement_score: u32,
    /// Line points after the combo multiplier.
    pub line_clear_score: u32,
    pub perfect_clear_bonus: u32,
    /// Combo after this turn.
    pub combo: u32,
    /// Multiplier applied to `line_clear_score`, in tenths.
    pub multiplier_tenths: u32,
    pub total: u32,
}

/// Combo after a turn that cleared `lines` lines
pub fn next_combo(combo: u32, lines: usize) -> u32 {
    if lines > 0 {
        combo.saturating_add(1)
    } else {
        0
    }
}

/// Multiplier for a combo value, in tenths (15 = 1.5x)
pub fn combo_multiplier_tenths(combo: u32) -> u32 {
    let last = COMBO_MULTIPLIER_TENTHS.len() - 1;
    if (combo as usize) <= last {
        COMBO_MULTIPLIER_TENTHS[combo as usize]
    } else {
        let extra = combo - last as u32;
        COMBO_MULTIPLIER_TENTHS[last].saturating_add(extra.saturating_mul(COMBO_STEP_TENTHS))
    }
}

pub fn placement_points(cells: usize) -> u32 {
    (cells as u32).saturating_mul(CELL_POINTS)
}

/// Line points for `lines` lines at the given (already updated) combo
pub fn line_clear_points(lines: usize, combo: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    (lines as u32)
        .saturating_mul(LINE_POINTS)
        .saturating_mul(combo_multiplier_tenths(combo))
        / 10
}

/// Score one turn.
///
/// `previous_combo` is the combo before this turn; the returned result carries the
/// updated combo.
pub fn calculate_turn_score(
    cells_placed: usize,
    lines: usize,
    previous_combo: u32,
    perfect_clear: bool,
) -> ScoreResult {
    let combo = next_combo(previous_combo, lines);
    let multiplier_tenths = if lines > 0 {
        combo_multiplier_tenths(combo)
    } else {
        10
    };
    let placement_score = placement_points(cells_placed);
    let line_clear_score = line_clear_points(lines, combo);
    let perfect_clear_bonus = if perfect_clear && lines > 0 {
        PERFECT_CLEAR_BONUS
    } else {
        0
    };

    ScoreResult {
        placement_score,
        line_clear_score,
        perfect_clear_bonus,
        combo,
        multiplier_tenths,
        total: placement_score
            .saturating_add(line_clear_score)
            .saturating_add(perfect_clear_bonus),
    }
}
