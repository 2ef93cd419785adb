//! Headless autoplay: drive a session with the greedy policy until it ends.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::adapter::{create_observation, create_summary, GameSummary, ObservationMessage};
use crate::core::GameState;
use crate::engine::{apply_place, best_placement};

/// Play `state` until game over or `max_turns` accepted turns.
///
/// `on_observation` receives one observation per accepted turn (seq starts at 1).
pub fn play_game(
    state: &mut GameState,
    max_turns: u32,
    mut on_observation: impl FnMut(ObservationMessage) -> Result<()>,
) -> Result<GameSummary> {
    let mut seq: u64 = 0;

    while !state.game_over() && state.turns() < max_turns {
        let Some(candidate) = best_placement(state) else {
            break;
        };
        let outcome = apply_place(state, candidate.slot, candidate.anchor.row, candidate.anchor.col)
            .with_context(|| {
                format!(
                    "policy chose slot {} at ({}, {})",
                    candidate.slot, candidate.anchor.row, candidate.anchor.col
                )
            })?;
        debug!(
            turn = state.turns(),
            piece = outcome.piece.kind.as_str(),
            row = candidate.anchor.row,
            col = candidate.anchor.col,
            delta = outcome.score.total,
            "turn"
        );

        seq += 1;
        on_observation(create_observation(seq, &state.snapshot(), state.take_last_event()))?;
    }

    let summary = create_summary(state);
    info!(
        seed = summary.seed,
        score = summary.score,
        lines = summary.lines_cleared,
        turns = summary.turns,
        game_over = summary.game_over,
        "game finished"
    );
    Ok(summary)
}
