//! Snapshot module - plain-data copy of a session for observers
//!
//! Snapshots are `Copy` and allocation-free so callers can take one per turn
//! and hand it to other threads or serializers without borrowing the session.

use crate::types::{PieceKind, GRID_SIZE, HAND_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Color codes per cell, 0 = empty
    pub board: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    /// Hand slots, `None` for used slots
    pub hand: [Option<PieceKind>; HAND_SIZE],
    pub episode_id: u32,
    pub seed: u32,
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub lines: u32,
    pub turns: u32,
    pub perfect_clears: u32,
    pub danger: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Filled cells in the snapshot board
    pub fn filled_count(&self) -> usize {
        self.board.iter().flatten().filter(|&&c| c != 0).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize],
            hand: [None; HAND_SIZE],
            episode_id: 0,
            seed: 0,
            score: 0,
            combo: 0,
            max_combo: 0,
            lines: 0,
            turns: 0,
            perfect_clears: 0,
            danger: false,
            game_over: false,
        }
    }
}
