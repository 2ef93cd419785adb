//! Hand module - the three piece slots offered to the player
//!
//! Slots keep their index for the whole hand: placing a piece empties its slot
//! (`None`) instead of shifting the others down, so slot `i` always refers to the
//! same piece until a new hand is dealt.

use crate::pieces::Piece;
use crate::types::{PieceKind, HAND_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hand {
    slots: [Option<Piece>; HAND_SIZE],
}

impl Hand {
    /// A full hand
    pub fn new(pieces: [Piece; HAND_SIZE]) -> Self {
        Self {
            slots: pieces.map(Some),
        }
    }

    /// A hand built from explicit slots (used slots as `None`)
    pub fn from_slots(slots: [Option<Piece>; HAND_SIZE]) -> Self {
        Self { slots }
    }

    /// A hand with every slot used
    pub fn empty() -> Self {
        Self {
            slots: [None; HAND_SIZE],
        }
    }

    /// Piece in `slot`, if the slot exists and is unused
    pub fn get(&self, slot: usize) -> Option<&Piece> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    /// Remove and return the piece in `slot`
    pub fn take(&mut self, slot: usize) -> Option<Piece> {
        self.slots.get_mut(slot).and_then(|s| s.take())
    }

    /// True once every slot has been used
    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    /// Number of unused slots
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Unused slots with their index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Piece)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|p| (i, p)))
    }

    pub fn slots(&self) -> &[Option<Piece>; HAND_SIZE] {
        &self.slots
    }

    pub fn kinds(&self) -> [Option<PieceKind>; HAND_SIZE] {
        self.slots.map(|s| s.map(|p| p.kind))
    }
}
