//! Protocol module - JSON payloads for external collaborators
//!
//! Two messages leave the engine:
//! - `summary`: final numbers of a finished game, the payload a score-submission
//!   endpoint consumes.
//! - `observation`: a per-turn view of the session for UIs, recorders and bots.
//!
//! All messages carry `type`; field names are snake_case.

use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, GameState};
use crate::types::{PieceKind, TurnEvent, GRID_SIZE, HAND_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SummaryType {
    #[serde(rename = "summary")]
    Summary,
}

impl Default for SummaryType {
    fn default() -> Self {
        Self::Summary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

impl Default for ObservationType {
    fn default() -> Self {
        Self::Observation
    }
}

/// Piece kind as its lowercase catalog name on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceName(pub PieceKind);

impl Serialize for PieceName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for PieceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct V;
        impl<'de> serde::de::Visitor<'de> for V {
            type Value = PieceName;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a piece kind name")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                PieceKind::from_str(v)
                    .map(PieceName)
                    .ok_or_else(|| E::custom(format!("unknown piece kind: {}", v)))
            }
        }
        deserializer.deserialize_str(V)
    }
}

/// Final numbers of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: SummaryType,
    pub seed: u32,
    pub episode_id: u32,
    pub score: u32,
    pub lines_cleared: u32,
    pub turns: u32,
    pub max_combo: u32,
    pub perfect_clears: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: u8,
    pub cells: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize], // 0 = empty, 1-9 = color code
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastEvent {
    pub piece: PieceName,
    pub slot: u8,
    pub cells_placed: u32,
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub combo: u32,
    pub perfect_clear: bool,
}

impl From<TurnEvent> for LastEvent {
    fn from(ev: TurnEvent) -> Self {
        Self {
            piece: PieceName(ev.piece),
            slot: ev.slot,
            cells_placed: ev.cells_placed,
            lines_cleared: ev.lines_cleared,
            score_delta: ev.score_delta,
            combo: ev.combo,
            perfect_clear: ev.perfect_clear,
        }
    }
}

/// Per-turn view of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub episode_id: u32,
    pub seed: u32,
    pub board: BoardSnapshot,
    /// Used slots are `null`
    pub hand: [Option<PieceName>; HAND_SIZE],
    pub score: u32,
    pub combo: u32,
    pub lines: u32,
    pub turns: u32,
    pub danger: bool,
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_event: Option<LastEvent>,
}

/// Build the summary for a session (normally a finished one)
pub fn create_summary(state: &GameState) -> GameSummary {
    GameSummary {
        msg_type: SummaryType::Summary,
        seed: state.seed(),
        episode_id: state.episode_id(),
        score: state.score(),
        lines_cleared: state.lines(),
        turns: state.turns(),
        max_combo: state.max_combo(),
        perfect_clears: state.perfect_clears(),
        game_over: state.game_over(),
    }
}

/// Build an observation from a snapshot
pub fn create_observation(
    seq: u64,
    snap: &GameSnapshot,
    last_event: Option<TurnEvent>,
) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        episode_id: snap.episode_id,
        seed: snap.seed,
        board: BoardSnapshot {
            size: GRID_SIZE,
            cells: snap.board,
        },
        hand: snap.hand.map(|k| k.map(PieceName)),
        score: snap.score,
        combo: snap.combo,
        lines: snap.lines,
        turns: snap.turns,
        danger: snap.danger,
        game_over: snap.game_over,
        last_event: last_event.map(LastEvent::from),
    }
}

/// Encode a message as a single JSON line (no trailing newline)
pub fn to_json_line<T: Serialize>(msg: &T) -> serde_json::Result<String> {
    serde_json::to_string(msg)
}

pub fn parse_summary(json: &str) -> serde_json::Result<GameSummary> {
    serde_json::from_str(json)
}

pub fn parse_observation(json: &str) -> serde_json::Result<ObservationMessage> {
    serde_json::from_str(json)
}
