//! Adapter module - JSON payloads for the world outside the engine
//!
//! The engine itself knows nothing about transports. This crate turns sessions into
//! the messages other systems consume:
//!
//! - **summary**: final score, lines, turns and combo stats of a game. This is the
//!   payload a score-submission backend receives once a session ends.
//! - **observation**: board, hand, score and danger flag after each turn, for
//!   recorders, replay viewers and external bots.
//!
//! # Example
//!
//! ```
//! use perfect_fit_adapter::{create_summary, to_json_line};
//! use perfect_fit_adapter::core::GameState;
//!
//! let state = GameState::new(1);
//! let line = to_json_line(&create_summary(&state)).unwrap();
//! assert!(line.starts_with(r#"{"type":"summary""#));
//! ```
//!
//! # Message Shapes
//!
//! ```text
//! {"type":"summary","seed":1,"episode_id":0,"score":412,"lines_cleared":14,"turns":61,"max_combo":3,"perfect_clears":0,"game_over":true}
//! {"type":"observation","seq":5,"episode_id":0,"seed":1,"board":{"size":8,"cells":[[0,0,...],...]},"hand":["t",null,"dot"],"score":40,...}
//! ```

pub mod protocol;

pub use perfect_fit_core as core;
pub use perfect_fit_types as types;

// Re-export protocol types for convenience
pub use protocol::*;
