//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical hands (replays, autoplay runs)
//! - **Testable**: Every rule is a plain function over plain data
//! - **Portable**: Can run in any environment (browser bridge, terminal, headless)
//! - **Copy-on-write**: Boards are 64-byte `Copy` values, replaced on every update
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid with immutable update helpers
//! - [`pieces`]: the fixed block catalog and shape projection
//! - [`placement`]: validity check, placement, line clears, game-over detection
//! - [`scoring`]: placement points, line points and combo multipliers
//! - [`rng`]: seeded hand dealing
//! - [`hand`]: the three piece slots
//! - [`game_state`]: complete session state and the turn cycle
//! - [`snapshot`]: plain-data session copies for observers
//!
//! # Game Rules
//!
//! - **Placement**: a piece fits when every filled cell lands on an empty board cell
//! - **Clears**: full rows and full columns clear together; shared cells clear once
//! - **Combo**: consecutive clearing turns raise the line multiplier (1.5x, 2x, 3x, ...)
//! - **Hand**: three pieces; a new hand is dealt once all three are placed
//! - **Game over**: no piece left in the hand fits anywhere
//!
//! # Example
//!
//! ```
//! use perfect_fit_core::GameState;
//!
//! let mut game = GameState::new(12345);
//!
//! // Find any legal move for the first slot that still holds a piece.
//! let (slot, piece) = game.hand().iter().next().map(|(i, p)| (i, *p)).unwrap();
//! let anchor = perfect_fit_core::valid_anchors(game.board(), &piece).next().unwrap();
//!
//! let outcome = game.place(slot, anchor.row, anchor.col).unwrap();
//! assert_eq!(outcome.placed_cells.len(), piece.cell_count());
//! assert!(game.score() > 0);
//! ```

pub mod board;
pub mod game_state;
pub mod hand;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use perfect_fit_types as types;

// Re-export commonly used types for convenience
pub use board::{empty_grid, Board};
pub use game_state::{GameState, TurnOutcome};
pub use hand::Hand;
pub use pieces::{get_piece_cells, piece, Piece, PieceCells, CATALOG};
pub use placement::{
    apply_line_clears, apply_placement, can_place_anywhere, can_place_piece, detect_line_clears,
    get_potential_line_clear, is_game_over, valid_anchors, ClearResult, LineClears, Placement,
};
pub use rng::{HandDealer, SimpleRng};
pub use scoring::{calculate_turn_score, combo_multiplier_tenths, next_combo, ScoreResult};
pub use snapshot::GameSnapshot;
