//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, policies, JSON payloads).
//!
//! # Board Dimensions
//!
//! The PerfectFit playfield is a fixed square:
//!
//! - **Size**: 8 rows x 8 columns (indexed 0-7)
//! - **Coordinates**: `(row, col)`, row 0 at the top, col 0 at the left
//! - **Hand**: 3 piece slots offered to the player at a time
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_POINTS` | 1 | Points per placed cell |
//! | `LINE_POINTS` | 10 | Points per cleared row or column, before the combo multiplier |
//! | `PERFECT_CLEAR_BONUS` | 300 | Flat bonus when a clear leaves the board empty |
//!
//! # Combo Multipliers
//!
//! Multipliers are stored in tenths to keep scoring in integer math:
//!
//! | Combo | Multiplier |
//! |-------|------------|
//! | 0 | 1.0x |
//! | 1 | 1.5x |
//! | 2 | 2.0x |
//! | 3 | 3.0x |
//! | 4 | 4.0x |
//! | 5 | 5.0x |
//! | 6+ | +0.5x per extra step |
//!
//! # Examples
//!
//! ```
//! use perfect_fit_types::{Color, PieceKind, Position, GRID_SIZE, HAND_SIZE};
//!
//! // Parse a piece kind (case-insensitive)
//! let kind = PieceKind::from_str("square2").unwrap();
//! assert_eq!(kind, PieceKind::Square2);
//!
//! // Colors have stable numeric codes (0 is reserved for empty)
//! assert_eq!(Color::from_code(Color::Teal.code()), Some(Color::Teal));
//!
//! // Positions are signed so projected cells may fall off the board
//! assert!(!Position::new(-1, 3).in_bounds());
//!
//! assert_eq!(GRID_SIZE, 8);
//! assert_eq!(HAND_SIZE, 3);
//! ```

/// Board edge length in cells (8 rows, 8 columns)
pub const GRID_SIZE: u8 = 8;

/// Total number of cells on the board
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of piece slots in a hand
pub const HAND_SIZE: usize = 3;

/// Largest cell count of any catalog piece (the 3x3 square)
pub const MAX_PIECE_CELLS: usize = 9;

/// Points awarded per placed cell
pub const CELL_POINTS: u32 = 1;

/// Points per cleared line, before the combo multiplier
pub const LINE_POINTS: u32 = 10;

/// Flat bonus when a clear leaves the board entirely empty
pub const PERFECT_CLEAR_BONUS: u32 = 300;

/// Combo multipliers in tenths, indexed by combo (0..=5)
pub const COMBO_MULTIPLIER_TENTHS: [u32; 6] = [10, 15, 20, 30, 40, 50];

/// Multiplier increase (in tenths) per combo step beyond the table
pub const COMBO_STEP_TENTHS: u32 = 5;

/// Filled cell count at which a session reports danger mode (75% of the board)
pub const DANGER_FILL_CELLS: usize = 48;

/// Re-rolls the dealer makes looking for a hand with at least one legal move
pub const DEAL_ATTEMPTS: usize = 8;

/// Display color token of a filled cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Indigo,
    Purple,
    Pink,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Teal,
        Color::Blue,
        Color::Indigo,
        Color::Purple,
        Color::Pink,
    ];

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "orange" => Some(Color::Orange),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "teal" => Some(Color::Teal),
            "blue" => Some(Color::Blue),
            "indigo" => Some(Color::Indigo),
            "purple" => Some(Color::Purple),
            "pink" => Some(Color::Pink),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Teal => "teal",
            Color::Blue => "blue",
            Color::Indigo => "indigo",
            Color::Purple => "purple",
            Color::Pink => "pink",
        }
    }

    /// Stable numeric code (1-based; 0 means empty in numeric grids)
    pub fn code(&self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Orange => 2,
            Color::Yellow => 3,
            Color::Green => 4,
            Color::Teal => 5,
            Color::Blue => 6,
            Color::Indigo => 7,
            Color::Purple => 8,
            Color::Pink => 9,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=9 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Single-character label used by text dumps of the board
    pub fn initial(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Teal => 'T',
            Color::Blue => 'B',
            Color::Indigo => 'I',
            Color::Purple => 'P',
            Color::Pink => 'K',
        }
    }
}

/// Catalog piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Dot,
    DominoH,
    DominoV,
    LineH3,
    LineV3,
    LineH4,
    LineV4,
    LineH5,
    LineV5,
    Square2,
    Square3,
    SmallCorner,
    LargeCorner,
    T,
    S,
    Z,
    L,
    J,
    Rect2x3,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 19] = [
        PieceKind::Dot,
        PieceKind::DominoH,
        PieceKind::DominoV,
        PieceKind::LineH3,
        PieceKind::LineV3,
        PieceKind::LineH4,
        PieceKind::LineV4,
        PieceKind::LineH5,
        PieceKind::LineV5,
        PieceKind::Square2,
        PieceKind::Square3,
        PieceKind::SmallCorner,
        PieceKind::LargeCorner,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Rect2x3,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL.iter().copied().find(|k| k.as_str() == lower)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Dot => "dot",
            PieceKind::DominoH => "dominoh",
            PieceKind::DominoV => "dominov",
            PieceKind::LineH3 => "lineh3",
            PieceKind::LineV3 => "linev3",
            PieceKind::LineH4 => "lineh4",
            PieceKind::LineV4 => "linev4",
            PieceKind::LineH5 => "lineh5",
            PieceKind::LineV5 => "linev5",
            PieceKind::Square2 => "square2",
            PieceKind::Square3 => "square3",
            PieceKind::SmallCorner => "smallcorner",
            PieceKind::LargeCorner => "largecorner",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::Rect2x3 => "rect2x3",
        }
    }

    /// Index into the catalog table
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Cell on the board (None = empty, Some = filled with a color)
pub type Cell = Option<Color>;

/// A (row, col) board coordinate.
///
/// Signed because projecting a piece near the edge can produce cells outside
/// `[0, 8) x [0, 8)`; callers filter with [`Position::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row >= 0 && self.row < GRID_SIZE as i8 && self.col >= 0 && self.col < GRID_SIZE as i8
    }
}

/// A colored cell to write onto the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPlacement {
    pub pos: Position,
    pub color: Color,
}

impl CellPlacement {
    pub const fn new(row: i8, col: i8, color: Color) -> Self {
        Self {
            pos: Position::new(row, col),
            color,
        }
    }
}

/// Compact record of the last accepted turn (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnEvent {
    pub piece: PieceKind,
    pub slot: u8,
    pub cells_placed: u32,
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub combo: u32,
    pub perfect_clear: bool,
}
