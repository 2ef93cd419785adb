//! Placement module - validity, placement, line clears and game-over detection
//!
//! Every function here is pure: boards come in by reference and new boards go out.
//! Nothing returns an error. Callers check [`can_place_piece`] before
//! [`apply_placement`]; calling the latter on an illegal placement is a caller bug.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::hand::Hand;
use crate::pieces::{get_piece_cells, Piece, PieceCells};
use crate::types::{CellPlacement, Position, GRID_CELLS, GRID_SIZE};

/// Indices of the full rows and columns on a board, ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClears {
    pub rows: ArrayVec<u8, { GRID_SIZE as usize }>,
    pub cols: ArrayVec<u8, { GRID_SIZE as usize }>,
}

impl LineClears {
    /// Total lines (rows + columns)
    pub fn count(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    /// True if `pos` lies on one of the cleared lines
    pub fn covers(&self, pos: Position) -> bool {
        self.rows.iter().any(|&r| r as i8 == pos.row) || self.cols.iter().any(|&c| c as i8 == pos.col)
    }
}

/// Result of putting a piece on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub board: Board,
    pub placed_cells: PieceCells,
}

/// Result of removing full lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearResult {
    pub board: Board,
    /// Every removed cell exactly once, with the color it had before the clear
    pub cleared_cells: ArrayVec<CellPlacement, GRID_CELLS>,
}

/// Check whether `piece` fits with its anchor at (row, col).
///
/// Every filled cell must land inside the board on an empty cell. Stops at the first
/// cell that fails.
pub fn can_place_piece(board: &Board, piece: &Piece, anchor_row: i8, anchor_col: i8) -> bool {
    piece
        .offsets()
        .all(|(dr, dc)| {
            board.is_free(anchor_row.saturating_add(dr), anchor_col.saturating_add(dc))
        })
}

/// Put `piece` on the board. Requires `can_place_piece` for the same arguments.
pub fn apply_placement(board: &Board, piece: &Piece, anchor_row: i8, anchor_col: i8) -> Placement {
    debug_assert!(
        can_place_piece(board, piece, anchor_row, anchor_col),
        "apply_placement on an illegal placement of {:?} at ({}, {})",
        piece.kind,
        anchor_row,
        anchor_col
    );

    let placed_cells = get_piece_cells(piece, anchor_row, anchor_col);
    let writes: ArrayVec<CellPlacement, { crate::types::MAX_PIECE_CELLS }> = placed_cells
        .iter()
        .map(|&pos| CellPlacement {
            pos,
            color: piece.color,
        })
        .collect();

    Placement {
        board: board.with_cells_set(&writes),
        placed_cells,
    }
}

/// Report every full row and every full column.
///
/// Rows and columns are scanned independently, so a cell can sit on both a reported
/// row and a reported column.
pub fn detect_line_clears(board: &Board) -> LineClears {
    let mut clears = LineClears::default();
    for i in 0..GRID_SIZE {
        if board.is_row_full(i as i8) {
            clears.rows.push(i);
        }
        if board.is_col_full(i as i8) {
            clears.cols.push(i);
        }
    }
    clears
}

/// Empty every cell on the listed rows and columns.
///
/// Intersections are cleared and reported once. The cleared list is row-major.
/// Indices off the board are ignored.
pub fn apply_line_clears(board: &Board, rows: &[u8], cols: &[u8]) -> ClearResult {
    let size = GRID_SIZE as usize;
    let mut marked = [false; GRID_CELLS];
    for &r in rows.iter().filter(|&&r| r < GRID_SIZE) {
        let start = r as usize * size;
        marked[start..start + size].iter_mut().for_each(|m| *m = true);
    }
    for &c in cols.iter().filter(|&&c| c < GRID_SIZE) {
        marked.iter_mut().skip(c as usize).step_by(size).for_each(|m| *m = true);
    }

    let mut cleared_cells = ArrayVec::new();
    let mut positions: ArrayVec<Position, GRID_CELLS> = ArrayVec::new();
    for (idx, _) in marked.iter().enumerate().filter(|&(_, &m)| m) {
        let pos = Position::new((idx / size) as i8, (idx % size) as i8);
        if let Some(color) = board.cell_at(pos.row, pos.col) {
            cleared_cells.push(CellPlacement { pos, color });
        }
        positions.push(pos);
    }

    ClearResult {
        board: board.with_cells_cleared(&positions),
        cleared_cells,
    }
}

/// Preview which lines placing `piece` at (row, col) would complete.
///
/// Works on a scratch copy; the input board is untouched and nothing is retained.
/// An illegal placement previews no clears.
pub fn get_potential_line_clear(
    board: &Board,
    piece: &Piece,
    anchor_row: i8,
    anchor_col: i8,
) -> LineClears {
    if !can_place_piece(board, piece, anchor_row, anchor_col) {
        return LineClears::default();
    }
    let scratch = apply_placement(board, piece, anchor_row, anchor_col);
    detect_line_clears(&scratch.board)
}

/// Every anchor on the board where `piece` fits, row-major
pub fn valid_anchors<'a>(board: &'a Board, piece: &'a Piece) -> impl Iterator<Item = Position> + 'a {
    let size = GRID_SIZE as i8;
    (0..size)
        .flat_map(move |r| (0..size).map(move |c| Position::new(r, c)))
        .filter(move |p| can_place_piece(board, piece, p.row, p.col))
}

/// True if `piece` fits anywhere on the board
pub fn can_place_anywhere(board: &Board, piece: &Piece) -> bool {
    valid_anchors(board, piece).next().is_some()
}

/// True when no piece left in the hand fits anywhere on the board.
///
/// Brute force over all 64 anchors per piece. An empty hand is vacuously terminal.
pub fn is_game_over(board: &Board, hand: &Hand) -> bool {
    hand.iter().all(|(_, piece)| !can_place_anywhere(board, piece))
}
