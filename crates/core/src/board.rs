//! Board module - the 8x8 occupancy grid
//!
//! The board is an 8x8 grid where each cell is either empty or holds a color token.
//! Uses a flat array for cache locality; the whole board is 64 bytes and `Copy`.
//! Coordinates: (row, col) where row ranges 0..7 (top to bottom), col ranges 0..7
//! (left to right).
//!
//! Boards are never mutated in place by the engine: every update helper returns a
//! fresh board so callers keep the previous state for diffing and undo.

use std::fmt;

use crate::types::{Cell, CellPlacement, Position, GRID_CELLS, GRID_SIZE};

/// The game board - 8 rows x 8 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; GRID_CELLS],
}

/// Create a new, entirely empty board
pub fn empty_grid() -> Board {
    Board::new()
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_SIZE as i8 || col < 0 || col >= GRID_SIZE as i8 {
            return None;
        }
        Some((row as usize) * (GRID_SIZE as usize) + (col as usize))
    }

    /// Board edge length
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Read a cell that the caller already knows is in bounds.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the board.
    pub fn cell_at(&self, row: i8, col: i8) -> Cell {
        match Self::index(row, col) {
            Some(idx) => self.cells[idx],
            None => panic!("cell_at({}, {}) is outside the {}x{} board", row, col, GRID_SIZE, GRID_SIZE),
        }
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Return a new board with the listed cells set to the given colors.
    ///
    /// Cells must be in bounds and currently empty; the engine only calls this after
    /// a successful validity check.
    pub fn with_cells_set(&self, cells: &[CellPlacement]) -> Board {
        let mut next = *self;
        for cell in cells {
            let idx = Self::index(cell.pos.row, cell.pos.col);
            debug_assert!(idx.is_some(), "with_cells_set: {:?} out of bounds", cell.pos);
            debug_assert!(
                idx.map_or(true, |i| self.cells[i].is_none()),
                "with_cells_set: {:?} already filled",
                cell.pos
            );
            if let Some(idx) = idx {
                next.cells[idx] = Some(cell.color);
            }
        }
        next
    }

    /// Return a new board with the listed positions emptied
    pub fn with_cells_cleared(&self, positions: &[Position]) -> Board {
        let mut next = *self;
        for pos in positions {
            if let Some(idx) = Self::index(pos.row, pos.col) {
                next.cells[idx] = None;
            }
        }
        next
    }

    /// Check if a row is completely filled (false for rows off the board)
    pub fn is_row_full(&self, row: i8) -> bool {
        self.row(row).is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Check if a column is completely filled (false for columns off the board)
    pub fn is_col_full(&self, col: i8) -> bool {
        self.col(col).is_some_and(|mut cells| cells.all(|cell| cell.is_some()))
    }

    /// Number of filled cells in a row (0 for rows off the board)
    pub fn row_fill(&self, row: i8) -> usize {
        self.row(row)
            .map_or(0, |cells| cells.iter().filter(|c| c.is_some()).count())
    }

    /// Number of filled cells in a column (0 for columns off the board)
    pub fn col_fill(&self, col: i8) -> usize {
        self.col(col)
            .map_or(0, |cells| cells.filter(|c| c.is_some()).count())
    }

    fn row(&self, row: i8) -> Option<&[Cell]> {
        if row < 0 || row >= GRID_SIZE as i8 {
            return None;
        }
        let start = row as usize * GRID_SIZE as usize;
        Some(&self.cells[start..start + GRID_SIZE as usize])
    }

    fn col(&self, col: i8) -> Option<impl Iterator<Item = &Cell> + '_> {
        if col < 0 || col >= GRID_SIZE as i8 {
            return None;
        }
        Some(self.cells.iter().skip(col as usize).step_by(GRID_SIZE as usize))
    }

    /// True when no cell is filled (perfect clear)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn empty_count(&self) -> usize {
        GRID_CELLS - self.filled_count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as color codes (0 = empty) for snapshots.
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_SIZE as usize]; GRID_SIZE as usize]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * GRID_SIZE as usize;
            for (col, out_cell) in out_row.iter_mut().enumerate() {
                *out_cell = self.cells[start + col].map_or(0, |c| c.code());
            }
        }
    }

    /// Rebuild a board from color codes. Returns None on an unknown code.
    pub fn from_u8_grid(grid: &[[u8; GRID_SIZE as usize]; GRID_SIZE as usize]) -> Option<Self> {
        let mut board = Board::new();
        for (row, codes) in grid.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                if code == 0 {
                    continue;
                }
                let color = crate::types::Color::from_code(code)?;
                board.cells[row * GRID_SIZE as usize + col] = Some(color);
            }
        }
        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(GRID_SIZE as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = cell.map_or('.', |c| c.initial());
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
