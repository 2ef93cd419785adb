//! Pieces module - the fixed block catalog and shape geometry
//!
//! Every piece is authored data: a small rectangular 0/1 occupancy matrix plus a
//! display color. Pieces never rotate; the catalog lists each orientation that can
//! be dealt as its own kind. Offsets are `(row, col)` relative to the matrix's
//! top-left corner, which is the anchor the player drops the piece at.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind, Position, MAX_PIECE_CELLS};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Absolute cells covered by a piece at some anchor
pub type PieceCells = ArrayVec<Position, MAX_PIECE_CELLS>;

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Occupancy matrix, one slice per row (1 = filled)
    pub shape: &'static [&'static [u8]],
    pub color: Color,
}

impl Piece {
    /// Relative offsets of every filled cell, row-major
    pub fn offsets(&self) -> impl Iterator<Item = CellOffset> + '_ {
        self.shape.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v == 1)
                .map(move |(c, _)| (r as i8, c as i8))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.shape
            .iter()
            .map(|row| row.iter().filter(|&&v| v == 1).count())
            .sum()
    }

    /// Rows in the bounding box
    pub fn height(&self) -> usize {
        self.shape.len()
    }

    /// Columns in the bounding box
    pub fn width(&self) -> usize {
        self.shape.iter().map(|row| row.len()).max().unwrap_or(0)
    }
}

/// Look up the catalog entry for a kind
pub fn piece(kind: PieceKind) -> Piece {
    CATALOG[kind.index()]
}

/// Project a piece onto absolute board coordinates.
///
/// One position per filled cell, offset by the anchor. Positions outside the board
/// are kept; callers that only want visible cells filter with `Position::in_bounds`.
pub fn get_piece_cells(piece: &Piece, anchor_row: i8, anchor_col: i8) -> PieceCells {
    piece
        .offsets()
        .map(|(dr, dc)| {
            Position::new(anchor_row.saturating_add(dr), anchor_col.saturating_add(dc))
        })
        .collect()
}

/// The block catalog, indexed by `PieceKind::index()`
pub static CATALOG: [Piece; 19] = [
    Piece {
        kind: PieceKind::Dot,
        shape: &[&[1]],
        color: Color::Yellow,
    },
    Piece {
        kind: PieceKind::DominoH,
        shape: &[&[1, 1]],
        color: Color::Orange,
    },
    Piece {
        kind: PieceKind::DominoV,
        shape: &[&[1], &[1]],
        color: Color::Orange,
    },
    Piece {
        kind: PieceKind::LineH3,
        shape: &[&[1, 1, 1]],
        color: Color::Teal,
    },
    Piece {
        kind: PieceKind::LineV3,
        shape: &[&[1], &[1], &[1]],
        color: Color::Teal,
    },
    Piece {
        kind: PieceKind::LineH4,
        shape: &[&[1, 1, 1, 1]],
        color: Color::Blue,
    },
    Piece {
        kind: PieceKind::LineV4,
        shape: &[&[1], &[1], &[1], &[1]],
        color: Color::Blue,
    },
    Piece {
        kind: PieceKind::LineH5,
        shape: &[&[1, 1, 1, 1, 1]],
        color: Color::Indigo,
    },
    Piece {
        kind: PieceKind::LineV5,
        shape: &[&[1], &[1], &[1], &[1], &[1]],
        color: Color::Indigo,
    },
    Piece {
        kind: PieceKind::Square2,
        shape: &[&[1, 1], &[1, 1]],
        color: Color::Yellow,
    },
    Piece {
        kind: PieceKind::Square3,
        shape: &[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]],
        color: Color::Red,
    },
    Piece {
        kind: PieceKind::SmallCorner,
        shape: &[&[1, 1], &[1, 0]],
        color: Color::Green,
    },
    Piece {
        kind: PieceKind::LargeCorner,
        shape: &[&[1, 1, 1], &[1, 0, 0], &[1, 0, 0]],
        color: Color::Green,
    },
    Piece {
        kind: PieceKind::T,
        shape: &[&[1, 1, 1], &[0, 1, 0]],
        color: Color::Purple,
    },
    Piece {
        kind: PieceKind::S,
        shape: &[&[0, 1, 1], &[1, 1, 0]],
        color: Color::Green,
    },
    Piece {
        kind: PieceKind::Z,
        shape: &[&[1, 1, 0], &[0, 1, 1]],
        color: Color::Red,
    },
    Piece {
        kind: PieceKind::L,
        shape: &[&[1, 0], &[1, 0], &[1, 1]],
        color: Color::Orange,
    },
    Piece {
        kind: PieceKind::J,
        shape: &[&[0, 1], &[0, 1], &[1, 1]],
        color: Color::Blue,
    },
    Piece {
        kind: PieceKind::Rect2x3,
        shape: &[&[1, 1, 1], &[1, 1, 1]],
        color: Color::Pink,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(piece(kind).kind, kind);
        }
    }

    #[test]
    fn every_shape_is_rectangular_and_tight() {
        for p in CATALOG.iter() {
            let w = p.width();
            assert!(p.shape.iter().all(|row| row.len() == w), "{:?} ragged", p.kind);
            assert!(p.shape.iter().all(|row| row.iter().all(|&v| v <= 1)));
            // No empty border rows or columns.
            assert!(p.shape.first().unwrap().contains(&1), "{:?}", p.kind);
            assert!(p.shape.last().unwrap().contains(&1), "{:?}", p.kind);
            assert!(p.shape.iter().any(|row| row[0] == 1), "{:?}", p.kind);
            assert!(p.shape.iter().any(|row| row[w - 1] == 1), "{:?}", p.kind);
            assert!(p.cell_count() >= 1 && p.cell_count() <= MAX_PIECE_CELLS);
        }
    }

    #[test]
    fn tetromino_cell_counts() {
        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::L, PieceKind::J] {
            assert_eq!(piece(kind).cell_count(), 4, "{:?}", kind);
        }
        assert_eq!(piece(PieceKind::Square3).cell_count(), 9);
        assert_eq!(piece(PieceKind::LargeCorner).cell_count(), 5);
    }

    #[test]
    fn offsets_are_row_major() {
        let t = piece(PieceKind::T);
        let offsets: Vec<CellOffset> = t.offsets().collect();
        assert_eq!(offsets, vec![(0, 0), (0, 1), (0, 2), (1, 1)]);
    }
}
