//! Property tests for the placement kernel and the turn loop.
//!
//! Invariants covered:
//! - A placement with any cell off the board is never legal.
//! - A legal placement changes exactly the piece's cells.
//! - Setting then clearing the same cells restores the board.
//! - The hover preview matches detection after a real placement and never
//!   touches the board.
//! - Over a rollout, score and line totals never decrease and every turn ends
//!   with no full line left on the board.

use proptest::prelude::*;

use perfect_fit::core::{
    apply_placement, can_place_piece, detect_line_clears, get_piece_cells,
    get_potential_line_clear, valid_anchors, Board, GameState, CATALOG,
};
use perfect_fit::engine::{apply_place, legal_moves};
use perfect_fit::types::{CellPlacement, Color, Position, GRID_SIZE};

/// Board with each cell filled where the matching mask bit is set.
fn board_from_mask(mask: u64) -> Board {
    let cells: Vec<CellPlacement> = (0..64)
        .filter(|i| mask & (1u64 << i) != 0)
        .map(|i| CellPlacement::new((i / 8) as i8, (i % 8) as i8, Color::Blue))
        .collect();
    Board::new().with_cells_set(&cells)
}

proptest! {
    #[test]
    fn off_board_placement_is_never_legal(
        mask in any::<u64>(),
        idx in 0usize..CATALOG.len(),
        row in -8i8..16,
        col in -8i8..16,
    ) {
        let board = board_from_mask(mask);
        let piece = &CATALOG[idx];
        let off_board = get_piece_cells(piece, row, col).iter().any(|p| !p.in_bounds());
        if off_board {
            prop_assert!(!can_place_piece(&board, piece, row, col));
        }
    }

    #[test]
    fn placement_changes_only_piece_cells(
        a in any::<u64>(),
        b in any::<u64>(),
        idx in 0usize..CATALOG.len(),
        pick in any::<usize>(),
    ) {
        // Roughly a quarter full, so most boards still have room for the piece.
        let board = board_from_mask(a & b);
        let piece = &CATALOG[idx];
        let anchors: Vec<Position> = valid_anchors(&board, piece).collect();
        if anchors.is_empty() {
            return Ok(());
        }
        let Position { row, col } = anchors[pick % anchors.len()];

        let placed = apply_placement(&board, piece, row, col);
        let cells = get_piece_cells(piece, row, col);
        for r in 0..GRID_SIZE as i8 {
            for c in 0..GRID_SIZE as i8 {
                if cells.contains(&Position::new(r, c)) {
                    prop_assert_eq!(placed.board.cell_at(r, c), Some(piece.color));
                } else {
                    prop_assert_eq!(placed.board.cell_at(r, c), board.cell_at(r, c));
                }
            }
        }
        prop_assert_eq!(placed.board.filled_count(), board.filled_count() + piece.cell_count());
    }

    #[test]
    fn set_then_clear_round_trips(mask in any::<u64>(), extra in any::<u64>()) {
        let board = board_from_mask(mask);
        let cells: Vec<CellPlacement> = (0..64)
            .filter(|i| extra & (1u64 << i) != 0 && mask & (1u64 << i) == 0)
            .map(|i| CellPlacement::new((i / 8) as i8, (i % 8) as i8, Color::Orange))
            .collect();
        let positions: Vec<Position> = cells.iter().map(|c| c.pos).collect();

        prop_assert_eq!(board.with_cells_set(&cells).with_cells_cleared(&positions), board);
    }

    #[test]
    fn preview_matches_detection(
        mask in any::<u64>(),
        idx in 0usize..CATALOG.len(),
        row in 0i8..8,
        col in 0i8..8,
    ) {
        let board = board_from_mask(mask);
        let before = board;
        let piece = &CATALOG[idx];

        let preview = get_potential_line_clear(&board, piece, row, col);
        prop_assert_eq!(board, before);

        if can_place_piece(&board, piece, row, col) {
            let placed = apply_placement(&board, piece, row, col);
            prop_assert_eq!(preview, detect_line_clears(&placed.board));
        } else {
            prop_assert!(preview.is_empty());
        }
    }

    #[test]
    fn rollout_totals_are_monotonic(seed in any::<u32>(), steps in 1usize..60, pick in any::<usize>()) {
        let mut gs = GameState::new(seed);

        for i in 0..steps {
            let moves = legal_moves(&gs);
            if moves.is_empty() {
                prop_assert!(gs.game_over());
                break;
            }
            let (slot, anchor) = moves[pick.wrapping_add(i) % moves.len()];
            let score = gs.score();
            let lines = gs.lines();

            let outcome = apply_place(&mut gs, slot, anchor.row, anchor.col);
            prop_assert!(outcome.is_ok());
            prop_assert!(gs.score() >= score);
            prop_assert!(gs.lines() >= lines);
            prop_assert!(detect_line_clears(gs.board()).is_empty());
        }
    }
}
