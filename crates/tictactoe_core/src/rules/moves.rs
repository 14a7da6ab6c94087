//! Legal move enumeration.

use crate::types::{Board, Move};
use tracing::instrument;

/// Lists the empty cells, scanning rows top to bottom and each row left to
/// right.
///
/// The order is load-bearing: both strategies break ties by taking the
/// first qualifying cell in this sequence.
#[instrument(level = "trace", skip(board))]
pub fn empty_cells(board: &Board) -> Vec<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|mv| board.is_empty(*mv))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_lists_all_cells_in_order() {
        assert_eq!(empty_cells(&Board::new()), Move::ALL.to_vec());
    }

    #[test]
    fn test_occupied_cells_are_skipped() {
        let mut board = Board::new();
        board.set(0, 1, Player::X);
        board.set(2, 2, Player::O);

        let cells = empty_cells(&board);
        assert_eq!(cells.len(), 7);
        assert_eq!(cells.first(), Move::new(0, 0).ok().as_ref());
        assert_eq!(cells.get(1), Move::new(0, 2).ok().as_ref());
        assert_eq!(cells.last(), Move::new(2, 1).ok().as_ref());
    }

    #[test]
    fn test_full_board_has_no_empty_cells() {
        let mut board = Board::new();
        for mv in Move::ALL {
            board.place(mv, Player::O);
        }
        assert!(empty_cells(&board).is_empty());
    }
}
