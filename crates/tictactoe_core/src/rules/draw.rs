//! Draw detection logic for tic-tac-toe.

use super::win::is_winner;
use crate::types::{Board, Player};
use tracing::instrument;

/// Checks if the game is drawn: the board is full and nobody owns a line.
///
/// A full board with a completed line is a win, never a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !is_winner(board, Player::X) && !is_winner(board, Player::O)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    fn fill(rows: [[Player; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (row, players) in rows.iter().enumerate() {
            for (col, player) in players.iter().enumerate() {
                board.set(row, col, *player);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        board.place(Move::ALL[4], Player::X);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = fill([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
