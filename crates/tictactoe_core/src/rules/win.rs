//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Move, Player};
use tracing::instrument;

/// The eight lines that win the game: rows, columns, then diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::ALL[0], Move::ALL[1], Move::ALL[2]],
    [Move::ALL[3], Move::ALL[4], Move::ALL[5]],
    [Move::ALL[6], Move::ALL[7], Move::ALL[8]],
    // Columns
    [Move::ALL[0], Move::ALL[3], Move::ALL[6]],
    [Move::ALL[1], Move::ALL[4], Move::ALL[7]],
    [Move::ALL[2], Move::ALL[5], Move::ALL[8]],
    // Diagonals
    [Move::ALL[0], Move::ALL[4], Move::ALL[8]],
    [Move::ALL[2], Move::ALL[4], Move::ALL[6]],
];

/// Checks if `player` owns any complete line.
///
/// Every line is examined on its own; nothing assumes only one line or
/// one player can be complete.
#[instrument(level = "trace", skip(board))]
pub fn is_winner(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|mv| board.cell(*mv).player() == Some(player)))
}
