//! Terminal status evaluation.

use super::{draw::is_draw, win::is_winner};
use crate::error::InvariantViolation;
use crate::types::{Board, Player, TerminalStatus};
use tracing::{error, instrument};

/// Derives the terminal status of a board.
///
/// Precedence is win, then draw, then in progress.
///
/// # Errors
///
/// Returns [`InvariantViolation`] when X and O both own a complete line.
/// Alternating play cannot produce that board.
#[instrument(level = "trace", skip(board))]
pub fn status(board: &Board) -> Result<TerminalStatus, InvariantViolation> {
    match (is_winner(board, Player::X), is_winner(board, Player::O)) {
        (true, true) => {
            error!(%board, "Both players own a complete line");
            Err(InvariantViolation::new(
                "both X and O own a complete line",
            ))
        }
        (true, false) => Ok(TerminalStatus::Win(Player::X)),
        (false, true) => Ok(TerminalStatus::Win(Player::O)),
        (false, false) if is_draw(board) => Ok(TerminalStatus::Draw),
        (false, false) => Ok(TerminalStatus::InProgress),
    }
}

/// Checks whether no further moves should be played.
///
/// Agrees with `status(board) != InProgress` on every consistent board, and
/// answers `true` for a double-win board, which is certainly finished.
#[instrument(level = "trace", skip(board))]
pub fn is_game_over(board: &Board) -> bool {
    is_winner(board, Player::X) || is_winner(board, Player::O) || board.is_full()
}
