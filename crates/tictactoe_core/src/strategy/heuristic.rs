//! One-ply heuristic opponent.

use super::Strategy;
use crate::rules::{empty_cells, is_winner};
use crate::scratch::ScratchMark;
use crate::types::{Board, Move, Player};
use tracing::{debug, instrument};

/// Myopic opponent: win now, else block, else take the first free cell.
///
/// Looks exactly one ply ahead. Forks and multi-move traps go unnoticed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    /// Creates a new heuristic strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for HeuristicStrategy {
    #[instrument(skip(self, board), fields(strategy = "heuristic"))]
    fn choose_move(&self, board: &Board) -> Option<Move> {
        let mut scratch = board.clone();
        let cells = empty_cells(&scratch);

        if let Some(mv) = first_completing(&mut scratch, &cells, Player::O) {
            debug!(%mv, "Taking winning cell");
            return Some(mv);
        }

        // The cell where X would finish a line is claimed for O.
        if let Some(mv) = first_completing(&mut scratch, &cells, Player::X) {
            debug!(%mv, "Blocking X");
            return Some(mv);
        }

        let fallback = cells.first().copied();
        debug!(mv = ?fallback, "No threats, taking first free cell");
        fallback
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

/// First cell in `cells` where a mark for `player` completes a line.
fn first_completing(board: &mut Board, cells: &[Move], player: Player) -> Option<Move> {
    cells.iter().copied().find(|mv| {
        let trial = ScratchMark::place(&mut *board, *mv, player);
        is_winner(&trial, player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).expect("on board")
    }

    #[test]
    fn test_takes_win_over_block() {
        let mut board = Board::new();
        // X threatens the top row, O threatens the middle row.
        board.set(0, 0, Player::X);
        board.set(0, 1, Player::X);
        board.set(1, 0, Player::O);
        board.set(1, 1, Player::O);
        board.set(2, 2, Player::X);

        assert_eq!(HeuristicStrategy::new().choose_move(&board), Some(mv(1, 2)));
    }

    #[test]
    fn test_blocks_threat() {
        let mut board = Board::new();
        board.set(0, 0, Player::X);
        board.set(0, 1, Player::X);

        assert_eq!(HeuristicStrategy::new().choose_move(&board), Some(mv(0, 2)));
    }

    #[test]
    fn test_falls_back_to_first_empty() {
        let mut board = Board::new();
        board.set(0, 0, Player::X);

        assert_eq!(HeuristicStrategy::new().choose_move(&board), Some(mv(0, 1)));
    }

    #[test]
    fn test_leaves_board_untouched() {
        let mut board = Board::new();
        board.set(1, 1, Player::X);
        board.set(0, 0, Player::O);
        let before = board.clone();

        HeuristicStrategy::new().choose_move(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for cell in Move::ALL {
            board.place(cell, Player::X);
        }
        assert_eq!(HeuristicStrategy::new().choose_move(&board), None);
    }
}
