//! Scoped trial placements for search.

use crate::types::{Board, Move, Player};
use std::ops::{Deref, DerefMut};

/// A mark placed for the duration of a borrow.
///
/// The cell is cleared again when the guard drops, so every return path out
/// of a search branch, early ones included, leaves the board as it found it.
/// Nested guards reborrow through [`DerefMut`] and unwind in reverse order.
#[derive(Debug)]
pub struct ScratchMark<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> ScratchMark<'a> {
    /// Marks `mv` for `player` until the guard drops.
    ///
    /// The cell must be empty; clearing on drop would otherwise erase a
    /// real mark.
    pub fn place(board: &'a mut Board, mv: Move, player: Player) -> Self {
        debug_assert!(board.is_empty(mv), "scratch mark on occupied cell {mv}");
        board.place(mv, player);
        Self { board, mv }
    }
}

impl Deref for ScratchMark<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScratchMark<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScratchMark<'_> {
    fn drop(&mut self) {
        self.board.clear(self.mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_mark_visible_then_reverted() {
        let mut board = Board::new();
        let mv = Move::ALL[4];
        {
            let trial = ScratchMark::place(&mut board, mv, Player::O);
            assert_eq!(trial.cell(mv), Cell::O);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_nested_marks_unwind() {
        let mut board = Board::new();
        board.place(Move::ALL[0], Player::X);
        let before = board.clone();
        {
            let mut outer = ScratchMark::place(&mut board, Move::ALL[1], Player::O);
            let inner = ScratchMark::place(&mut outer, Move::ALL[2], Player::X);
            assert_eq!(inner.occupied_count(), 3);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_early_return_reverts() {
        fn probe(board: &mut Board) -> bool {
            let trial = ScratchMark::place(board, Move::ALL[8], Player::X);
            if trial.occupied_count() == 1 {
                return true;
            }
            false
        }

        let mut board = Board::new();
        assert!(probe(&mut board));
        assert!(board.is_empty(Move::ALL[8]));
    }
}
