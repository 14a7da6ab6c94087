//! Error types for move validation and board consistency.

use crate::types::Move;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Board state that cannot arise through legal play.
///
/// Raised when both players own a complete line at once, which means
/// something wrote to the board without going through the controller.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invariant violation: {} at {}:{}", description, file, line)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
    /// Line number where the violation was detected.
    pub line: u32,
    /// Source file where the violation was detected.
    pub file: &'static str,
}

impl InvariantViolation {
    /// Creates a new violation with caller location tracking.
    #[track_caller]
    #[instrument(skip(description))]
    pub fn new(description: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            description: description.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A rejected move. The game state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 board.
    #[display("Position ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Move),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The board reached an inconsistent state.
    #[display("{_0}")]
    #[from]
    InvariantViolation(InvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_records_location() {
        let violation = InvariantViolation::new("both players won");
        assert!(violation.file.ends_with("error.rs"));
        assert!(violation.to_string().contains("both players won"));
    }

    #[test]
    fn test_violation_converts_into_move_error() {
        let err: MoveError = InvariantViolation::new("broken").into();
        assert!(matches!(err, MoveError::InvariantViolation(_)));
    }

    #[test]
    fn test_occupied_message() {
        let mv = Move::new(1, 2).expect("on board");
        assert_eq!(
            MoveError::SquareOccupied(mv).to_string(),
            "Square (1, 2) is already occupied"
        );
    }
}
