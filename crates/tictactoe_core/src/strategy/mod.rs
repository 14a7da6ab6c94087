//! Computer opponents.
//!
//! A strategy looks at a board where O is to move and the game is not over,
//! and names one cell. It never mutates the caller's board: searches run on
//! a private copy with [`ScratchMark`](crate::ScratchMark) trial placements.

mod heuristic;
mod minimax;

pub use heuristic::HeuristicStrategy;
pub use minimax::{Decision, MinimaxStrategy, SearchStats, minimax};

use crate::types::{Board, GameMode, Move};
use tracing::instrument;

/// Trait for computer players that choose O's move.
pub trait Strategy: std::fmt::Debug {
    /// Chooses a cell for O.
    ///
    /// Returns `None` only when the board has no empty cell.
    fn choose_move(&self, board: &Board) -> Option<Move>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

impl GameMode {
    /// Builds the strategy that plays O in this mode, if any.
    #[instrument]
    pub fn strategy(self) -> Option<Box<dyn Strategy>> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsHeuristic => Some(Box::new(HeuristicStrategy::new())),
            GameMode::HumanVsMinimax => Some(Box::new(MinimaxStrategy::new())),
        }
    }
}
