//! Exhaustive minimax opponent.
//!
//! O maximizes, X minimizes. Terminal boards score +1 for an O win, -1 for
//! an X win and 0 for a draw. The search always runs to the end of the game;
//! a 3x3 board has at most 9! move orders, so no pruning is needed.
//!
//! Ply depth is tracked for [`SearchStats`] but does not weigh the score: a
//! win in one move and a win in five are equally good.

use super::Strategy;
use crate::rules::{empty_cells, is_winner};
use crate::scratch::ScratchMark;
use crate::types::{Board, Move, Player};
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, instrument};

/// Score of a board won by O.
pub const O_WINS: i32 = 1;
/// Score of a board won by X.
pub const X_WINS: i32 = -1;
/// Score of a drawn board.
pub const DRAWN: i32 = 0;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SearchStats {
    /// Positions evaluated, terminal or not.
    nodes: u64,
    /// Deepest ply reached below the root.
    max_depth: u32,
}

impl SearchStats {
    fn visit(&mut self, depth: u32) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct Decision {
    /// Chosen cell for O.
    mv: Move,
    /// Minimax value of the chosen cell.
    score: i32,
    /// Work done to find it.
    stats: SearchStats,
}

/// Optimal opponent: never loses from any reachable position.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Creates a new minimax strategy.
    pub fn new() -> Self {
        Self
    }

    /// Scores every empty cell for O and keeps the best.
    ///
    /// Cells are tried in row-major order and only a strictly greater score
    /// replaces the current pick, so ties go to the earliest cell.
    #[instrument(skip(self, board), fields(strategy = "minimax"))]
    pub fn search(&self, board: &Board) -> Option<Decision> {
        let mut scratch = board.clone();
        let mut stats = SearchStats::default();
        let mut best: Option<(Move, i32)> = None;

        for mv in empty_cells(&scratch) {
            let score = {
                let mut trial = ScratchMark::place(&mut scratch, mv, Player::O);
                evaluate(&mut trial, 1, false, &mut stats)
            };
            debug!(%mv, score, "Scored candidate");

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let decision = best.map(|(mv, score)| Decision::new(mv, score, stats));
        if let Some(decision) = &decision {
            debug!(
                mv = %decision.mv,
                score = decision.score,
                nodes = decision.stats.nodes,
                max_depth = decision.stats.max_depth,
                "Search complete"
            );
        }
        decision
    }
}

impl Strategy for MinimaxStrategy {
    fn choose_move(&self, board: &Board) -> Option<Move> {
        self.search(board).map(|decision| decision.mv)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Minimax value of `board` with O maximizing.
///
/// `maximizing` says whose ply it is: `true` for O, `false` for X. The board
/// is returned unchanged.
pub fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    evaluate(board, 0, maximizing, &mut SearchStats::default())
}

fn evaluate(board: &mut Board, depth: u32, maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.visit(depth);

    if let Some(score) = terminal_score(board) {
        return score;
    }

    let (player, mut best) = if maximizing {
        (Player::O, i32::MIN)
    } else {
        (Player::X, i32::MAX)
    };

    for mv in empty_cells(board) {
        let mut trial = ScratchMark::place(&mut *board, mv, player);
        let score = evaluate(&mut trial, depth + 1, !maximizing, stats);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

fn terminal_score(board: &Board) -> Option<i32> {
    if is_winner(board, Player::X) {
        Some(X_WINS)
    } else if is_winner(board, Player::O) {
        Some(O_WINS)
    } else if board.is_full() {
        Some(DRAWN)
    } else {
        None
    }
}
