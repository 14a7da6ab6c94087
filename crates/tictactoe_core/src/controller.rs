//! Turn sequencing and mode dispatch.
//!
//! [`GameState`] owns the board. Human moves come in as explicit
//! coordinates; when the computer holds the O seat it answers inside the
//! same call, so the caller always gets control back on a human turn or a
//! finished game.

use crate::error::{InvariantViolation, MoveError};
use crate::rules;
use crate::types::{Board, GameMode, Move, Outcome, Player, TerminalStatus};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the controller is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current human player.
    AwaitingHumanMove,
    /// The computer is choosing O's reply.
    AiThinking,
    /// A win or draw was reached; moves are rejected until reset.
    GameOver,
}

/// Result of an accepted human move, after any computer reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game goes on.
    Continued,
    /// The game was won.
    Won(Player),
    /// The board filled up without a winner.
    Draw,
}

impl From<Outcome> for MoveOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => MoveOutcome::Won(player),
            Outcome::Draw => MoveOutcome::Draw,
        }
    }
}

/// Notification for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A cell received a mark.
    MarkPlaced {
        /// Who played.
        player: Player,
        /// Where.
        mv: Move,
    },
    /// The game finished.
    GameEnded(Outcome),
}

/// A committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Placement {
    /// Who played.
    player: Player,
    /// Where.
    mv: Move,
}

/// Complete game state for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    mode: GameMode,
    current_player: Player,
    phase: Phase,
    history: Vec<Placement>,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Starts a new game with X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_player: Player::X,
            phase: Phase::AwaitingHumanMove,
            history: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the play mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the controller phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the committed moves, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Derives the terminal status from the board.
    pub fn status(&self) -> Result<TerminalStatus, InvariantViolation> {
        rules::status(&self.board)
    }

    /// Drains pending notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Plays a human move for the current player at `(row, col)`.
    ///
    /// If the game continues and the computer holds the O seat, its reply is
    /// committed before returning. The outcome reflects the board after both
    /// moves.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] for coordinates off the board
    /// - [`MoveError::GameOver`] once the game has finished
    /// - [`MoveError::SquareOccupied`] for a marked cell
    ///
    /// These leave the state untouched. [`MoveError::InvariantViolation`]
    /// means the board was corrupted and is not recoverable by retrying.
    #[instrument(skip(self), fields(player = %self.current_player, mode = %self.mode))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let mv = Move::new(row, col).inspect_err(|e| warn!(error = %e, "Rejected move"))?;

        if self.phase == Phase::GameOver {
            warn!(%mv, "Move after game over");
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(mv) {
            warn!(%mv, "Square occupied");
            return Err(MoveError::SquareOccupied(mv));
        }

        let player = self.current_player;
        self.commit(player, mv);
        if let Some(outcome) = self.settle()? {
            return Ok(outcome.into());
        }
        self.current_player = player.opponent();

        if self.current_player == Player::O
            && let Some(strategy) = self.mode.strategy()
        {
            self.phase = Phase::AiThinking;
            debug!(strategy = strategy.name(), "Computer to move");

            let reply = strategy.choose_move(&self.board).ok_or_else(|| {
                InvariantViolation::new("strategy found no move on an unfinished board")
            })?;
            self.commit(Player::O, reply);
            if let Some(outcome) = self.settle()? {
                return Ok(outcome.into());
            }
            self.current_player = Player::X;
        }

        self.phase = Phase::AwaitingHumanMove;
        Ok(MoveOutcome::Continued)
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new(self.mode);
    }

    /// Switches play mode, which always starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(from = %self.mode, to = %mode, "Changing mode");
        *self = Self::new(mode);
    }

    fn commit(&mut self, player: Player, mv: Move) {
        debug!(%player, %mv, "Committing move");
        self.board.place(mv, player);
        self.history.push(Placement::new(player, mv));
        self.events.push(GameEvent::MarkPlaced { player, mv });
    }

    /// Finishes the game if the board is terminal.
    fn settle(&mut self) -> Result<Option<Outcome>, InvariantViolation> {
        let outcome = self.status()?.outcome();
        if let Some(outcome) = outcome {
            info!(%outcome, board = %self.board, "Game over");
            self.phase = Phase::GameOver;
            self.events.push(GameEvent::GameEnded(outcome));
        }
        Ok(outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_waits_for_x() {
        let game = GameState::new(GameMode::HumanVsHuman);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_human_vs_human_alternates() {
        let mut game = GameState::new(GameMode::HumanVsHuman);
        assert_eq!(game.apply_human_move(1, 1), Ok(MoveOutcome::Continued));
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.apply_human_move(0, 0), Ok(MoveOutcome::Continued));
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.board().get(0, 0), crate::Cell::O);
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut game = GameState::new(GameMode::HumanVsHuman);
        game.apply_human_move(1, 1).expect("legal");
        let before = game.clone();

        assert_eq!(
            game.apply_human_move(1, 1),
            Err(MoveError::SquareOccupied(Move::ALL[4]))
        );
        assert_eq!(
            game.apply_human_move(0, 3),
            Err(MoveError::OutOfRange { row: 0, col: 3 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_computer_replies_in_same_call() {
        let mut game = GameState::new(GameMode::HumanVsHeuristic);
        assert_eq!(game.apply_human_move(1, 1), Ok(MoveOutcome::Continued));

        // Fallback picks the first free cell.
        assert_eq!(game.board().get(0, 0), crate::Cell::O);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_events_report_marks_in_order() {
        let mut game = GameState::new(GameMode::HumanVsMinimax);
        game.apply_human_move(0, 0).expect("legal");

        let events = game.take_events();
        assert_eq!(
            events,
            vec![
                GameEvent::MarkPlaced { player: Player::X, mv: Move::ALL[0] },
                GameEvent::MarkPlaced { player: Player::O, mv: Move::ALL[4] },
            ]
        );
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_set_mode_resets() {
        let mut game = GameState::new(GameMode::HumanVsHuman);
        game.apply_human_move(2, 2).expect("legal");
        game.set_mode(GameMode::HumanVsMinimax);

        assert_eq!(game.mode(), GameMode::HumanVsMinimax);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_player(), Player::X);
    }
}
