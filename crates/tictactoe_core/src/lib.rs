//! Tic-tac-toe engine with computer opponents.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Move`], [`Player`], [`GameMode`]
//! - **Rules**: pure functions in [`rules`] for empty cells, wins, draws
//!   and terminal status
//! - **Strategies**: [`HeuristicStrategy`] (one ply) and
//!   [`MinimaxStrategy`] (full depth), both behind [`Strategy`]
//! - **Controller**: [`GameState`] sequences turns and lets the selected
//!   strategy answer for O
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameMode, GameState, MoveOutcome, Player};
//!
//! let mut game = GameState::new(GameMode::HumanVsMinimax);
//! let outcome = game.apply_human_move(0, 0).unwrap();
//! assert_eq!(outcome, MoveOutcome::Continued);
//! assert_eq!(game.current_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
pub mod rules;
mod scratch;
mod strategy;
mod types;

// Crate-level exports - Domain types
pub use types::{BOARD_SIZE, Board, Cell, GameMode, Move, Outcome, Player, TerminalStatus};

// Crate-level exports - Errors
pub use error::{InvariantViolation, MoveError};

// Crate-level exports - Search support
pub use scratch::ScratchMark;

// Crate-level exports - Strategies
pub use strategy::{
    Decision, HeuristicStrategy, MinimaxStrategy, SearchStats, Strategy, minimax,
};

// Crate-level exports - Controller
pub use controller::{GameEvent, GameState, MoveOutcome, Phase, Placement};
