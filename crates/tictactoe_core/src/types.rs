//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, and the seat the computer takes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A coordinate on the board, both components in `0..3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All nine coordinates in row-major order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    /// Creates a move, rejecting coordinates outside the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self::at(row, col))
    }

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index of this move (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Row of the move.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of the move.
    pub fn col(self) -> usize {
        self.col
    }
}

/// 3x3 tic-tac-toe board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..3`. Callers index with
    /// coordinates they enumerated themselves, so this is a programming error.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Gets the cell under a move.
    pub fn cell(&self, mv: Move) -> Cell {
        self.get(mv.row(), mv.col())
    }

    /// Marks `(row, col)` for `player`. No legality check happens here.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..3`.
    pub fn set(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = player.into();
    }

    /// Marks the cell under a move for `player`.
    pub fn place(&mut self, mv: Move, player: Player) {
        self.set(mv.row(), mv.col(), player);
    }

    /// Resets the cell under a move to empty.
    pub fn clear(&mut self, mv: Move) {
        self.cells[mv.row()][mv.col()] = Cell::Empty;
    }

    /// Checks if the cell under a move is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.cell(mv).is_empty()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of cells that have been played.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", row * BOARD_SIZE + col + 1)?,
                    Cell::X => write!(f, "X")?,
                    Cell::O => write!(f, "O")?,
                }
                if col < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Terminal status of a board, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalStatus {
    /// Game is ongoing.
    InProgress,
    /// Player completed a line.
    Win(Player),
    /// Board is full and nobody won.
    Draw,
}

impl TerminalStatus {
    /// Returns the final outcome, or `None` while the game is in progress.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            TerminalStatus::InProgress => None,
            TerminalStatus::Win(player) => Some(Outcome::Winner(player)),
            TerminalStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// Player won the game.
    #[display("Player {_0} wins!")]
    Winner(Player),
    /// Game ended in a draw.
    #[display("It's a draw!")]
    Draw,
}

/// Who sits in the O seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans share the board.
    #[display("Two players")]
    HumanVsHuman,
    /// O is played by the one-ply heuristic.
    #[default]
    #[display("One player (heuristic)")]
    HumanVsHeuristic,
    /// O is played by exhaustive minimax search.
    #[display("One player (minimax)")]
    HumanVsMinimax,
}

impl GameMode {
    /// Returns true when the computer plays O.
    pub fn has_computer_opponent(self) -> bool {
        !matches!(self, GameMode::HumanVsHuman)
    }

    /// The mode after this one, wrapping around.
    pub fn next(self) -> Self {
        use strum::IntoEnumIterator;
        GameMode::iter()
            .cycle()
            .skip_while(|mode| *mode != self)
            .nth(1)
            .unwrap_or_default()
    }
}
