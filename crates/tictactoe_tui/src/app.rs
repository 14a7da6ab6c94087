//! Application state and logic.

use crate::input::{Command, command_for, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_core::{GameEvent, GameMode, GameState, Move, Outcome, Player};
use tracing::{debug, info, instrument};

const PROMPT: &str = "Player X's turn. Arrows + Enter or 1-9 to move.";

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Move,
    status_message: String,
    finished: Option<Outcome>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            game: GameState::new(mode),
            cursor: Move::ALL[4],
            status_message: PROMPT.to_string(),
            finished: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Move {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Outcome shown in the end-of-game popup, if any.
    pub fn finished(&self) -> Option<Outcome> {
        self.finished
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = command_for(key) else {
            return;
        };

        // The popup swallows input until it is dismissed.
        if self.finished.take().is_some() && !matches!(command, Command::Quit) {
            return;
        }

        match command {
            Command::Quit => self.should_quit = true,
            Command::Reset => self.restart(),
            Command::CycleMode => self.cycle_mode(),
            Command::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::PlayCursor => self.make_move(self.cursor),
            Command::Play(mv) => self.make_move(mv),
        }
    }

    /// Makes a move at the given cell.
    fn make_move(&mut self, mv: Move) {
        debug!(%mv, "Making move");
        self.cursor = mv;

        if let Err(e) = self.game.apply_human_move(mv.row(), mv.col()) {
            self.status_message = format!("Invalid move: {}. Try again.", e);
            return;
        }

        let mut replies = Vec::new();
        for event in self.game.take_events() {
            match event {
                GameEvent::MarkPlaced { player, mv } if player == Player::O => {
                    if self.game.mode().has_computer_opponent() {
                        replies.push(mv);
                    }
                }
                GameEvent::MarkPlaced { .. } => {}
                GameEvent::GameEnded(outcome) => {
                    info!(%outcome, "Game ended");
                    self.finished = Some(outcome);
                }
            }
        }

        self.status_message = match (self.finished, replies.last()) {
            (Some(outcome), _) => format!("{} Press 'r' to restart or 'q' to quit.", outcome),
            (None, Some(reply)) => format!("Computer played {}. Your turn, X.", reply),
            (None, None) => format!("Player {}'s turn", self.game.current_player()),
        };
    }

    /// Restarts the game in the current mode.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.finished = None;
        self.status_message = PROMPT.to_string();
    }

    fn cycle_mode(&mut self) {
        let mode = self.game.mode().next();
        self.game.set_mode(mode);
        self.finished = None;
        self.status_message = format!("Switched to {}. {}", mode, PROMPT);
    }
}
