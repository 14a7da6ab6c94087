//! Keyboard mapping.

use crossterm::event::KeyCode;
use tictactoe_core::{BOARD_SIZE, Move};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Play at the cursor.
    PlayCursor,
    /// Play at a specific cell (digit keys 1-9).
    Play(Move),
    /// Start over in the current mode.
    Reset,
    /// Switch to the next mode and start over.
    CycleMode,
    /// Leave the program.
    Quit,
}

/// Maps a key to a command, if it means anything.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('m') => Some(Command::CycleMode),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Command::Cursor(key)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(Move::from_index)
            .map(Command::Play),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(BOARD_SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(BOARD_SIZE - 1)),
        _ => (row, col),
    };
    Move::new(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        let center = Move::ALL[4];
        assert_eq!(move_cursor(center, KeyCode::Up), Move::ALL[1]);
        assert_eq!(move_cursor(center, KeyCode::Right), Move::ALL[5]);
        assert_eq!(move_cursor(Move::ALL[0], KeyCode::Left), Move::ALL[0]);
        assert_eq!(move_cursor(Move::ALL[8], KeyCode::Down), Move::ALL[8]);
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(command_for(KeyCode::Char('1')), Some(Command::Play(Move::ALL[0])));
        assert_eq!(command_for(KeyCode::Char('9')), Some(Command::Play(Move::ALL[8])));
        assert_eq!(command_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(command_for(KeyCode::Char('m')), Some(Command::CycleMode));
        assert_eq!(command_for(KeyCode::Enter), Some(Command::PlayCursor));
        assert_eq!(command_for(KeyCode::Tab), None);
    }
}
