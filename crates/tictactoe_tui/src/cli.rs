//! Command-line interface for the tic-tac-toe TUI.

use clap::{Parser, ValueEnum};
use tictactoe_core::GameMode;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a heuristic or minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays O when the game starts
    #[arg(short, long, value_enum, default_value_t = ModeArg::Heuristic)]
    pub mode: ModeArg,

    /// File that receives trace output (the terminal belongs to the UI)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: std::path::PathBuf,
}

/// Starting mode as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans take turns
    Human,
    /// O answers with the one-ply heuristic
    Heuristic,
    /// O answers with full minimax search
    Minimax,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Human => GameMode::HumanVsHuman,
            ModeArg::Heuristic => GameMode::HumanVsHeuristic,
            ModeArg::Minimax => GameMode::HumanVsMinimax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.mode, ModeArg::Heuristic);
        assert_eq!(cli.log_file, std::path::PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_mode_flag() {
        let cli = Cli::parse_from(["tictactoe", "--mode", "minimax"]);
        assert_eq!(GameMode::from(cli.mode), GameMode::HumanVsMinimax);
    }
}
