//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Board, Mode, Player};

/// Strictly Tic-Tac-Toe - play against a friend or a simple bot
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with a rule-based opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Starting mode: pvp or pvb (overrides the config file)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log file path (overrides the config file)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Report the status of a board, e.g. `XXX/OO_/___`
    Evaluate {
        /// Nine cells of X, O and _ (row separators / or | allowed)
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the square the bot would take on a board
    Suggest {
        /// Nine cells of X, O and _ (row separators / or | allowed)
        board: Board,

        /// Mark the bot plays
        #[arg(long = "as", default_value = "O")]
        acting: Player,
    },
}
