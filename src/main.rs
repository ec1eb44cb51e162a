//! Strictly Tic-Tac-Toe - terminal game and board tools

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe::{
    Board, GameConfig, GameStatus, Player, evaluation_json, evaluation_text, suggestion_text,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            config,
            log_file,
        } => {
            let config = GameConfig::load(config.as_deref())?.with_overrides(mode, log_file);
            tui::run_tui(config).await
        }
        Command::Evaluate { board, json } => {
            init_stderr_logging();
            run_evaluate(board, json)
        }
        Command::Suggest { board, acting } => {
            init_stderr_logging();
            run_suggest(board, acting)
        }
    }
}

/// One-shot commands log to stderr so stdout stays machine-readable.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the status of a board
#[instrument(skip(board), fields(board = %board))]
fn run_evaluate(board: Board, json: bool) -> Result<()> {
    info!(status = ?GameStatus::from_board(&board), "Evaluated board");

    if json {
        let report = evaluation_json(&board);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", evaluation_text(&board));
    }
    Ok(())
}

/// Prints the bot's choice for a board
#[instrument(skip(board), fields(board = %board))]
fn run_suggest(board: Board, acting: Player) -> Result<()> {
    let suggestion = suggestion_text(&board, acting);
    info!(%suggestion, "Suggested move");
    println!("{}", suggestion);
    Ok(())
}
