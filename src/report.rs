//! Text and JSON reports for the one-shot `evaluate` and `suggest` commands.

use crate::games::tictactoe::{
    Board, GameStatus, Player, evaluate_outcome, select_move_with_reason,
};
use serde_json::{Value, json};
use tracing::instrument;

/// Human grid followed by a status line.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluation_text(board: &Board) -> String {
    let status = match GameStatus::from_board(board) {
        GameStatus::InProgress => "In progress".to_string(),
        GameStatus::Won(player) => format!("{} wins", player),
        GameStatus::Draw => "Draw".to_string(),
    };
    format!("{}\n\n{}", board.display(), status)
}

/// Machine-readable evaluation: compact board, winner (or null) and status.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluation_json(board: &Board) -> Value {
    json!({
        "board": board.to_string(),
        "winner": evaluate_outcome(board),
        "status": GameStatus::from_board(board),
    })
}

/// The bot's pick for `acting` as `index (label, reason)`.
#[instrument(skip(board), fields(board = %board))]
pub fn suggestion_text(board: &Board, acting: Player) -> String {
    match select_move_with_reason(board, acting, acting.opponent()) {
        Some((pos, reason)) => format!("{} ({}, {})", pos.to_index(), pos, reason),
        None => "none (board is full)".to_string(),
    }
}
