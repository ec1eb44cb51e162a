//! Rule-based opponent.
//!
//! The bot is a greedy single-ply heuristic, not a search. It takes an
//! immediate win, otherwise blocks an immediate loss, otherwise prefers
//! the center, then corners, then whatever is left. It can be beaten.

use super::position::Position;
use super::rules::evaluate_outcome;
use super::types::{Board, Player};
use tracing::{debug, instrument};

/// Why the bot picked a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Reason {
    /// Completes a line for the acting player.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Takes the center square.
    Center,
    /// Takes the first free corner.
    Corner,
    /// Takes the first free square.
    FirstFree,
}

/// Returns the first empty square that would complete a line for `player`.
#[instrument]
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    Position::valid_moves(board)
        .into_iter()
        .find(|&pos| evaluate_outcome(&board.with_mark(pos, player)) == Some(player))
}

/// Picks the next move for `acting` together with the rule that chose it.
///
/// Returns `None` only when the board has no empty squares.
#[instrument]
pub fn select_move_with_reason(
    board: &Board,
    acting: Player,
    opponent: Player,
) -> Option<(Position, Reason)> {
    let choice = winning_move(board, acting)
        .map(|pos| (pos, Reason::Win))
        .or_else(|| {
            winning_move(board, opponent).map(|pos| (pos, Reason::Block))
        })
        .or_else(|| {
            board
                .is_empty(Position::Center)
                .then_some((Position::Center, Reason::Center))
        })
        .or_else(|| {
            Position::CORNERS
                .into_iter()
                .find(|&pos| board.is_empty(pos))
                .map(|pos| (pos, Reason::Corner))
        })
        .or_else(|| {
            Position::valid_moves(board)
                .first()
                .map(|&pos| (pos, Reason::FirstFree))
        });

    match choice {
        Some((pos, reason)) => {
            debug!(player = %acting, position = %pos, %reason, "Bot chose move")
        }
        None => debug!(player = %acting, "Board full, no move"),
    }
    choice
}

/// Picks the next move for `acting` against `opponent`.
#[instrument]
pub fn select_move(board: &Board, acting: Player, opponent: Player) -> Option<Position> {
    select_move_with_reason(board, acting, opponent).map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_takes_priority_over_block() {
        // X can win at 2, O threatens at 5.
        let board: Board = "XX_/OO_/___".parse().unwrap();
        assert_eq!(
            select_move_with_reason(&board, Player::X, Player::O),
            Some((Position::TopRight, Reason::Win))
        );
        assert_eq!(
            select_move_with_reason(&board, Player::O, Player::X),
            Some((Position::MiddleRight, Reason::Win))
        );
    }

    #[test]
    fn test_lowest_winning_index_chosen() {
        // O wins at 2 (top row) and at 6 (left column); ascending scan finds 2.
        let board: Board = "OO_/O__/___".parse().unwrap();
        assert_eq!(winning_move(&board, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_first_free_corner() {
        let board: Board = "_X_/_O_/___".parse().unwrap();
        assert_eq!(
            select_move_with_reason(&board, Player::O, Player::X),
            Some((Position::TopLeft, Reason::Corner))
        );

        let board: Board = "XX_/_O_/___".parse().unwrap();
        // Blocking outranks the corner preference.
        assert_eq!(
            select_move_with_reason(&board, Player::O, Player::X),
            Some((Position::TopRight, Reason::Block))
        );
    }

    #[test]
    fn test_first_free_when_center_and_corners_taken() {
        // Every line through an empty edge is already dead.
        let board: Board = "XOX/_O_/OXO".parse().unwrap();
        assert_eq!(
            select_move_with_reason(&board, Player::X, Player::O),
            Some((Position::MiddleLeft, Reason::FirstFree))
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(select_move_with_reason(&board, Player::O, Player::X), None);
    }
}
