//! Tests for the rule-based opponent.

use strictly_tictactoe::{
    Board, Player, Position, Reason, Square, select_move, select_move_with_reason,
};

/// Every assignment of {empty, X, O} to the nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

#[test]
fn test_empty_board_takes_center() {
    assert_eq!(
        select_move(&Board::new(), Player::O, Player::X),
        Some(Position::Center)
    );
}

#[test]
fn test_completes_own_line() {
    let board: Board = "XX_/___/___".parse().unwrap();
    assert_eq!(
        select_move(&board, Player::X, Player::O),
        Some(Position::TopRight)
    );
}

#[test]
fn test_blocks_opponent_line() {
    let board: Board = "OO_/___/___".parse().unwrap();
    assert_eq!(
        select_move(&board, Player::X, Player::O),
        Some(Position::TopRight)
    );
}

#[test]
fn test_full_board_has_no_move() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(select_move(&board, Player::X, Player::O), None);
}

#[test]
fn test_corner_after_center_taken() {
    let board: Board = "___/_X_/___".parse().unwrap();
    assert_eq!(
        select_move_with_reason(&board, Player::O, Player::X),
        Some((Position::TopLeft, Reason::Corner))
    );

    let board: Board = "O_X/_X_/___".parse().unwrap();
    assert_eq!(
        select_move_with_reason(&board, Player::O, Player::X),
        Some((Position::BottomLeft, Reason::Block))
    );

    let board: Board = "X_O/_O_/___".parse().unwrap();
    assert_eq!(
        select_move_with_reason(&board, Player::X, Player::O),
        Some((Position::BottomLeft, Reason::Block))
    );
}

#[test]
fn test_never_picks_occupied_square() {
    for board in all_boards() {
        for (acting, opponent) in [(Player::X, Player::O), (Player::O, Player::X)] {
            match select_move(&board, acting, opponent) {
                Some(pos) => assert!(board.is_empty(pos), "board {} chose {:?}", board, pos),
                None => assert!(
                    board.squares().iter().all(|s| *s != Square::Empty),
                    "board {} has room but no move",
                    board
                ),
            }
        }
    }
}

#[test]
fn test_heuristic_can_be_forked() {
    // Opposite corners against a center reply lead to a fork the bot can't cover.
    let mut board = Board::new();
    board = board.with_mark(Position::TopLeft, Player::X);
    let reply = select_move(&board, Player::O, Player::X).unwrap();
    assert_eq!(reply, Position::Center);
    board = board.with_mark(reply, Player::O);

    board = board.with_mark(Position::BottomRight, Player::X);
    let reply = select_move(&board, Player::O, Player::X).unwrap();
    assert_eq!(reply, Position::TopRight);
    board = board.with_mark(reply, Player::O);

    board = board.with_mark(Position::BottomLeft, Player::X);
    let reply = select_move(&board, Player::O, Player::X).unwrap();
    assert_eq!(reply, Position::MiddleLeft);
    board = board.with_mark(reply, Player::O);

    board = board.with_mark(Position::BottomCenter, Player::X);
    assert_eq!(
        strictly_tictactoe::evaluate_outcome(&board),
        Some(Player::X)
    );
}
