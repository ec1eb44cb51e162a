//! Strictly Tic-Tac-Toe library - board rules and a rule-based opponent
//!
//! The core is two pure functions over a [`Board`] snapshot:
//!
//! - [`evaluate_outcome`] reports the winner of a board, if any.
//! - [`select_move`] picks the bot's next square with a fixed, greedy
//!   priority: win, block, center, corner, first free.
//!
//! [`Session`] wraps them in the mutable state a front end keeps between
//! inputs, including the player-vs-bot turn where the bot answers at once.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Player, Position, evaluate_outcome, select_move};
//!
//! let board: Board = "XX_/OO_/___".parse().unwrap();
//! assert_eq!(evaluate_outcome(&board), None);
//! assert_eq!(select_move(&board, Player::O, Player::X), Some(Position::MiddleRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod report;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOT, Board, BoardParseError, GameStatus, HUMAN, LINES, Mode, Player, Position, Reason,
    Session, SessionError, Square, Turn, evaluate_outcome, is_draw, is_full, select_move,
    select_move_with_reason,
};

// Crate-level exports - Command output
pub use report::{evaluation_json, evaluation_text, suggestion_text};
