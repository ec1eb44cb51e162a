//! Tic-tac-toe: board types, rules, the heuristic bot and the session.

pub mod bot;
mod game;
mod position;
pub mod rules;
mod types;

pub use bot::{Reason, select_move, select_move_with_reason};
pub use game::{BOT, HUMAN, Mode, Session, SessionError, Turn};
pub use position::Position;
pub use rules::{LINES, evaluate_outcome, is_draw, is_full};
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
