//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board) snapshot. Rules never
//! mutate state; the session applies moves and asks the rules what the
//! resulting board means.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, evaluate_outcome};
