//! Game session: the mutable state a front end owns between inputs.
//!
//! A [`Session`] holds the board, whose turn it is, the derived status
//! and the play mode. Every input goes through [`Session::play`], which
//! applies the move, re-evaluates the board and, in player-vs-bot mode,
//! answers immediately with the bot's reply.

use super::bot::select_move;
use super::position::Position;
use super::types::{Board, GameStatus, Player, Square};
use derive_more::{Display, Error};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// The human always plays this mark against the bot.
pub const HUMAN: Player = Player::X;

/// The bot always plays this mark.
pub const BOT: Player = Player::O;

/// Who sits on the other side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Two humans take turns on one keyboard.
    #[default]
    #[serde(rename = "pvp")]
    #[strum(serialize = "pvp", to_string = "Player vs Player")]
    PlayerVsPlayer,
    /// A human plays X against the bot playing O.
    #[serde(rename = "pvb")]
    #[strum(serialize = "pvb", to_string = "Player vs Bot")]
    PlayerVsBot,
}

impl Mode {
    /// Switches to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::PlayerVsPlayer => Mode::PlayerVsBot,
            Mode::PlayerVsBot => Mode::PlayerVsPlayer,
        }
    }
}

/// Reasons an input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,
    /// The chosen square is taken.
    #[display("{_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),
}

/// What happened in response to one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Square the human played.
    pub played: Position,
    /// The bot's reply, if it moved.
    pub reply: Option<Position>,
    /// Status after the turn.
    pub status: GameStatus,
}

/// Mutable game state owned by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    current_player: Player,
    status: GameStatus,
    mode: Mode,
}

impl Session {
    /// Creates a fresh session; X moves first.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            mode,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the play mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Clears the board and gives the move back to X. Mode is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(mode = %self.mode, "Resetting game");
        *self = Self::new(self.mode);
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        info!(%mode, "Switching mode");
        *self = Self::new(mode);
    }

    /// Plays `pos` for the side whose turn it is.
    ///
    /// In player-vs-bot mode the human is always X and the bot's reply is
    /// applied before returning, so X is to move again afterwards.
    ///
    /// # Errors
    ///
    /// Rejects input once the game is over and on an occupied square. The
    /// session is unchanged on error.
    #[instrument(skip(self), fields(mode = %self.mode, player = %self.current_player))]
    pub fn play(&mut self, pos: Position) -> Result<Turn, SessionError> {
        if self.status.is_over() {
            return Err(SessionError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(SessionError::SquareOccupied(pos));
        }

        let mover = self.current_player;
        self.place(pos, mover);
        if self.status.is_over() || self.mode == Mode::PlayerVsPlayer {
            return Ok(self.turn(pos, None));
        }

        let reply = select_move(&self.board, BOT, HUMAN);
        if let Some(bot_pos) = reply {
            self.place(bot_pos, BOT);
        }
        Ok(self.turn(pos, reply))
    }

    /// Places a mark, refreshes the status, and passes the turn on.
    fn place(&mut self, pos: Position, player: Player) {
        self.board.set(pos, Square::Occupied(player));
        self.status = GameStatus::from_board(&self.board);
        if !self.status.is_over() {
            self.current_player = player.opponent();
        }
        debug!(%player, position = %pos, status = ?self.status, "Mark placed");
    }

    fn turn(&self, played: Position, reply: Option<Position>) -> Turn {
        Turn {
            played,
            reply,
            status: self.status,
        }
    }

    /// One-line status for display.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Current player: {}", self.current_player),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::Won(player) => format!("{} wins", player),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
