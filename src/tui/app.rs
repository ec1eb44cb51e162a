//! Application state and logic.

use strictly_tictactoe::{GameStatus, Mode, Position, Session, Turn};
use tracing::{debug, info, instrument, warn};

use super::input::{Action, move_cursor};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    last_event: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            session: Session::new(mode),
            cursor: Position::Center,
            last_event: None,
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Describes the most recent move or rejected input.
    pub fn last_event(&self) -> Option<&str> {
        self.last_event.as_deref()
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::Reset => {
                self.session.reset();
                self.last_event = None;
            }
            Action::ToggleMode => {
                self.session.set_mode(self.session.mode().toggle());
                self.last_event = Some(format!("Switched to {}", self.session.mode()));
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        match self.session.play(pos) {
            Ok(turn) => self.last_event = Some(describe(&turn)),
            Err(e) => {
                // Rejected input leaves the game untouched.
                warn!(error = %e, position = %pos, "Move ignored");
                self.last_event = Some(e.to_string());
            }
        }
    }
}

fn describe(turn: &Turn) -> String {
    let mut text = format!("Played {}", turn.played);
    if let Some(reply) = turn.reply {
        text.push_str(&format!(", bot answered {}", reply));
    }
    if turn.status != GameStatus::InProgress {
        text.push_str(". Press 'r' to play again.");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_play_cursor_in_bot_mode() {
        let mut app = App::new(Mode::PlayerVsBot);
        app.handle_action(Action::MoveCursor(KeyCode::Up));
        app.handle_action(Action::PlayCursor);

        let board = app.session().board();
        assert!(!board.is_empty(Position::TopCenter));
        // Bot takes the free center.
        assert!(!board.is_empty(Position::Center));
        assert_eq!(
            app.last_event(),
            Some("Played Top-center, bot answered Center")
        );
    }

    #[test]
    fn test_occupied_square_is_reported() {
        let mut app = App::new(Mode::PlayerVsPlayer);
        app.handle_action(Action::Play(Position::TopLeft));
        app.handle_action(Action::Play(Position::TopLeft));
        assert_eq!(app.last_event(), Some("Top-left is already occupied"));
    }

    #[test]
    fn test_toggle_mode_resets_board() {
        let mut app = App::new(Mode::PlayerVsPlayer);
        app.handle_action(Action::Play(Position::TopLeft));
        app.handle_action(Action::ToggleMode);
        assert_eq!(app.session().mode(), Mode::PlayerVsBot);
        assert_eq!(app.session().board(), &strictly_tictactoe::Board::new());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Mode::PlayerVsPlayer);
        assert!(!app.should_quit());
        app.handle_action(Action::Quit);
        assert!(app.should_quit());
    }
}
