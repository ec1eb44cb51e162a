//! Keyboard handling: cursor movement and key-to-action mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Play the square under the cursor.
    PlayCursor,
    /// Play a square chosen by digit.
    Play(Position),
    /// Start a new game in the same mode.
    Reset,
    /// Switch between player-vs-player and player-vs-bot.
    ToggleMode,
    /// Leave the game.
    Quit,
}

/// Maps a key event to an action, if it means anything.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key.code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char(c) => Position::from_key(c).map(Action::Play),
        _ => None,
    }
}

/// Moves cursor based on arrow keys. The cursor stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let idx = cursor.to_index();
    let (row, col) = (idx / 3, idx % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
