//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current mark.
    Select(Position),
    /// Move the highlight.
    MoveCursor(Position),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action, given where the cursor is.
pub fn action_for(key: KeyEvent, cursor: Position) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select(cursor)),
        KeyCode::Char(c) if c.is_ascii_digit() => c
            .to_digit(10)
            .and_then(|d| Position::from_number(d as usize))
            .map(Action::Select),
        code => {
            let next = move_cursor(cursor, code);
            (next != cursor).then_some(Action::MoveCursor(next))
        }
    }
}

/// Moves cursor based on arrow keys (or h/j/k/l). Stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Left | KeyCode::Char('h') => col
            .checked_sub(1)
            .and_then(|col| Position::from_row_col(row, col)),
        KeyCode::Right | KeyCode::Char('l') => Position::from_row_col(row, col + 1),
        KeyCode::Up | KeyCode::Char('k') => row
            .checked_sub(1)
            .and_then(|row| Position::from_row_col(row, col)),
        KeyCode::Down | KeyCode::Char('j') => Position::from_row_col(row + 1, col),
        _ => None,
    };

    target.unwrap_or(cursor)
}
