//! Key bindings and cursor movement over the number grid.
//!
//! The grid is laid out like a phone keypad:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```

use crossterm::event::KeyCode;
use strictly_stars::Number;
use tracing::instrument;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle a number directly.
    Select(Number),
    /// Toggle the number under the cursor.
    SelectCursor,
    /// Move the cursor.
    Move(KeyCode),
    /// Start a new session.
    Restart,
    /// Leave the game.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key to a command.
#[instrument]
pub fn command_for(key: KeyCode) -> Command {
    match key {
        KeyCode::Char(c) if c.is_ascii_digit() => c
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(|d| Number::new(d).ok())
            .map_or(Command::Ignore, Command::Select),
        KeyCode::Enter | KeyCode::Char(' ') => Command::SelectCursor,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Command::Move(key),
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => Command::Ignore,
    }
}

/// Moves the cursor one cell, staying put at the grid edges.
#[instrument]
pub fn move_cursor(cursor: Number, key: KeyCode) -> Number {
    let index = cursor.get() - 1;
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        _ => (row, col),
    };

    Number::new(row * 3 + col + 1).unwrap_or(cursor)
}
