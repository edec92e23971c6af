//! Key mapping from terminal events to commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a command. Unrecognized keys map to `None` and are
/// dropped by the caller.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(Command::Rotate)
        }

        // Quit
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),

        _ => None,
    }
}
