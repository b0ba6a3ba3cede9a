//! Key bindings: arrows move, Q and E rotate, space hard-drops.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to its game command, if it has one.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Command::RotateCcw),
            'e' => Some(Command::RotateCw),
            _ => None,
        },
        _ => None,
    }
}

/// Esc or Ctrl-C ends the session.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
