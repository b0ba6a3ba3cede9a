//! Per-tick command buffer.
//!
//! Collects commands from key presses between two ticks and hands them to the game once.
//! Each command is kept at most once per tick.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::Command;

#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pending: ArrayVec<Command, { Command::COUNT }>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command unless it is already pending
    pub fn push(&mut self, command: Command) -> bool {
        if self.pending.contains(&command) {
            return false;
        }
        self.pending.push(command);
        true
    }

    /// Queue the command for a key event; only presses count, repeats and releases are ignored
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let command = handle_key_event(key)?;
        self.push(command);
        Some(command)
    }

    pub fn pending(&self) -> &[Command] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued since the last tick
    pub fn drain(&mut self) -> ArrayVec<Command, { Command::COUNT }> {
        std::mem::take(&mut self.pending)
    }
}
