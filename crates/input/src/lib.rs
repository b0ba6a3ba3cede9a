//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and buffers them between ticks.
//! Commands are edge-triggered: holding a key yields one command per press, terminal auto-repeat
//! is ignored.

pub mod buffer;
pub mod map;

pub use blockfall_types as types;

pub use buffer::CommandBuffer;
pub use map::{handle_key_event, should_quit};
