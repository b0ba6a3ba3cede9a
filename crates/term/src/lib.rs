//! Terminal "game renderer" module.
//!
//! A thin presentation layer: [`GameView`] turns a [`core::GameSnapshot`] into text lines and
//! [`TerminalRenderer`] flushes them to the terminal with crossterm.

pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
