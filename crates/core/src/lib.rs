//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the simulation: board occupancy, collision testing, SRS rotation with
//! wall kicks, the active piece state machine, line clearing and the landing preview.
//! It has **zero dependencies** on terminals or I/O beyond reading a configuration file:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Time is fed in explicitly through [`GameState::tick`]
//! - **Portable**: Runs headless, in a terminal, or behind any other renderer
//!
//! # Module Structure
//!
//! - [`catalog`]: Tetromino shape definitions and SRS kick tables
//! - [`board`]: Centered grid with occupancy, full-row detection and row collapse
//! - [`collision`]: Validity of a set of cells at a candidate position
//! - [`rotation`]: Rotation matrix and kick-table resolution
//! - [`piece`]: Active piece movement and timers
//! - [`game_state`]: Spawning, per-tick orchestration, locking and line clears
//! - [`ghost`]: Landing preview
//! - [`config`]: Configuration loading and validation
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Command, PieceKind};
//!
//! let mut game = GameState::default();
//! game.spawn_kind(PieceKind::T);
//!
//! game.tick(16, &[Command::MoveRight, Command::RotateCw]);
//! game.tick(16, &[Command::HardDrop]);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! - **Step delay**: 1000ms between forced downward moves
//! - **Lock delay**: 500ms a grounded piece may keep moving before it locks
//!
//! Both are per-session configuration; see [`config::GameConfig`].

pub mod board;
pub mod catalog;
pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod ghost;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Bounds};
pub use catalog::{ShapeCatalog, ShapeDef, TetrominoShape};
pub use config::{GameConfig, Rules};
pub use error::ConfigError;
pub use game_state::GameState;
pub use ghost::Ghost;
pub use piece::{ActivePiece, PiecePhase, StepOutcome};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, CellView, GameSnapshot};
