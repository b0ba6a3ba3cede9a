//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data, usable from the simulation, the input layer and the renderer.
//!
//! # Coordinates
//!
//! The board is centered on the origin with `y` growing upwards:
//!
//! - **Width**: 10 columns by default, `x` in `-5..5`
//! - **Height**: 20 rows by default, `y` in `-10..10`
//! - **Spawn position**: (-1, 8)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host loop interval (~60 FPS) |
//! | `STEP_DELAY_MS` | 1000 | Time between forced downward steps |
//! | `LOCK_DELAY_MS` | 500 | Grace period for a grounded piece |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Direction, PieceKind, Rotation};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! assert_eq!(Rotation::North.turn(Direction::Clockwise), Rotation::East);
//! assert_eq!(Rotation::North.turn(Direction::CounterClockwise), Rotation::West);
//!
//! assert_eq!(Command::TICK_ORDER[0], Command::RotateCcw);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells
pub const BOARD_WIDTH: i32 = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: i32 = 20;

/// Default spawn origin for new pieces
pub const SPAWN_POSITION: Offset = (-1, 8);

/// Host loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default time between forced downward steps
pub const STEP_DELAY_MS: u32 = 1000;

/// Default lock delay for a grounded piece
pub const LOCK_DELAY_MS: u32 = 500;

/// Number of cells in every tetromino
pub const PIECE_CELLS: usize = 4;

/// Rows in a standard SRS kick table (two transitions per orientation)
pub const KICK_TRANSITIONS: usize = 8;

/// Alternatives per row in a standard SRS kick table
pub const KICK_ALTERNATIVES: usize = 5;

/// Integer 2D coordinate: a board cell, a piece origin, or a cell offset from that origin
pub type Offset = (i32, i32);

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Occupied, tagged with the kind that locked there
pub type Cell = Option<PieceKind>;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// Turn direction for a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// +1 for clockwise, -1 for counter-clockwise
    pub fn sign(&self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North**: Spawn orientation, index 0
/// - **East**: Rotated 90° clockwise, index 1
/// - **South**: Rotated 180°, index 2
/// - **West**: Rotated 90° counter-clockwise, index 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Cyclic index in `0..4`
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from any index, wrapping into `0..4`
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotation reached by turning once in `direction`
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{Direction, Rotation};
    ///
    /// assert_eq!(Rotation::West.turn(Direction::Clockwise), Rotation::North);
    /// assert_eq!(Rotation::South.turn(Direction::CounterClockwise), Rotation::East);
    /// ```
    pub fn turn(&self, direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => Self::from_index(self.index() + 1),
            Direction::CounterClockwise => Self::from_index(self.index() + 3),
        }
    }
}

/// Where a kind's rotation pivot sits
///
/// - **HalfOffset**: pivot on a cell corner (O and I); offsets are shifted by half a cell
///   before rotating and the result is rounded up
/// - **Integer**: pivot on a cell center; the result is rounded to nearest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotStyle {
    HalfOffset,
    Integer,
}

/// Discrete commands produced by the input provider, applied at most once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop to the lowest valid row and lock immediately
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl Command {
    /// Number of distinct commands
    pub const COUNT: usize = 6;

    /// Order in which a tick applies the commands it received
    pub const TICK_ORDER: [Command; Command::COUNT] = [
        Command::RotateCcw,
        Command::RotateCw,
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::HardDrop,
    ];
}

/// Core-side event emitted after a lock or a blocked spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoreLastEvent {
    pub locked: bool,
    pub lines_cleared: u32,
    pub game_over: bool,
}
