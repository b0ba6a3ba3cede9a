//! Configuration errors.
//!
//! Everything else the simulation reports (blocked moves, failed rotations, blocked spawns) is a
//! normal outcome and never goes through this type.

use crate::types::PieceKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    NonPositiveBoard { width: i32, height: i32 },

    #[error("board of {width}x{height} exceeds {max} cells")]
    BoardTooLarge { width: i32, height: i32, max: i32 },

    #[error("piece {kind:?} does not fit at spawn position {spawn:?} on an empty board")]
    SpawnOutOfBounds { kind: PieceKind, spawn: (i32, i32) },

    #[error("{name} must be greater than zero")]
    ZeroDelay { name: &'static str },

    #[error("shape catalog is empty")]
    EmptyCatalog,

    #[error("piece {kind:?} appears more than once in the catalog")]
    DuplicateKind { kind: PieceKind },

    #[error("piece {kind:?} has {count} cells, expected {expected}")]
    WrongCellCount {
        kind: PieceKind,
        count: usize,
        expected: usize,
    },

    #[error("piece {kind:?} has an empty or ragged kick table")]
    MalformedKickTable { kind: PieceKind },

    #[error("piece {kind:?} kick table is {rows}x{columns}, expected {expected_rows}x{expected_columns}")]
    InconsistentKickTable {
        kind: PieceKind,
        rows: usize,
        columns: usize,
        expected_rows: usize,
        expected_columns: usize,
    },

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
