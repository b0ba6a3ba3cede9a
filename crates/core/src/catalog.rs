//! Shape catalog - tetromino definitions and SRS kick tables
//!
//! Each kind carries its spawn-orientation cell offsets, its pivot style and a kick table indexed
//! by `[transition][alternative]`. Offsets are relative to the piece origin with `y` pointing up.
//! Reference: https://tetris.wiki/SRS

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{Offset, PieceKind, PivotStyle, KICK_ALTERNATIVES, KICK_TRANSITIONS, PIECE_CELLS};

/// Cell offsets of a piece, relative to its origin
pub type PieceCells = [Offset; PIECE_CELLS];

/// Unvalidated shape definition, as it appears in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub cells: Vec<Offset>,
    pub pivot: PivotStyle,
    pub kicks: Vec<Vec<Offset>>,
}

/// Immutable definition of one tetromino kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TetrominoShape {
    kind: PieceKind,
    cells: PieceCells,
    pivot: PivotStyle,
    kicks: Vec<Vec<Offset>>,
}

impl TetrominoShape {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Spawn-orientation cell offsets
    pub fn cells(&self) -> PieceCells {
        self.cells
    }

    pub fn pivot(&self) -> PivotStyle {
        self.pivot
    }

    /// Kick alternatives for one transition row, tried in order
    pub fn kicks(&self, transition: usize) -> &[Offset] {
        &self.kicks[transition]
    }

    /// Number of transition rows in the kick table
    pub fn kick_rows(&self) -> usize {
        self.kicks.len()
    }

    fn from_def(def: ShapeDef) -> Result<Self, ConfigError> {
        let cells = PieceCells::try_from(def.cells.as_slice()).map_err(|_| {
            ConfigError::WrongCellCount {
                kind: def.kind,
                count: def.cells.len(),
                expected: PIECE_CELLS,
            }
        })?;

        let columns = def.kicks.first().map_or(0, Vec::len);
        if columns == 0 || def.kicks.iter().any(|row| row.len() != columns) {
            return Err(ConfigError::MalformedKickTable { kind: def.kind });
        }

        Ok(Self {
            kind: def.kind,
            cells,
            pivot: def.pivot,
            kicks: def.kicks,
        })
    }
}

/// All tetromino kinds available to the spawner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: Vec<TetrominoShape>,
}

impl ShapeCatalog {
    /// Validate a set of definitions.
    ///
    /// The catalog must be non-empty, kinds unique, every kind exactly four cells, and every kick
    /// table rectangular with the same dimensions across kinds.
    pub fn new(defs: Vec<ShapeDef>) -> Result<Self, ConfigError> {
        if defs.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut shapes: Vec<TetrominoShape> = Vec::with_capacity(defs.len());
        for def in defs {
            if shapes.iter().any(|s| s.kind == def.kind) {
                return Err(ConfigError::DuplicateKind { kind: def.kind });
            }
            let shape = TetrominoShape::from_def(def)?;

            if let Some(first) = shapes.first() {
                let (rows, columns) = (shape.kicks.len(), shape.kicks[0].len());
                let (expected_rows, expected_columns) = (first.kicks.len(), first.kicks[0].len());
                if rows != expected_rows || columns != expected_columns {
                    return Err(ConfigError::InconsistentKickTable {
                        kind: shape.kind,
                        rows,
                        columns,
                        expected_rows,
                        expected_columns,
                    });
                }
            }
            shapes.push(shape);
        }

        Ok(Self { shapes })
    }

    /// The seven guideline tetrominoes with SRS kick data
    pub fn standard() -> Self {
        Self {
            shapes: standard_defs()
                .into_iter()
                .map(|def| TetrominoShape {
                    kind: def.kind,
                    cells: [def.cells[0], def.cells[1], def.cells[2], def.cells[3]],
                    pivot: def.pivot,
                    kicks: def.kicks,
                })
                .collect(),
        }
    }

    pub fn get(&self, kind: PieceKind) -> Option<&TetrominoShape> {
        self.shapes.iter().find(|s| s.kind == kind)
    }

    /// Shape at catalog position `index`
    pub fn at(&self, index: usize) -> Option<&TetrominoShape> {
        self.shapes.get(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TetrominoShape> {
        self.shapes.iter()
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// SRS kick table layout: `[transition][alternative]`
pub type KickTable = [[Offset; KICK_ALTERNATIVES]; KICK_TRANSITIONS];

/// I piece kicks
pub const I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

/// Kicks shared by J, L, O, S, T and Z
pub const JLOSTZ_KICKS: KickTable = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// Spawn-orientation cells for a standard kind
pub fn standard_cells(kind: PieceKind) -> PieceCells {
    match kind {
        PieceKind::I => [(-1, 1), (0, 1), (1, 1), (2, 1)],
        PieceKind::J => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::O => [(0, 1), (1, 1), (0, 0), (1, 0)],
        PieceKind::S => [(0, 1), (1, 1), (-1, 0), (0, 0)],
        PieceKind::T => [(0, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
    }
}

/// Standard definitions, in [`PieceKind::ALL`] order
pub fn standard_defs() -> Vec<ShapeDef> {
    PieceKind::ALL
        .iter()
        .map(|&kind| {
            let (pivot, table) = match kind {
                PieceKind::I => (PivotStyle::HalfOffset, &I_KICKS),
                PieceKind::O => (PivotStyle::HalfOffset, &JLOSTZ_KICKS),
                _ => (PivotStyle::Integer, &JLOSTZ_KICKS),
            };
            ShapeDef {
                kind,
                cells: standard_cells(kind).to_vec(),
                pivot,
                kicks: table.iter().map(|row| row.to_vec()).collect(),
            }
        })
        .collect()
}
