//! Snapshot module - read-only view of a tick for renderers

use crate::board::Bounds;
use crate::catalog::PieceCells;
use crate::piece::{ActivePiece, PiecePhase};
use crate::types::{Cell, Offset, PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub position: Offset,
    /// Absolute board cells
    pub cells: PieceCells,
    pub phase: PiecePhase,
}

impl ActiveSnapshot {
    pub fn new(piece: &ActivePiece, phase: PiecePhase) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            position: piece.position,
            cells: piece.absolute_cells(),
            phase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimersSnapshot {
    pub step_ms: u32,
    pub lock_ms: u32,
}

/// What a renderer should draw in one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellView {
    Empty,
    Locked(PieceKind),
    Active(PieceKind),
    Ghost,
}

/// Read-only view of one tick, for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub bounds: Bounds,
    /// Locked cells, top row first, left to right
    pub rows: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    /// Absolute cells of the landing preview
    pub ghost: Option<PieceCells>,
    pub timers: TimersSnapshot,
    pub pieces_spawned: u32,
    pub game_overs: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    /// Resolve board coordinates to a drawable cell. Active cells win over the ghost, the ghost
    /// wins over empty cells.
    pub fn view(&self, x: i32, y: i32) -> CellView {
        if let Some(active) = &self.active {
            if active.cells.contains(&(x, y)) {
                return CellView::Active(active.kind);
            }
        }

        if !self.bounds.contains(x, y) {
            return CellView::Empty;
        }
        let row = (self.bounds.y_max() - 1 - y) as usize;
        let col = (x - self.bounds.x_min) as usize;
        if let Some(kind) = self.rows[row][col] {
            return CellView::Locked(kind);
        }

        match &self.ghost {
            Some(cells) if cells.contains(&(x, y)) => CellView::Ghost,
            _ => CellView::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;
    use std::collections::HashSet;

    #[test]
    fn test_active_snapshots_are_hashable() {
        let mut state = GameState::default();
        state.spawn_kind(PieceKind::T);
        let falling = state.snapshot().active.unwrap();
        assert_eq!(falling.phase, PiecePhase::Falling);

        while state.try_move(0, -1) {}
        let grounded = state.snapshot().active.unwrap();
        assert_eq!(grounded.phase, PiecePhase::Grounded);

        let seen: HashSet<ActiveSnapshot> = [falling, grounded, falling].into_iter().collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_view_prefers_active_over_ghost() {
        let mut state = GameState::default();
        state.spawn_kind(PieceKind::O);
        state.board_mut().set(4, -10, Some(PieceKind::Z));
        let snap = state.snapshot();

        assert_eq!(snap.view(-1, 8), CellView::Active(PieceKind::O));
        assert_eq!(snap.view(-1, -10), CellView::Ghost);
        assert_eq!(snap.view(4, -10), CellView::Locked(PieceKind::Z));
        assert_eq!(snap.view(4, 0), CellView::Empty);
        assert_eq!(snap.view(40, 0), CellView::Empty);
    }
}
