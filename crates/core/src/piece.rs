//! Active piece - the tetromino under player control
//!
//! The piece owns a copy of its cell offsets. Rotations replace that copy only when they succeed,
//! so a failed rotation can never leave a half-turned shape behind.
//!
//! Timing follows the host loop: the step timer counts down to the next forced downward move,
//! the lock timer counts up and is reset by every successful move or rotation.

use crate::board::Board;
use crate::catalog::{PieceCells, TetrominoShape};
use crate::collision::{absolute, is_valid};
use crate::rotation::try_rotate;
use crate::types::{Direction, Offset, PieceKind, Rotation};

/// Where the piece stands with respect to gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PiecePhase {
    /// Can still move down
    Falling,
    /// Resting on the floor or a locked cell; the lock timer is running
    Grounded,
}

/// Outcome of a gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved down by one row
    Moved,
    /// Could not move down, lock delay not yet spent
    Grounded,
    /// Could not move down and the lock delay has elapsed
    Lock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub position: Offset,
    pub cells: PieceCells,
    pub rotation: Rotation,
    /// Milliseconds until the next forced step
    pub step_timer_ms: u32,
    /// Milliseconds since the last successful move, rotation or spawn
    pub lock_timer_ms: u32,
}

impl ActivePiece {
    /// Fresh piece at `position` in spawn orientation
    pub fn new(shape: &TetrominoShape, position: Offset, step_delay_ms: u32) -> Self {
        Self {
            kind: shape.kind(),
            position,
            cells: shape.cells(),
            rotation: Rotation::North,
            step_timer_ms: step_delay_ms,
            lock_timer_ms: 0,
        }
    }

    /// Absolute board cells currently covered
    pub fn absolute_cells(&self) -> PieceCells {
        absolute(&self.cells, self.position)
    }

    /// Does the piece fit where it is?
    pub fn is_valid(&self, board: &Board) -> bool {
        is_valid(&self.cells, self.position, board)
    }

    /// Check if piece can move by (dx, dy)
    pub fn can_move(&self, dx: i32, dy: i32, board: &Board) -> bool {
        let (x, y) = self.position;
        is_valid(&self.cells, (x + dx, y + dy), board)
    }

    pub fn is_grounded(&self, board: &Board) -> bool {
        !self.can_move(0, -1, board)
    }

    pub fn phase(&self, board: &Board) -> PiecePhase {
        if self.is_grounded(board) {
            PiecePhase::Grounded
        } else {
            PiecePhase::Falling
        }
    }

    /// Try to move the piece; on success the lock timer restarts
    pub fn try_move(&mut self, dx: i32, dy: i32, board: &Board) -> bool {
        if !self.can_move(dx, dy, board) {
            return false;
        }
        self.position.0 += dx;
        self.position.1 += dy;
        self.lock_timer_ms = 0;
        true
    }

    /// Try to rotate with wall kicks; on success the lock timer restarts
    pub fn try_rotate(&mut self, shape: &TetrominoShape, direction: Direction, board: &Board) -> bool {
        match try_rotate(shape, self.rotation, &self.cells, self.position, direction, board) {
            Some(rotated) => {
                self.rotation = rotated.rotation;
                self.cells = rotated.cells;
                self.position = rotated.position;
                self.lock_timer_ms = 0;
                true
            }
            None => false,
        }
    }

    /// Move down until blocked and return the number of rows travelled
    pub fn drop_to_floor(&mut self, board: &Board) -> u32 {
        let mut distance = 0;
        while self.try_move(0, -1, board) {
            distance += 1;
        }
        distance
    }

    /// Advance both timers by `elapsed_ms`; returns true when a step is due
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.lock_timer_ms = self.lock_timer_ms.saturating_add(elapsed_ms);
        self.step_timer_ms = self.step_timer_ms.saturating_sub(elapsed_ms);
        self.step_timer_ms == 0
    }

    /// Forced gravity step: restart the step timer, try to move down, and report whether the
    /// piece must lock
    pub fn step(&mut self, board: &Board, step_delay_ms: u32, lock_delay_ms: u32) -> StepOutcome {
        self.step_timer_ms = step_delay_ms;

        if self.try_move(0, -1, board) {
            StepOutcome::Moved
        } else if self.lock_timer_ms >= lock_delay_ms {
            StepOutcome::Lock
        } else {
            StepOutcome::Grounded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Bounds;
    use crate::catalog::ShapeCatalog;

    fn setup(kind: PieceKind) -> (Board, ActivePiece, TetrominoShape) {
        let board = Board::new(Bounds::centered(10, 20));
        let shape = ShapeCatalog::standard().get(kind).unwrap().clone();
        let piece = ActivePiece::new(&shape, (-1, 8), 1000);
        (board, piece, shape)
    }

    #[test]
    fn test_new_piece() {
        let (_, piece, shape) = setup(PieceKind::T);
        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!(piece.cells, shape.cells());
        assert_eq!(piece.step_timer_ms, 1000);
        assert_eq!(piece.lock_timer_ms, 0);
    }

    #[test]
    fn test_try_move_resets_lock_timer() {
        let (board, mut piece, _) = setup(PieceKind::T);
        piece.lock_timer_ms = 300;

        assert!(piece.try_move(1, 0, &board));
        assert_eq!(piece.position, (0, 8));
        assert_eq!(piece.lock_timer_ms, 0);

        piece.lock_timer_ms = 300;
        // T at y=8 reaches the top row already
        assert!(!piece.try_move(0, 1, &board));
        assert_eq!(piece.position, (0, 8));
        assert_eq!(piece.lock_timer_ms, 300);
    }

    #[test]
    fn test_drop_to_floor() {
        let (board, mut piece, _) = setup(PieceKind::O);
        assert_eq!(piece.drop_to_floor(&board), 18);
        assert_eq!(piece.position, (-1, -10));
        assert_eq!(piece.phase(&board), PiecePhase::Grounded);
    }

    #[test]
    fn test_step_outcomes() {
        let (board, mut piece, _) = setup(PieceKind::O);
        assert_eq!(piece.phase(&board), PiecePhase::Falling);
        assert_eq!(piece.step(&board, 1000, 500), StepOutcome::Moved);
        assert_eq!(piece.step_timer_ms, 1000);

        piece.drop_to_floor(&board);
        piece.lock_timer_ms = 499;
        assert_eq!(piece.step(&board, 1000, 500), StepOutcome::Grounded);
        piece.lock_timer_ms = 500;
        assert_eq!(piece.step(&board, 1000, 500), StepOutcome::Lock);
    }

    #[test]
    fn test_advance_timers() {
        let (_, mut piece, _) = setup(PieceKind::S);
        assert!(!piece.advance(600));
        assert_eq!(piece.step_timer_ms, 400);
        assert_eq!(piece.lock_timer_ms, 600);
        assert!(piece.advance(400));
        assert!(piece.advance(16));
    }

    #[test]
    fn test_failed_rotation_keeps_state() {
        let (mut board, mut piece, shape) = setup(PieceKind::J);
        let bounds = board.bounds();
        let own = piece.absolute_cells();
        for y in bounds.y_min..bounds.y_max() {
            for x in bounds.x_min..bounds.x_max() {
                if !own.contains(&(x, y)) {
                    board.set(x, y, Some(PieceKind::Z));
                }
            }
        }
        piece.lock_timer_ms = 200;
        let before = piece;

        assert!(!piece.try_rotate(&shape, Direction::Clockwise, &board));
        assert!(!piece.try_rotate(&shape, Direction::CounterClockwise, &board));
        assert_eq!(piece, before);
    }
}
