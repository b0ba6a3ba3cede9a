//! Collision detection - walls, floor, ceiling and locked cells

use crate::board::Board;
use crate::types::Offset;

/// Can cells at `offsets` sit with their origin at `position`?
///
/// Fails if any absolute cell lies outside the board bounds or is already occupied.
#[inline]
pub fn is_valid(offsets: &[Offset], position: Offset, board: &Board) -> bool {
    let (px, py) = position;
    offsets
        .iter()
        .all(|&(dx, dy)| board.is_free(px + dx, py + dy))
}

/// Absolute board cells for offsets placed at `position`
pub fn absolute<const N: usize>(offsets: &[Offset; N], position: Offset) -> [Offset; N] {
    let (px, py) = position;
    offsets.map(|(dx, dy)| (px + dx, py + dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Bounds;
    use crate::catalog::standard_cells;
    use crate::types::PieceKind;

    fn board() -> Board {
        Board::new(Bounds::centered(10, 20))
    }

    #[test]
    fn test_no_collision_empty_board() {
        let board = board();
        assert!(is_valid(&standard_cells(PieceKind::T), (0, 0), &board));
    }

    #[test]
    fn test_collision_with_walls() {
        let board = board();
        let t = standard_cells(PieceKind::T);
        // T spans x-1..=x+1
        assert!(is_valid(&t, (-4, 0), &board));
        assert!(!is_valid(&t, (-5, 0), &board));
        assert!(is_valid(&t, (3, 0), &board));
        assert!(!is_valid(&t, (4, 0), &board));
    }

    #[test]
    fn test_collision_with_floor_and_ceiling() {
        let board = board();
        let t = standard_cells(PieceKind::T);
        assert!(is_valid(&t, (0, -10), &board));
        assert!(!is_valid(&t, (0, -11), &board));
        assert!(is_valid(&t, (0, 8), &board));
        assert!(!is_valid(&t, (0, 9), &board));
    }

    #[test]
    fn test_collision_with_locked_cell() {
        let mut board = board();
        board.set(1, 0, Some(PieceKind::O));
        let t = standard_cells(PieceKind::T);
        assert!(!is_valid(&t, (0, 0), &board));
        assert!(is_valid(&t, (0, 1), &board));
    }

    #[test]
    fn test_absolute_cells() {
        let cells = absolute(&[(0, 1), (-1, 0)], (3, -2));
        assert_eq!(cells, [(3, -1), (2, -2)]);
    }
}
