//! Ghost piece - where the active piece would come to rest
//!
//! Read-only projection recomputed every tick from the active piece and the locked cells.

use crate::board::Board;
use crate::catalog::PieceCells;
use crate::collision::{absolute, is_valid};
use crate::piece::ActivePiece;
use crate::types::Offset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ghost {
    pub position: Offset,
    pub cells: PieceCells,
}

impl Ghost {
    /// Absolute board cells of the landing preview
    pub fn absolute_cells(&self) -> PieceCells {
        absolute(&self.cells, self.position)
    }
}

/// Scan from the piece's row down to one below the floor, keeping the lowest row that is still
/// valid before the first blocked one.
pub fn project(piece: &ActivePiece, board: &Board) -> Ghost {
    let (x, start) = piece.position;
    let bottom = board.bounds().y_min - 1;
    let mut position = piece.position;

    for row in (bottom..=start).rev() {
        if is_valid(&piece.cells, (x, row), board) {
            position = (x, row);
        } else {
            break;
        }
    }

    Ghost {
        position,
        cells: piece.cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Bounds;
    use crate::catalog::ShapeCatalog;
    use crate::types::PieceKind;

    #[test]
    fn test_ghost_on_empty_board() {
        let board = Board::new(Bounds::centered(10, 20));
        let shape = ShapeCatalog::standard().get(PieceKind::T).unwrap().clone();
        let piece = ActivePiece::new(&shape, (-1, 8), 1000);

        let ghost = project(&piece, &board);
        assert_eq!(ghost.position, (-1, -10));
        assert_eq!(ghost.cells, piece.cells);
    }

    #[test]
    fn test_ghost_rests_on_stack() {
        let mut board = Board::new(Bounds::centered(10, 20));
        board.set(-1, 0, Some(PieceKind::I));
        let shape = ShapeCatalog::standard().get(PieceKind::T).unwrap().clone();
        let piece = ActivePiece::new(&shape, (-1, 8), 1000);

        let ghost = project(&piece, &board);
        assert_eq!(ghost.position, (-1, 1));
        assert!(ghost.absolute_cells().contains(&(-1, 1)));
    }

    #[test]
    fn test_ghost_matches_hard_drop() {
        let mut board = Board::new(Bounds::centered(10, 20));
        board.set(2, -6, Some(PieceKind::L));
        let catalog = ShapeCatalog::standard();
        for shape in catalog.iter() {
            let mut piece = ActivePiece::new(shape, (1, 7), 1000);
            let ghost = project(&piece, &board);
            piece.drop_to_floor(&board);
            assert_eq!(ghost.position, piece.position, "{:?}", shape.kind());
        }
    }
}
