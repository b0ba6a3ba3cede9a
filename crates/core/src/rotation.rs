//! SRS rotation with wall kicks
//!
//! Offsets are rotated on the fly with a 90° rotation matrix instead of being looked up per
//! orientation. Kinds with a half-offset pivot (O and I) shift every offset by half a cell before
//! rotating and round up afterwards; the rest round to nearest.
//!
//! A rotation first tries the turned shape where it is, then each kick of the transition row in
//! order. The first valid placement wins. The caller's cells are never touched: on success the
//! rotated copy is returned, on failure nothing is.

use crate::board::Board;
use crate::catalog::{PieceCells, TetrominoShape};
use crate::collision::is_valid;
use crate::types::{Direction, Offset, PivotStyle, Rotation};

/// Clockwise 90° rotation matrix `[cos, sin, -sin, cos]` for a y-up grid
pub const ROTATION_MATRIX: [f32; 4] = [0.0, 1.0, -1.0, 0.0];

/// Wrap `input` into `min..max`
pub fn wrap(input: i32, min: i32, max: i32) -> i32 {
    min + (input - min).rem_euclid(max - min)
}

/// Rotate every offset once in `direction` around the pivot implied by `pivot`
pub fn rotate_cells(cells: &PieceCells, pivot: PivotStyle, direction: Direction) -> PieceCells {
    let d = direction.sign() as f32;
    let [m0, m1, m2, m3] = ROTATION_MATRIX;

    cells.map(|(x, y)| {
        let (x, y) = (x as f32, y as f32);
        match pivot {
            PivotStyle::HalfOffset => {
                let (x, y) = (x - 0.5, y - 0.5);
                (
                    (x * m0 * d + y * m1 * d).ceil() as i32,
                    (x * m2 * d + y * m3 * d).ceil() as i32,
                )
            }
            PivotStyle::Integer => (
                (x * m0 * d + y * m1 * d).round() as i32,
                (x * m2 * d + y * m3 * d).round() as i32,
            ),
        }
    })
}

/// Kick table row for turning out of `from` in `direction`.
///
/// Rows are interleaved per orientation: `from * 2` for clockwise, `from * 2 - 1` (wrapped) for
/// counter-clockwise.
pub fn kick_index(from: Rotation, direction: Direction, rows: usize) -> usize {
    let mut index = from.index() as i32 * 2;
    if direction == Direction::CounterClockwise {
        index -= 1;
    }
    wrap(index, 0, rows as i32) as usize
}

/// Successful rotation: the state to commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotated {
    pub rotation: Rotation,
    pub cells: PieceCells,
    pub position: Offset,
    /// Translation that made the rotation fit, `(0, 0)` when it fit in place
    pub kick: Offset,
}

/// Try to rotate a piece with wall kicks
///
/// Returns `None` if the turned shape does not fit in place or at any kick alternative.
pub fn try_rotate(
    shape: &TetrominoShape,
    rotation: Rotation,
    cells: &PieceCells,
    position: Offset,
    direction: Direction,
    board: &Board,
) -> Option<Rotated> {
    let new_rotation = rotation.turn(direction);
    let new_cells = rotate_cells(cells, shape.pivot(), direction);

    let row = kick_index(rotation, direction, shape.kick_rows());
    let (px, py) = position;

    std::iter::once((0, 0))
        .chain(shape.kicks(row).iter().copied())
        .find(|&(kx, ky)| is_valid(&new_cells, (px + kx, py + ky), board))
        .map(|kick| Rotated {
            rotation: new_rotation,
            cells: new_cells,
            position: (px + kick.0, py + kick.1),
            kick,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Bounds;
    use crate::catalog::{standard_cells, ShapeCatalog};
    use crate::types::PieceKind;

    fn sorted(mut cells: PieceCells) -> PieceCells {
        cells.sort();
        cells
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(4, 0, 4), 0);
        assert_eq!(wrap(-1, 0, 4), 3);
        assert_eq!(wrap(-1, 0, 8), 7);
        assert_eq!(wrap(9, 0, 8), 1);
        assert_eq!(wrap(2, 0, 4), 2);
    }

    #[test]
    fn test_t_rotates_clockwise() {
        let t = standard_cells(PieceKind::T);
        let east = rotate_cells(&t, PivotStyle::Integer, Direction::Clockwise);
        assert_eq!(east, [(1, 0), (0, 1), (0, 0), (0, -1)]);
    }

    #[test]
    fn test_o_rotates_in_place() {
        let o = standard_cells(PieceKind::O);
        for dir in [Direction::Clockwise, Direction::CounterClockwise] {
            let turned = rotate_cells(&o, PivotStyle::HalfOffset, dir);
            assert_eq!(sorted(turned), sorted(o));
        }
    }

    #[test]
    fn test_i_turns_vertical() {
        let i = standard_cells(PieceKind::I);
        let east = rotate_cells(&i, PivotStyle::HalfOffset, Direction::Clockwise);
        assert_eq!(sorted(east), [(1, -1), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_four_turns_restore_cells() {
        let catalog = ShapeCatalog::standard();
        for shape in catalog.iter() {
            for dir in [Direction::Clockwise, Direction::CounterClockwise] {
                let mut cells = shape.cells();
                for _ in 0..4 {
                    cells = rotate_cells(&cells, shape.pivot(), dir);
                }
                assert_eq!(sorted(cells), sorted(shape.cells()), "{:?}", shape.kind());
            }
        }
    }

    #[test]
    fn test_kick_index_interleaving() {
        assert_eq!(kick_index(Rotation::North, Direction::Clockwise, 8), 0);
        assert_eq!(kick_index(Rotation::North, Direction::CounterClockwise, 8), 7);
        assert_eq!(kick_index(Rotation::East, Direction::CounterClockwise, 8), 1);
        assert_eq!(kick_index(Rotation::East, Direction::Clockwise, 8), 2);
        assert_eq!(kick_index(Rotation::West, Direction::Clockwise, 8), 6);
    }

    #[test]
    fn test_rotation_fits_in_place() {
        let board = Board::new(Bounds::centered(10, 20));
        let catalog = ShapeCatalog::standard();
        let t = catalog.get(PieceKind::T).unwrap();

        let rotated = try_rotate(t, Rotation::North, &t.cells(), (0, 0), Direction::Clockwise, &board)
            .unwrap();
        assert_eq!(rotated.rotation, Rotation::East);
        assert_eq!(rotated.position, (0, 0));
        assert_eq!(rotated.kick, (0, 0));
    }

    #[test]
    fn test_rotation_kicks_off_wall() {
        let board = Board::new(Bounds::centered(10, 20));
        let catalog = ShapeCatalog::standard();
        let t = catalog.get(PieceKind::T).unwrap();

        // East-facing T flush with the left wall; turning back to North needs x-1 room.
        let east = rotate_cells(&t.cells(), t.pivot(), Direction::Clockwise);
        let rotated = try_rotate(t, Rotation::East, &east, (-5, 0), Direction::CounterClockwise, &board)
            .unwrap();
        assert_eq!(rotated.rotation, Rotation::North);
        assert_eq!(rotated.kick, (1, 0));
        assert_eq!(rotated.position, (-4, 0));
    }

    #[test]
    fn test_rotation_fails_when_boxed_in() {
        let bounds = Bounds::centered(10, 20);
        let mut board = Board::new(bounds);
        let catalog = ShapeCatalog::standard();
        let t = catalog.get(PieceKind::T).unwrap();

        for y in bounds.y_min..bounds.y_max() {
            for x in bounds.x_min..bounds.x_max() {
                board.set(x, y, Some(PieceKind::Z));
            }
        }
        for (x, y) in t.cells() {
            board.set(x, y, None);
        }

        assert!(try_rotate(t, Rotation::North, &t.cells(), (0, 0), Direction::Clockwise, &board)
            .is_none());
    }
}
