//! Board module - manages the game grid
//!
//! The board is a `width x height` grid centered on the origin, where each cell can be empty or
//! tagged with the piece kind that locked there. Cells are stored in a flat row-major vector.
//! Coordinates: (x, y) with x in `x_min..x_max` (left to right) and y in `y_min..y_max`
//! (bottom to top). The bottom-left cell is `(-width / 2, -height / 2)`.
//!
//! The grid holds locked cells only; the active piece is tracked separately and overlaid by the
//! snapshot, so validity queries never see the piece's own cells.

use crate::types::{Cell, Offset, PieceKind};

/// Fixed rectangle of valid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x_min: i32,
    pub y_min: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Rectangle of the given size centered on the origin
    pub fn centered(width: i32, height: i32) -> Self {
        Self {
            x_min: -width / 2,
            y_min: -height / 2,
            width,
            height,
        }
    }

    /// Exclusive upper x bound
    pub fn x_max(&self) -> i32 {
        self.x_min + self.width
    }

    /// Exclusive upper y bound
    pub fn y_max(&self) -> i32 {
        self.y_min + self.height
    }

    #[inline(always)]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && x < self.x_max() && y >= self.y_min && y < self.y_max()
    }
}

/// The game board with flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    bounds: Bounds,
    /// Flat array of cells, row-major order from the bottom row up
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![None; bounds.width as usize * bounds.height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let col = (x - self.bounds.x_min) as usize;
        let row = (y - self.bounds.y_min) as usize;
        Some(row * self.bounds.width as usize + col)
    }

    fn row_range(&self, y: i32) -> std::ops::Range<usize> {
        let width = self.bounds.width as usize;
        let start = (y - self.bounds.y_min) as usize * width;
        start..start + width
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    ///
    /// Callers are expected to pass in-bounds cells; out-of-bounds writes are ignored and
    /// reported as `false`.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is free (within bounds and empty)
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        if y < self.bounds.y_min || y >= self.bounds.y_max() {
            return false;
        }
        self.cells[self.row_range(y)].iter().all(|cell| cell.is_some())
    }

    /// Clear row `y` and shift every row above it down by one.
    ///
    /// The top row becomes empty.
    pub fn clear_row(&mut self, y: i32) {
        if y < self.bounds.y_min || y >= self.bounds.y_max() {
            return;
        }

        let width = self.bounds.width as usize;
        let top = self.bounds.y_max() - 1;

        for row in y..top {
            let dst = self.row_range(row);
            self.cells.copy_within(dst.start + width..dst.end + width, dst.start);
        }

        let top_range = self.row_range(top);
        self.cells[top_range].fill(None);
    }

    /// Clear every full row, bottom to top, and return how many were removed.
    ///
    /// After a clear the same row index is examined again, since the row shifted into it may be
    /// full as well.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = self.bounds.y_min;

        while row < self.bounds.y_max() {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            } else {
                row += 1;
            }
        }

        cleared
    }

    /// Write a piece's absolute cells into the grid
    pub fn lock_cells(&mut self, cells: &[Offset], kind: PieceKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Cells of row `y` from left to right, or `None` when out of bounds
    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        if y < self.bounds.y_min || y >= self.bounds.y_max() {
            return None;
        }
        Some(&self.cells[self.row_range(y)])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
