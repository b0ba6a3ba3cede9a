//! GameView: maps a `core::GameSnapshot` into lines of terminal text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellView, GameSnapshot};

/// A lightweight text view of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Glyphs drawn for each cell, two columns wide to compensate for glyph aspect ratio
    empty: &'static str,
    locked: &'static str,
    active: &'static str,
    ghost: &'static str,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            empty: " .",
            locked: "[]",
            active: "##",
            ghost: "::",
        }
    }
}

impl GameView {
    fn glyph(&self, cell: CellView) -> &'static str {
        match cell {
            CellView::Empty => self.empty,
            CellView::Locked(_) => self.locked,
            CellView::Active(_) => self.active,
            CellView::Ghost => self.ghost,
        }
    }

    /// Render the board framed by walls, top row first, followed by a status line.
    pub fn render(&self, snap: &GameSnapshot) -> Vec<String> {
        let b = snap.bounds;
        let mut lines = Vec::with_capacity(b.height as usize + 2);

        for y in (b.y_min..b.y_max()).rev() {
            let mut line = String::with_capacity(b.width as usize * 2 + 4);
            line.push_str("<!");
            for x in b.x_min..b.x_max() {
                line.push_str(self.glyph(snap.view(x, y)));
            }
            line.push_str("!>");
            lines.push(line);
        }

        lines.push(format!("<!{}!>", "=".repeat(b.width as usize * 2)));
        lines.push(format!(
            "pieces {}  lines {}  game overs {}",
            snap.pieces_spawned, snap.lines_cleared, snap.game_overs
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::PieceKind;

    #[test]
    fn renders_active_ghost_and_locked_cells() {
        let mut state = GameState::default();
        state.board_mut().set(4, -10, Some(PieceKind::Z));
        state.spawn_kind(PieceKind::O);

        let lines = GameView::default().render(&state.snapshot());
        assert_eq!(lines.len(), 22);

        // Top row (y = 9) holds the upper half of the O at x = -1..=0
        assert_eq!(lines[0], "<! . . . .#### . . . .!>");
        // Bottom row (y = -10) holds the ghost and the locked cell at x = 4
        assert_eq!(lines[19], "<! . . . .:::: . . .[]!>");
        assert!(lines[21].starts_with("pieces 1"));
    }
}
