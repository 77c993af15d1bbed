//! Keyboard cursor over the grid.

use crate::types::{Direction, Position};

/// Highlighted cell for keyboard play. Always inside a `rows x cols` grid;
/// moves past an edge stop at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
    rows: usize,
    cols: usize,
}

impl Cursor {
    /// Cursor at the top-left cell.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            pos: Position::new(0, 0),
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn move_by(&mut self, dir: Direction) {
        let Position { row, col } = self.pos;
        self.pos = match dir {
            Direction::Up => Position::new(row.saturating_sub(1), col),
            Direction::Down => Position::new((row + 1).min(self.rows - 1), col),
            Direction::Left => Position::new(row, col.saturating_sub(1)),
            Direction::Right => Position::new(row, (col + 1).min(self.cols - 1)),
        };
    }

    /// Jump to `pos`, clamped into the grid.
    pub fn set(&mut self, pos: Position) {
        self.pos = Position::new(pos.row.min(self.rows - 1), pos.col.min(self.cols - 1));
    }
}
