//! Selection path - the word currently being traced
//!
//! The path is the ordered list of picked positions. Click order is reading
//! order. Two rules hold at all times:
//!
//! - no position appears twice
//! - each consecutive pair is adjacent
//!
//! The path only tracks positions. Painting cells as selected is the
//! session's job, so logical and visual state can be tested apart.

use crate::grid::Grid;
use crate::types::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    cells: Vec<Position>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn last(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    /// Whether `pos` may be appended: anything starts an empty path,
    /// otherwise it must touch the last cell and not already be used.
    pub fn can_extend(&self, pos: Position) -> bool {
        match self.last() {
            None => true,
            Some(last) => last.is_adjacent(pos) && !self.contains(pos),
        }
    }

    /// Append `pos` if allowed. Returns false (path unchanged) otherwise.
    pub fn append(&mut self, pos: Position) -> bool {
        if !self.can_extend(pos) {
            return false;
        }
        self.cells.push(pos);
        true
    }

    /// Letters of the path's cells joined in order.
    pub fn current_word(&self, grid: &Grid) -> String {
        self.cells
            .iter()
            .filter_map(|&pos| grid.letter_at(pos).ok())
            .map(|letter| letter.to_string())
            .collect()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cat_grid() -> Grid {
        Grid::from_letters(
            4,
            4,
            &[
                "C", "A", "X", "X", "X", "T", "X", "X", "X", "X", "X", "X", "X", "X", "X", "Qu",
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_path() {
        let path = SelectionPath::new();
        assert!(path.is_empty());
        assert_eq!(path.last(), None);
        assert_eq!(path.current_word(&cat_grid()), "");
    }

    #[test]
    fn test_append_builds_word_in_click_order() {
        let grid = cat_grid();
        let mut path = SelectionPath::new();

        assert!(path.append(Position::new(0, 0)));
        assert!(path.append(Position::new(0, 1)));
        assert!(path.append(Position::new(1, 1)));

        assert_eq!(path.current_word(&grid), "CAT");
        assert_eq!(path.last(), Some(Position::new(1, 1)));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_append_rejects_non_adjacent() {
        let mut path = SelectionPath::new();
        path.append(Position::new(0, 0));

        assert!(!path.append(Position::new(3, 3)));
        assert!(!path.append(Position::new(0, 2)));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_append_rejects_repeat() {
        let mut path = SelectionPath::new();
        path.append(Position::new(0, 0));
        path.append(Position::new(0, 1));

        // Adjacent to the last cell but already used.
        assert!(!path.append(Position::new(0, 0)));
        // The last cell itself is never adjacent to itself.
        assert!(!path.append(Position::new(0, 1)));
        assert_eq!(path.positions(), &[Position::new(0, 0), Position::new(0, 1)]);
    }

    #[test]
    fn test_qu_counts_two_characters() {
        let grid = cat_grid();
        let mut path = SelectionPath::new();
        path.append(Position::new(3, 3));
        assert_eq!(path.current_word(&grid), "Qu");
    }

    #[test]
    fn test_clear() {
        let mut path = SelectionPath::new();
        path.append(Position::new(2, 2));
        path.clear();
        assert!(path.is_empty());
        assert!(path.append(Position::new(0, 0)));
    }

    proptest! {
        #[test]
        fn appended_cells_never_repeat(
            picks in prop::collection::vec((0usize..4, 0usize..4), 0..64),
        ) {
            let mut path = SelectionPath::new();
            for (row, col) in picks {
                path.append(Position::new(row, col));
            }

            let cells = path.positions();
            for (i, a) in cells.iter().enumerate() {
                prop_assert!(!cells[i + 1..].contains(a));
            }
            for pair in cells.windows(2) {
                prop_assert!(pair[0].is_adjacent(pair[1]));
            }
        }
    }
}
