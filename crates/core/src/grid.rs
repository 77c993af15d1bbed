//! Grid module - the letter cells of the board
//!
//! The grid is `rows x cols` cells (4x4 in the standard game) stored in a flat
//! row-major vector. Every position owns exactly one [`Cell`] for the whole
//! session; a shake only rewrites letters, and selection changes only rewrite
//! the per-cell [`CellState`].
//! Coordinates: (row, col) where row grows downward and col grows rightward.

use std::fmt;

use crate::dice::DieSet;
use crate::error::GameError;
use crate::rng::RandomSource;
use crate::types::{CellState, Letter, Position};

/// One grid position: a fixed position, the letter currently shown on it, and
/// its selection marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pos: Position,
    letter: Letter,
    state: CellState,
}

impl Cell {
    fn new(pos: Position, letter: Letter) -> Self {
        Self {
            pos,
            letter,
            state: CellState::Unselected,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        is_adjacent(self, other)
    }
}

/// Adjacency between two cells: different positions at most one row and one
/// column apart.
pub fn is_adjacent(a: &Cell, b: &Cell) -> bool {
    a.pos.is_adjacent(b.pos)
}

/// The board grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from `rows * cols` letters in row-major order.
    pub fn new(rows: usize, cols: usize, letters: Vec<Letter>) -> Result<Self, GameError> {
        let expected = rows * cols;
        if letters.len() != expected {
            return Err(GameError::DieCount {
                dice: letters.len(),
                cells: expected,
            });
        }

        let cells = letters
            .into_iter()
            .enumerate()
            .map(|(i, letter)| Cell::new(Position::new(i / cols, i % cols), letter))
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Build a grid by shaking `dice`. The die count must equal `rows * cols`.
    pub fn shaken<R: RandomSource>(
        rows: usize,
        cols: usize,
        dice: &DieSet,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        check_die_count(dice, rows * cols)?;
        Self::new(rows, cols, dice.shake(rng))
    }

    /// Build a grid from face strings, e.g. for a fixed test board.
    pub fn from_letters(rows: usize, cols: usize, letters: &[&str]) -> Result<Self, GameError> {
        let parsed = letters
            .iter()
            .map(|s| {
                Letter::new(s).ok_or_else(|| GameError::InvalidLetter {
                    letter: (*s).to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows, cols, parsed)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Result<usize, GameError> {
        if !self.contains(pos) {
            return Err(GameError::out_of_bounds(pos, self.rows, self.cols));
        }
        Ok(pos.index(self.cols))
    }

    pub fn cell_at(&self, pos: Position) -> Result<&Cell, GameError> {
        let idx = self.index(pos)?;
        Ok(&self.cells[idx])
    }

    pub fn letter_at(&self, pos: Position) -> Result<Letter, GameError> {
        self.cell_at(pos).map(Cell::letter)
    }

    pub fn set_letter_at(&mut self, pos: Position, letter: Letter) -> Result<(), GameError> {
        let idx = self.index(pos)?;
        self.cells[idx].letter = letter;
        Ok(())
    }

    pub fn state_at(&self, pos: Position) -> Result<CellState, GameError> {
        self.cell_at(pos).map(Cell::state)
    }

    pub fn set_state(&mut self, pos: Position, state: CellState) -> Result<(), GameError> {
        let idx = self.index(pos)?;
        self.cells[idx].state = state;
        Ok(())
    }

    /// Mark every cell `Unselected`.
    pub fn reset_selection_state(&mut self) {
        for cell in &mut self.cells {
            cell.state = CellState::Unselected;
        }
    }

    /// Re-roll every letter from `dice`. Selection state is left as is.
    pub fn shake<R: RandomSource>(&mut self, dice: &DieSet, rng: &mut R) -> Result<(), GameError> {
        check_die_count(dice, self.cells.len())?;
        for (cell, letter) in self.cells.iter_mut().zip(dice.shake(rng)) {
            cell.letter = letter;
        }
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }
}

fn check_die_count(dice: &DieSet, cells: usize) -> Result<(), GameError> {
    if dice.len() != cells {
        return Err(GameError::DieCount {
            dice: dice.len(),
            cells,
        });
    }
    Ok(())
}

/// One line per row, each cell as `[letter:state]`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "[{}:{}] ", cell.letter, cell.state.as_str())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    fn abc_grid() -> Grid {
        Grid::from_letters(
            4,
            4,
            &[
                "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "Qu",
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_positions_are_row_major() {
        let grid = abc_grid();
        for (i, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.position(), Position::new(i / 4, i % 4));
        }
        assert_eq!(grid.letter_at(Position::new(1, 2)).unwrap().as_str(), "G");
        assert_eq!(grid.letter_at(Position::new(3, 3)).unwrap().as_str(), "Qu");
    }

    #[test]
    fn test_out_of_bounds_access_fails() {
        let mut grid = abc_grid();
        let outside = Position::new(4, 1);

        assert!(matches!(
            grid.cell_at(outside),
            Err(GameError::OutOfBounds { row: 4, col: 1, rows: 4, cols: 4 })
        ));
        assert!(grid.letter_at(Position::new(0, 4)).is_err());
        assert!(grid.set_letter_at(outside, Letter::from_static("Z")).is_err());
        assert!(grid.set_state(outside, CellState::ActiveCurrent).is_err());
    }

    #[test]
    fn test_set_letter_keeps_position() {
        let mut grid = abc_grid();
        let pos = Position::new(2, 1);
        grid.set_letter_at(pos, Letter::from_static("Z")).unwrap();

        let cell = grid.cell_at(pos).unwrap();
        assert_eq!(cell.letter().as_str(), "Z");
        assert_eq!(cell.position(), pos);
    }

    #[test]
    fn test_reset_selection_state() {
        let mut grid = abc_grid();
        grid.set_state(Position::new(0, 0), CellState::ActivePrior).unwrap();
        grid.set_state(Position::new(1, 1), CellState::ActiveCurrent).unwrap();

        grid.reset_selection_state();
        assert!(grid
            .cells()
            .iter()
            .all(|c| c.state() == CellState::Unselected));
    }

    #[test]
    fn test_wrong_letter_count_is_rejected() {
        assert!(matches!(
            Grid::from_letters(4, 4, &["A", "B"]),
            Err(GameError::DieCount { dice: 2, cells: 16 })
        ));
        assert!(matches!(
            Grid::from_letters(1, 2, &["A", "1"]),
            Err(GameError::InvalidLetter { .. })
        ));
    }

    #[test]
    fn test_shake_requires_one_die_per_cell() {
        let mut grid = Grid::from_letters(2, 2, &["A", "B", "C", "D"]).unwrap();
        let mut rng = SimpleRng::new(1);
        assert!(matches!(
            grid.shake(&DieSet::standard(), &mut rng),
            Err(GameError::DieCount { dice: 16, cells: 4 })
        ));
    }

    #[test]
    fn test_shaken_grid_keeps_positions_and_clears_nothing_else() {
        let dice = DieSet::standard();
        let mut rng = SimpleRng::new(11);
        let mut grid = Grid::shaken(4, 4, &dice, &mut rng).unwrap();
        grid.set_state(Position::new(0, 0), CellState::ActiveCurrent).unwrap();

        grid.shake(&dice, &mut rng).unwrap();
        assert_eq!(grid.cells().len(), 16);
        assert_eq!(grid.state_at(Position::new(0, 0)).unwrap(), CellState::ActiveCurrent);
    }

    #[test]
    fn test_cell_adjacency() {
        let grid = abc_grid();
        let a = grid.cell_at(Position::new(0, 0)).unwrap();
        let f = grid.cell_at(Position::new(1, 1)).unwrap();
        let c = grid.cell_at(Position::new(0, 2)).unwrap();

        assert!(a.is_adjacent(f));
        assert!(f.is_adjacent(a));
        assert!(!a.is_adjacent(a));
        assert!(!a.is_adjacent(c));
        assert!(is_adjacent(f, c));
    }

    #[test]
    fn test_display_dump() {
        let mut grid = Grid::from_letters(2, 2, &["C", "A", "T", "Qu"]).unwrap();
        grid.set_state(Position::new(0, 1), CellState::ActiveCurrent).unwrap();
        assert_eq!(
            grid.to_string(),
            "[C:unselected] [A:active-current] \n[T:unselected] [Qu:unselected] \n"
        );
    }
}
