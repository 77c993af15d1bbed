//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used throughout the application: grid
//! positions, die-face letters, per-cell selection markers and the inputs the
//! presentation layer feeds into a game session. Nothing here knows about
//! rendering or terminals, so the same types serve the core rules, the
//! terminal view and any other front end.
//!
//! # Grid Dimensions
//!
//! Standard Boggle playfield:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//! - **Dice**: 16, six faces each
//!
//! # Scoring Defaults
//!
//! | Word length | Points |
//! |-------------|--------|
//! | 3 | 1 |
//! | 4 | 1 |
//! | 5 | 2 |
//! | 6 | 3 |
//! | 7 | 5 |
//! | anything else | 11 |
//!
//! # Examples
//!
//! ```
//! use tui_boggle_types::{CellState, Letter, Position, Selection, GRID_COLS, GRID_ROWS};
//!
//! let qu = Letter::new("Qu").unwrap();
//! assert_eq!(qu.as_str(), "Qu");
//! assert_eq!(qu.char_len(), 2);
//!
//! let a = Position::new(1, 1);
//! assert!(a.is_adjacent(Position::new(2, 2)));
//! assert!(!a.is_adjacent(a));
//!
//! assert_eq!(CellState::default(), CellState::Unselected);
//! assert_eq!(Selection::GridPick(a), Selection::GridPick(Position::new(1, 1)));
//! assert_eq!((GRID_ROWS, GRID_COLS), (4, 4));
//! ```

use std::fmt;

use arrayvec::ArrayString;
use serde::{Deserialize, Serialize};

/// Grid height in cells (4 rows)
pub const GRID_ROWS: usize = 4;

/// Grid width in cells (4 columns)
pub const GRID_COLS: usize = 4;

/// Faces on every die
pub const DIE_FACES: usize = 6;

/// Maximum characters in one die face ("Qu" is the only two-character face)
pub const MAX_LETTER_LEN: usize = 2;

/// Points per word length for the standard game.
pub const DEFAULT_SCORE_TABLE: [(usize, u32); 5] = [(3, 1), (4, 1), (5, 2), (6, 3), (7, 5)];

/// Points for a word whose length has no table entry (in practice: 8+ letters).
pub const FALLBACK_SCORE: u32 = 11;

/// Lexicon file read when no path is given on the command line.
pub const DEFAULT_LEXICON_PATH: &str = "bogwords.txt";


/// A grid coordinate.
///
/// Positions are logical (row, column) pairs; the core never sees screen
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat index in a row-major grid with `cols` columns.
    pub const fn index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// True iff `other` is a different position within one row and one
    /// column of this one (diagonals included).
    ///
    /// Only positions are compared; letters and selection state play no part.
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One die face as shown on a cell.
///
/// A letter is one or two ASCII letters. Two characters only occur for the
/// "Qu" face, which counts as a single cell but spells two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Letter(ArrayString<MAX_LETTER_LEN>);

impl Letter {
    /// Parse a face. Returns `None` for empty strings, strings longer than
    /// two characters, or anything that is not an ASCII letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_boggle_types::Letter;
    ///
    /// assert!(Letter::new("A").is_some());
    /// assert!(Letter::new("Qu").is_some());
    /// assert!(Letter::new("").is_none());
    /// assert!(Letter::new("ABC").is_none());
    /// ```
    pub fn new(s: &str) -> Option<Self> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        ArrayString::from(s).ok().map(Letter)
    }

    /// Build a letter from a literal in a face table.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid face; only use with string literals.
    pub fn from_static(s: &'static str) -> Self {
        match Self::new(s) {
            Some(letter) => letter,
            None => panic!("invalid die face literal {s:?}"),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Number of characters this face contributes to a word.
    pub fn char_len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selection marker for one cell.
///
/// - **Unselected**: not part of the word being traced
/// - **ActivePrior**: part of the word, but not the most recent pick
/// - **ActiveCurrent**: the most recent pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellState {
    #[default]
    Unselected,
    ActivePrior,
    ActiveCurrent,
}

impl CellState {
    pub fn is_selected(self) -> bool {
        !matches!(self, CellState::Unselected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Unselected => "unselected",
            CellState::ActivePrior => "active-prior",
            CellState::ActiveCurrent => "active-current",
        }
    }
}

/// One classified input from the presentation layer.
///
/// Turning a raw click or key press into a `Selection` is the presentation
/// layer's job; the core only ever sees these four cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Leave the game.
    Exit,
    /// Re-shake the board and clear score and found words.
    Reset,
    /// A cell on the grid was picked.
    GridPick(Position),
    /// Somewhere that is neither a cell nor a button.
    OutsideGrid,
}

/// Externally visible phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// No word is being traced.
    Idle,
    /// At least one cell has been picked.
    Building,
}

/// Keyboard cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
