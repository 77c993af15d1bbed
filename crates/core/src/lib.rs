//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the rules of single-player Boggle: the dice and the
//! shake, the letter grid, word tracing, lexicon lookup and scoring. It has no
//! dependency on the terminal, so the same session drives any front end.
//!
//! - **Deterministic**: the same seed shakes the same boards
//! - **Testable**: every rule is reachable through plain method calls
//!
//! # Module Structure
//!
//! - [`dice`]: the 16 standard cubes and the shake
//! - [`grid`]: row-major letter cells with per-cell selection state
//! - [`path`]: the word currently being traced
//! - [`lexicon`]: uppercase word set loaded from a word list
//! - [`scoring`]: points per word length
//! - [`game_state`]: the click-driven session state machine
//! - [`snapshot`]: plain view of a session for front ends
//! - [`rng`]: seedable random source used by the shake
//!
//! # Game Rules
//!
//! - Click a cell to start a word, then click adjacent unused cells to extend it
//! - Click the last cell again to submit the word
//! - Any other click drops the word unscored
//! - A word scores once per game when it is in the lexicon
//! - Reset re-shakes the board and zeroes the score; the max score is kept
//!
//! # Example
//!
//! ```
//! use tui_boggle_core::{DieSet, GameSession, Grid, Lexicon, ScoreTable, SimpleRng};
//! use tui_boggle_types::{Position, Selection};
//!
//! let grid = Grid::from_letters(
//!     4,
//!     4,
//!     &["C", "A", "X", "X", "X", "T", "X", "X", "X", "X", "X", "X", "X", "X", "X", "X"],
//! )
//! .unwrap();
//! let lexicon = Lexicon::from_words(["CAT"]).unwrap();
//! let mut game = GameSession::with_grid(
//!     lexicon,
//!     ScoreTable::standard(),
//!     grid,
//!     DieSet::standard(),
//!     SimpleRng::new(12345),
//! )
//! .unwrap();
//!
//! for (row, col) in [(0, 0), (0, 1), (1, 1), (1, 1)] {
//!     let _ = game.handle_selection(Selection::GridPick(Position::new(row, col))).unwrap();
//! }
//!
//! assert_eq!(game.found_words(), &["CAT".to_string()]);
//! assert_eq!(game.status_line(), "Current Score: 1, Max Score: 1");
//! ```

pub mod dice;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod lexicon;
pub mod path;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_boggle_types as types;

// Re-export commonly used types for convenience
pub use dice::{Die, DieSet, STANDARD_DICE};
pub use error::GameError;
pub use game_state::{CommitResult, GameConfig, GameSession, Outcome, Transition};
pub use grid::{Cell, Grid};
pub use lexicon::Lexicon;
pub use path::SelectionPath;
pub use rng::{RandomSource, SimpleRng};
pub use scoring::ScoreTable;
pub use snapshot::{format_status, CellSnapshot, GameSnapshot};
