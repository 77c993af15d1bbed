//! Error types for the game core.
//!
//! Only contract violations and construction failures are errors. A player
//! picking a non-adjacent cell or spelling a non-word is an ordinary
//! transition handled by [`GameSession`](crate::GameSession).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Position;

/// Errors raised by the game core.
#[derive(Debug, Error)]
pub enum GameError {
    /// A grid access outside `[0, rows) x [0, cols)`.
    #[error("position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The lexicon holds no words, so no commit could ever score.
    #[error("lexicon contains no words")]
    EmptyLexicon,

    /// The lexicon file could not be opened or read.
    #[error("failed to read lexicon {path}: {source}")]
    LexiconRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading lexicon words from a stream failed.
    #[error("failed to read lexicon: {0}")]
    LexiconIo(#[from] io::Error),

    /// The die set does not provide exactly one die per cell.
    #[error("{dice} dice cannot fill a grid of {cells} cells")]
    DieCount { dice: usize, cells: usize },

    /// A face or board letter is not one or two ASCII letters.
    #[error("invalid letter {letter:?}")]
    InvalidLetter { letter: String },
}

impl GameError {
    pub(crate) fn out_of_bounds(pos: Position, rows: usize, cols: usize) -> Self {
        GameError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            rows,
            cols,
        }
    }
}
