//! Game state module - the click-driven session
//!
//! This module ties together the grid, the dice, the selection path, the
//! lexicon and the score table. The presentation layer drives it through a
//! single entry point, [`GameSession::handle_selection`], one classified input
//! at a time.
//!
//! Transition table (phase is Idle when the path is empty, Building otherwise):
//!
//! | Phase | Input | Effect |
//! |-------|-------|--------|
//! | any | `Exit` | nothing; `continue_playing` is false |
//! | any | `Reset` | re-shake, clear selection, path, found words; score 0 |
//! | Idle | `GridPick` | start a word at that cell |
//! | Building | `GridPick` of the last cell | commit the word, then end it |
//! | Building | `GridPick` adjacent and unused | extend the word |
//! | Building | any other `GridPick` | abandon the word |
//! | any | `OutsideGrid` | nothing |

use tracing::{debug, info, warn};

use crate::dice::DieSet;
use crate::error::GameError;
use crate::grid::Grid;
use crate::lexicon::Lexicon;
use crate::path::SelectionPath;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::ScoreTable;
use crate::snapshot::{format_status, CellSnapshot, GameSnapshot};
use crate::types::{CellState, Phase, Position, Selection, GRID_COLS, GRID_ROWS};

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub score_table: ScoreTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            score_table: ScoreTable::standard(),
        }
    }
}

/// Result of re-picking the last cell of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitResult {
    /// New valid word; `points` were added to the score.
    Scored { word: String, points: u32 },
    /// Valid word that was already found this game.
    Duplicate { word: String },
    /// Not in the lexicon.
    NotAWord { word: String },
}

impl CommitResult {
    pub fn word(&self) -> &str {
        match self {
            CommitResult::Scored { word, .. }
            | CommitResult::Duplicate { word }
            | CommitResult::NotAWord { word } => word,
        }
    }
}

/// What one input did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Exited,
    Reset,
    /// First cell of a new word picked.
    Started,
    /// Word grew by one cell.
    Extended,
    Committed(CommitResult),
    /// Illegal continuation; the word was dropped unscored.
    Abandoned,
    /// Input had no effect.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    pub continue_playing: bool,
    pub outcome: Outcome,
}

impl Transition {
    fn playing(outcome: Outcome) -> Self {
        Self {
            continue_playing: true,
            outcome,
        }
    }

    /// The word this input added to the found list, if any.
    pub fn found_word(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Committed(CommitResult::Scored { word, .. }) => Some(word),
            _ => None,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    grid: Grid,
    dice: DieSet,
    path: SelectionPath,
    lexicon: Lexicon,
    score_table: ScoreTable,
    /// Insertion order, spelled as traced.
    found_words: Vec<String>,
    score: u32,
    /// Highest score reached in this session; survives resets.
    max_score: u32,
    rng: R,
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session with the standard dice and a freshly shaken board.
    pub fn new(lexicon: Lexicon, config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        let dice = DieSet::standard();
        let grid = Grid::shaken(config.rows, config.cols, &dice, &mut rng)?;
        Self::with_grid(lexicon, config.score_table, grid, dice, rng)
    }

    /// Create a session around an existing board. `dice` are used for every
    /// later reset and must hold one die per cell.
    pub fn with_grid(
        lexicon: Lexicon,
        score_table: ScoreTable,
        grid: Grid,
        dice: DieSet,
        rng: R,
    ) -> Result<Self, GameError> {
        let cells = grid.rows() * grid.cols();
        if dice.len() != cells {
            return Err(GameError::DieCount {
                dice: dice.len(),
                cells,
            });
        }
        if lexicon.is_empty() {
            return Err(GameError::EmptyLexicon);
        }

        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            words = lexicon.len(),
            "game session created"
        );

        Ok(Self {
            grid,
            dice,
            path: SelectionPath::new(),
            lexicon,
            score_table,
            found_words: Vec::new(),
            score: 0,
            max_score: 0,
            rng,
        })
    }

    /// Process one classified input.
    ///
    /// Returns `continue_playing == false` only for [`Selection::Exit`].
    /// A `GridPick` outside the grid is a caller bug and fails without
    /// touching any state.
    pub fn handle_selection(&mut self, selection: Selection) -> Result<Transition, GameError> {
        let outcome = match selection {
            Selection::Exit => {
                debug!("exit requested");
                return Ok(Transition {
                    continue_playing: false,
                    outcome: Outcome::Exited,
                });
            }
            Selection::Reset => {
                self.reset()?;
                Outcome::Reset
            }
            Selection::GridPick(pos) => self.pick(pos)?,
            Selection::OutsideGrid => Outcome::Ignored,
        };

        if self.score > self.max_score {
            self.max_score = self.score;
        }
        Ok(Transition::playing(outcome))
    }

    fn pick(&mut self, pos: Position) -> Result<Outcome, GameError> {
        if !self.grid.contains(pos) {
            warn!(%pos, rows = self.grid.rows(), cols = self.grid.cols(), "pick outside grid");
            return Err(GameError::out_of_bounds(pos, self.grid.rows(), self.grid.cols()));
        }

        let Some(last) = self.path.last() else {
            self.grid.set_state(pos, CellState::ActiveCurrent)?;
            self.path.append(pos);
            debug!(%pos, "word started");
            return Ok(Outcome::Started);
        };

        if pos == last {
            return Ok(Outcome::Committed(self.commit()));
        }

        if self.path.can_extend(pos) {
            for &prior in self.path.positions() {
                self.grid.set_state(prior, CellState::ActivePrior)?;
            }
            self.grid.set_state(pos, CellState::ActiveCurrent)?;
            self.path.append(pos);
            debug!(%pos, word = %self.current_word(), "word extended");
            return Ok(Outcome::Extended);
        }

        debug!(%pos, word = %self.current_word(), "word abandoned");
        self.end_word();
        Ok(Outcome::Abandoned)
    }

    fn commit(&mut self) -> CommitResult {
        let word = self.current_word();
        self.end_word();

        if !self.lexicon.contains(&word) {
            debug!(%word, "not a word");
            return CommitResult::NotAWord { word };
        }
        if self.found_words.contains(&word) {
            debug!(%word, "already found");
            return CommitResult::Duplicate { word };
        }

        let points = self.score_table.points_for(&word);
        self.score += points;
        self.found_words.push(word.clone());
        info!(%word, points, score = self.score, "word found");
        CommitResult::Scored { word, points }
    }

    /// Drop the current word: clear the path and every selection marker.
    fn end_word(&mut self) {
        self.path.clear();
        self.grid.reset_selection_state();
    }

    fn reset(&mut self) -> Result<(), GameError> {
        self.grid.shake(&self.dice, &mut self.rng)?;
        self.end_word();
        self.found_words.clear();
        self.score = 0;
        info!(max_score = self.max_score, "board reset");
        Ok(())
    }
}

impl<R> GameSession<R> {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn current_word(&self) -> String {
        self.path.current_word(&self.grid)
    }

    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn phase(&self) -> Phase {
        if self.path.is_empty() {
            Phase::Idle
        } else {
            Phase::Building
        }
    }

    pub fn status_line(&self) -> String {
        format_status(self.score, self.max_score)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend(self.grid.cells().iter().map(|cell| CellSnapshot {
            row: cell.row(),
            col: cell.col(),
            letter: cell.letter(),
            state: cell.state(),
        }));
        out.current_word = self.current_word();
        out.found_words.clone_from(&self.found_words);
        out.score = self.score;
        out.max_score = self.max_score;
        out.status = self.status_line();
        out.phase = self.phase();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
