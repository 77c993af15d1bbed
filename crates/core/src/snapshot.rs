use serde::Serialize;

use crate::types::{CellState, Letter, Phase};

/// Upper status text: current and max score.
pub fn format_status(score: u32, max_score: u32) -> String {
    format!("Current Score: {score}, Max Score: {max_score}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellSnapshot {
    pub row: usize,
    pub col: usize,
    pub letter: Letter,
    pub state: CellState,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major.
    pub cells: Vec<CellSnapshot>,
    pub current_word: String,
    pub found_words: Vec<String>,
    pub score: u32,
    pub max_score: u32,
    pub status: String,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellSnapshot> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            current_word: String::new(),
            found_words: Vec::new(),
            score: 0,
            max_score: 0,
            status: format_status(0, 0),
            phase: Phase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text() {
        assert_eq!(format_status(3, 12), "Current Score: 3, Max Score: 12");
    }

    #[test]
    fn default_snapshot_shows_zero_scores() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.status, format_status(0, 0));
        assert_eq!(snap.phase, Phase::Idle);
        assert!(snap.cells.is_empty());
        assert_eq!(snap.cell(0, 0), None);
    }
}
