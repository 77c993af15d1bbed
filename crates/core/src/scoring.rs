//! Scoring module - points per word length
//!
//! Compatibility note:
//! The standard table is `{3:1, 4:1, 5:2, 6:3, 7:5}` with a fallback of 11 for
//! every length that has no entry. In the standard game that means 8+ letter
//! words score 11 while 7-letter words score 5; the jump is kept as is.
//! Lengths below 3 also fall back to 11; the lexicon is the only gate that
//! keeps them from scoring.

use std::collections::BTreeMap;

use crate::types::{DEFAULT_SCORE_TABLE, FALLBACK_SCORE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    points: BTreeMap<usize, u32>,
    fallback: u32,
}

impl ScoreTable {
    pub fn new(entries: impl IntoIterator<Item = (usize, u32)>, fallback: u32) -> Self {
        Self {
            points: entries.into_iter().collect(),
            fallback,
        }
    }

    pub fn standard() -> Self {
        Self::new(DEFAULT_SCORE_TABLE, FALLBACK_SCORE)
    }

    /// Points for a word of `len` characters.
    pub fn points_for_len(&self, len: usize) -> u32 {
        self.points.get(&len).copied().unwrap_or(self.fallback)
    }

    /// Points for `word`, measured in characters as spelled ("Qu" is two).
    pub fn points_for(&self, word: &str) -> u32 {
        self.points_for_len(word.chars().count())
    }

    pub fn fallback(&self) -> u32 {
        self.fallback
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = ScoreTable::standard();
        assert_eq!(table.points_for_len(3), 1);
        assert_eq!(table.points_for_len(4), 1);
        assert_eq!(table.points_for_len(5), 2);
        assert_eq!(table.points_for_len(6), 3);
        assert_eq!(table.points_for_len(7), 5);
    }

    #[test]
    fn test_unmapped_lengths_use_fallback() {
        let table = ScoreTable::standard();
        assert_eq!(table.points_for_len(8), 11);
        assert_eq!(table.points_for_len(16), 11);
        assert_eq!(table.points_for_len(2), 11);
        assert_eq!(table.fallback(), 11);
    }

    #[test]
    fn test_points_for_counts_characters() {
        let table = ScoreTable::standard();
        assert_eq!(table.points_for("CAT"), 1);
        // Q-u-I-T: the Qu face spells two characters.
        assert_eq!(table.points_for("QuIT"), 1);
        assert_eq!(table.points_for("QuEEN"), 2);
    }

    #[test]
    fn test_custom_table() {
        let table = ScoreTable::new([(3, 1)], 11);
        assert_eq!(table.points_for("CAT"), 1);
        assert_eq!(table.points_for("CATS"), 11);
    }
}
