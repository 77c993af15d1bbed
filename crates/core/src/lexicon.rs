//! Lexicon - the set of words a commit is checked against
//!
//! Words are stored uppercase. Lookup is exact membership of the uppercased
//! candidate: no prefixes, no substrings.
//!
//! A lexicon file is plain text with one word per line. Lines are trimmed and
//! uppercased; blank lines are skipped.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Build from any list of words. Fails with [`GameError::EmptyLexicon`]
    /// if nothing non-blank is supplied.
    pub fn from_words<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyLexicon);
        }
        Ok(Self { words })
    }

    /// Read one word per line from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GameError> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Self::from_words(lines)
    }

    /// Read a lexicon file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let read_err = |source| GameError::LexiconRead {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_err)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(read_err)?;

        let lexicon = Self::from_words(lines)?;
        tracing::info!(path = %path.display(), words = lexicon.len(), "lexicon loaded");
        Ok(lexicon)
    }

    /// Exact membership of `word` after uppercasing.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_are_uppercased_and_trimmed() {
        let lex = Lexicon::from_words(["cat", "  Dog \n", ""]).unwrap();
        assert_eq!(lex.len(), 2);
        assert!(lex.contains("CAT"));
        assert!(lex.contains("cat"));
        assert!(lex.contains("Dog"));
    }

    #[test]
    fn test_membership_is_exact() {
        let lex = Lexicon::from_words(["CATS"]).unwrap();
        assert!(!lex.contains("CAT"));
        assert!(!lex.contains("CATSS"));
        assert!(!lex.contains("ATS"));
    }

    #[test]
    fn test_empty_lexicon_is_an_error() {
        assert!(matches!(
            Lexicon::from_words(Vec::<String>::new()),
            Err(GameError::EmptyLexicon)
        ));
        assert!(matches!(
            Lexicon::from_words(["", "   "]),
            Err(GameError::EmptyLexicon)
        ));
    }

    #[test]
    fn test_from_reader() {
        let input = "quit\nqueen\n\ntoast\n";
        let lex = Lexicon::from_reader(input.as_bytes()).unwrap();
        assert_eq!(lex.len(), 3);
        assert!(lex.contains("Quit"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Lexicon::load("/definitely/not/here/bogwords.txt").unwrap_err();
        match err {
            GameError::LexiconRead { path, .. } => {
                assert!(path.ends_with("bogwords.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
