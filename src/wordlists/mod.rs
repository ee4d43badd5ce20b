//! Word lists for hangman
//!
//! A `WordList` is loaded once at startup, from a file or the embedded list,
//! and is read-only afterwards.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT};
pub use loader::{LoadError, load_from_file, words_from_slice};

use crate::core::{Difficulty, Word, filter_by_difficulty};

/// Ordered, immutable collection of candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Words belonging to a difficulty level, order preserved
    #[must_use]
    pub fn filter(&self, level: Difficulty) -> Vec<&Word> {
        filter_by_difficulty(&self.words, level)
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
