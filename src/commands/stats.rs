//! Word list statistics
//!
//! Summarizes how a loaded list splits across difficulty levels.

use crate::core::{Difficulty, Word};
use crate::wordlists::WordList;

/// Breakdown of a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStats {
    pub total: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub shortest: Option<Word>,
    pub longest: Option<Word>,
}

impl WordStats {
    /// Word count per level, easiest first
    #[must_use]
    pub const fn per_level(&self) -> [(Difficulty, usize); 3] {
        [
            (Difficulty::Easy, self.easy),
            (Difficulty::Medium, self.medium),
            (Difficulty::Hard, self.hard),
        ]
    }
}

/// Count words per difficulty and find the extremes
///
/// Ties keep the first word in list order.
#[must_use]
pub fn word_stats(words: &WordList) -> WordStats {
    let mut stats = WordStats {
        total: words.len(),
        easy: 0,
        medium: 0,
        hard: 0,
        shortest: None,
        longest: None,
    };

    for word in words {
        match Difficulty::for_length(word.len()) {
            Difficulty::Easy => stats.easy += 1,
            Difficulty::Medium => stats.medium += 1,
            Difficulty::Hard => stats.hard += 1,
        }
        if stats.shortest.as_ref().is_none_or(|s| word.len() < s.len()) {
            stats.shortest = Some(word.clone());
        }
        if stats.longest.as_ref().is_none_or(|l| word.len() > l.len()) {
            stats.longest = Some(word.clone());
        }
    }

    stats
}
