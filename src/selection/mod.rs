//! Secret word selection
//!
//! Randomness sits behind the `WordPicker` trait so a session can be seeded
//! or driven by a fixed sequence in tests.

use crate::core::{Difficulty, Word};
use crate::wordlists::WordList;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Chooses one word from a set of candidates
pub trait WordPicker {
    /// Pick a word from the candidates
    ///
    /// Returns `None` if `candidates` is empty.
    fn pick<'a>(&mut self, candidates: &[&'a Word]) -> Option<&'a Word>;
}

/// Uniform random picker
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic picker; the same seed gives the same word sequence
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl WordPicker for RandomPicker {
    fn pick<'a>(&mut self, candidates: &[&'a Word]) -> Option<&'a Word> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut self.rng).copied()
    }
}

/// No word could be selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// The list has no words of the requested difficulty
    Empty(Difficulty),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(level) => write!(
                f,
                "No {level} words are available. Please choose another difficulty."
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Pick the secret word for a round
///
/// # Errors
///
/// Returns `SelectionError::Empty` if no word matches `level`.
///
/// # Examples
/// ```
/// use hangman::core::Difficulty;
/// use hangman::selection::{RandomPicker, select_word};
/// use hangman::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["cat", "elephant"]);
/// let mut picker = RandomPicker::seeded(7);
///
/// let word = select_word(&words, Difficulty::Easy, &mut picker).unwrap();
/// assert_eq!(word.text(), "cat");
/// assert!(select_word(&words, Difficulty::Hard, &mut picker).is_err());
/// ```
pub fn select_word<'a, P: WordPicker + ?Sized>(
    words: &'a WordList,
    level: Difficulty,
    picker: &mut P,
) -> Result<&'a Word, SelectionError> {
    let candidates = words.filter(level);
    picker
        .pick(&candidates)
        .ok_or(SelectionError::Empty(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    /// Always picks the candidate at a fixed index
    struct IndexPicker(usize);

    impl WordPicker for IndexPicker {
        fn pick<'a>(&mut self, candidates: &[&'a Word]) -> Option<&'a Word> {
            candidates.get(self.0).copied()
        }
    }

    #[test]
    fn select_word_uses_filtered_candidates() {
        let words = words_from_slice(&["cat", "bridge", "dog", "castle"]);

        let word = select_word(&words, Difficulty::Medium, &mut IndexPicker(1)).unwrap();
        assert_eq!(word.text(), "castle");

        let word = select_word(&words, Difficulty::Easy, &mut IndexPicker(0)).unwrap();
        assert_eq!(word.text(), "cat");
    }

    #[test]
    fn select_word_from_empty_bucket_fails() {
        let words = words_from_slice(&["blanket", "captain", "diamond"]);

        let result = select_word(&words, Difficulty::Easy, &mut RandomPicker::seeded(1));
        assert_eq!(result, Err(SelectionError::Empty(Difficulty::Easy)));
    }

    #[test]
    fn select_word_from_empty_list_fails() {
        let words = WordList::default();
        let result = select_word(&words, Difficulty::Hard, &mut RandomPicker::seeded(1));
        assert_eq!(result, Err(SelectionError::Empty(Difficulty::Hard)));
    }

    #[test]
    fn random_picker_returns_a_candidate() {
        let words = words_from_slice(&["cat", "dog", "owl", "fox"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let mut picker = RandomPicker::from_entropy();

        for _ in 0..20 {
            let word = picker.pick(&candidates).unwrap();
            assert!(candidates.contains(&word));
        }
    }

    #[test]
    fn random_picker_handles_empty() {
        assert!(RandomPicker::seeded(3).pick(&[]).is_none());
    }

    #[test]
    fn seeded_pickers_agree() {
        let words = words_from_slice(&["cat", "dog", "owl", "fox", "emu", "yak"]);
        let candidates: Vec<&Word> = words.iter().collect();

        let mut first = RandomPicker::seeded(42);
        let mut second = RandomPicker::seeded(42);
        for _ in 0..10 {
            assert_eq!(first.pick(&candidates), second.pick(&candidates));
        }
    }

    #[test]
    fn random_picker_eventually_picks_everything() {
        let words = words_from_slice(&["cat", "dog", "owl"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let mut picker = RandomPicker::seeded(9);

        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..200 {
            seen.insert(picker.pick(&candidates).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
