//! Difficulty levels
//!
//! Words are bucketed purely by length, so every word falls in exactly one level.

use super::Word;
use std::fmt;
use std::str::FromStr;

/// Longest word length counted as easy
const EASY_MAX_LEN: usize = 5;
/// Longest word length counted as medium; anything longer is hard
const MEDIUM_MAX_LEN: usize = 8;

/// One of the three fixed difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Up to 5 letters
    Easy,
    /// 6 to 8 letters
    Medium,
    /// 9 letters or more
    Hard,
}

impl Difficulty {
    /// All levels, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Classify a word length
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::for_length(5), Difficulty::Easy);
    /// assert_eq!(Difficulty::for_length(6), Difficulty::Medium);
    /// assert_eq!(Difficulty::for_length(9), Difficulty::Hard);
    /// ```
    #[must_use]
    pub const fn for_length(len: usize) -> Self {
        if len <= EASY_MAX_LEN {
            Self::Easy
        } else if len <= MEDIUM_MAX_LEN {
            Self::Medium
        } else {
            Self::Hard
        }
    }

    /// Whether a word belongs to this level
    #[inline]
    #[must_use]
    pub fn matches(self, word: &Word) -> bool {
        Self::for_length(word.len()) == self
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text names no difficulty level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError(pub String);

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown difficulty '{}', expected easy, medium or hard",
            self.0
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Case-insensitive, ignores surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.trim().to_string())),
        }
    }
}

/// Words matching a difficulty level, in their original order
#[must_use]
pub fn filter_by_difficulty(words: &[Word], level: Difficulty) -> Vec<&Word> {
    words.iter().filter(|w| level.matches(w)).collect()
}
