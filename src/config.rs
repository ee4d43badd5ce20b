//! Game rules
//!
//! Everything a session treats as constant: the miss limit and the gallows art.

use crate::core::MAX_WRONG;
use std::fmt;

/// Border drawn above and below the figure
pub const BORDER: &str = "**********";

/// Hangman figure for each wrong-guess count, three lines per stage
pub const HANGMAN_STAGES: [[&str; 3]; MAX_WRONG + 1] = [
    ["   ", "   ", "   "],
    [" o ", "   ", "   "],
    [" o ", " | ", "   "],
    [" o ", "/| ", "   "],
    [" o ", "/|\\", "   "],
    [" o ", "/|\\", "/  "],
    [" o ", "/|\\", "/ \\"],
];

/// A rule set that cannot be played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The art table needs at least the empty gallows and one miss
    TooFewStages(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewStages(count) => {
                write!(f, "Hangman art needs at least 2 stages, got {count}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable rule set passed into the game loop
///
/// The miss limit is one less than the number of art stages, so every
/// wrong-guess count has a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_wrong: usize,
    stages: &'static [[&'static str; 3]],
    border: &'static str,
}

impl GameConfig {
    /// Build a rule set from an art table, one stage per wrong-guess count
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TooFewStages` if `stages` has fewer than two entries.
    pub fn new(
        stages: &'static [[&'static str; 3]],
        border: &'static str,
    ) -> Result<Self, ConfigError> {
        if stages.len() < 2 {
            return Err(ConfigError::TooFewStages(stages.len()));
        }
        Ok(Self {
            max_wrong: stages.len() - 1,
            stages,
            border,
        })
    }

    #[inline]
    #[must_use]
    pub const fn max_wrong(&self) -> usize {
        self.max_wrong
    }

    #[inline]
    #[must_use]
    pub const fn border(&self) -> &'static str {
        self.border
    }

    /// Figure lines for a wrong-guess count, clamped to the last stage
    #[must_use]
    pub fn stage(&self, wrong_count: usize) -> &'static [&'static str; 3] {
        &self.stages[wrong_count.min(self.max_wrong)]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong: MAX_WRONG,
            stages: &HANGMAN_STAGES,
            border: BORDER,
        }
    }
}
