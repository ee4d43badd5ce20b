//! Round state and guess evaluation
//!
//! A `RoundState` owns the secret word for one round and applies guesses to it.
//! Rejected guesses never change the state.

use super::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Outcome of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Effect of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the secret; `revealed` positions were uncovered
    Hit { letter: char, revealed: usize },
    /// Letter is not in the secret
    Miss { letter: char },
}

/// Reasons a guess is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input is not exactly one ASCII letter
    Invalid(String),
    /// Letter was already tried this round
    Duplicate(char),
    /// Round has already been won or lost
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(_) => write!(f, "Invalid input. Please enter a single letter."),
            Self::Duplicate(letter) => {
                write!(f, "You already guessed '{letter}'. Try a different letter.")
            }
            Self::RoundOver => write!(f, "The round is already over."),
        }
    }
}

impl std::error::Error for GuessError {}

/// Normalize raw input into a single lowercase letter
///
/// # Errors
///
/// Returns `GuessError::Invalid` unless the trimmed input is exactly one ASCII letter.
///
/// # Examples
/// ```
/// use hangman::core::parse_guess;
///
/// assert_eq!(parse_guess(" E\n"), Ok(b'e'));
/// assert!(parse_guess("ab").is_err());
/// assert!(parse_guess("5").is_err());
/// ```
pub fn parse_guess(input: &str) -> Result<u8, GuessError> {
    let trimmed = input.trim();
    match trimmed.as_bytes() {
        [letter] if letter.is_ascii_alphabetic() => Ok(letter.to_ascii_lowercase()),
        _ => Err(GuessError::Invalid(trimmed.to_string())),
    }
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct RoundState {
    secret: Word,
    revealed: Vec<Option<u8>>,
    guessed: FxHashSet<u8>,
    wrong_count: usize,
    max_wrong: usize,
}

impl RoundState {
    /// Start a round with nothing revealed
    #[must_use]
    pub fn new(secret: Word, max_wrong: usize) -> Self {
        let revealed = vec![None; secret.len()];
        Self {
            secret,
            revealed,
            guessed: FxHashSet::default(),
            wrong_count: 0,
            max_wrong,
        }
    }

    /// Apply one guess
    ///
    /// All occurrences of a correct letter are revealed at once; a wrong letter
    /// costs one of the allowed misses.
    ///
    /// # Errors
    ///
    /// Returns a `GuessError` (leaving the state untouched) if the round is over,
    /// the input is not a single letter, or the letter was already guessed.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.status().is_over() {
            return Err(GuessError::RoundOver);
        }

        let letter = parse_guess(input)?;
        if !self.guessed.insert(letter) {
            return Err(GuessError::Duplicate(char::from(letter)));
        }

        if !self.secret.has_letter(letter) {
            self.wrong_count += 1;
            return Ok(GuessOutcome::Miss {
                letter: char::from(letter),
            });
        }

        let positions = self.secret.positions_of(letter);
        for &i in positions {
            self.revealed[i] = Some(letter);
        }
        Ok(GuessOutcome::Hit {
            letter: char::from(letter),
            revealed: positions.len(),
        })
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.revealed.iter().all(Option::is_some) {
            RoundStatus::Won
        } else if self.wrong_count >= self.max_wrong {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Per-position view of the secret, `None` for letters not yet guessed
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[Option<u8>] {
        &self.revealed
    }

    #[inline]
    #[must_use]
    pub const fn wrong_count(&self) -> usize {
        self.wrong_count
    }

    /// Misses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining_misses(&self) -> usize {
        self.max_wrong.saturating_sub(self.wrong_count)
    }

    /// Every letter tried so far, alphabetically
    #[must_use]
    pub fn guessed_sorted(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }
}
