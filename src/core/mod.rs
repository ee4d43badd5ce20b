//! Core domain types for hangman
//!
//! Pure game logic with no terminal I/O: words, difficulty buckets and the
//! per-round state machine.

mod difficulty;
mod round;
mod word;

pub use difficulty::{Difficulty, ParseDifficultyError, filter_by_difficulty};
pub use round::{GuessError, GuessOutcome, RoundState, RoundStatus, parse_guess};
pub use word::{Word, WordError};

/// Wrong guesses allowed before a round is lost
pub const MAX_WRONG: usize = 6;
