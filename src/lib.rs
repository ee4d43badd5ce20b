//! Hangman
//!
//! A console word-guessing game with easy, medium and hard word lists.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{RoundState, RoundStatus, Word, MAX_WRONG};
//!
//! let mut round = RoundState::new(Word::new("cat").unwrap(), MAX_WRONG);
//! for letter in ["c", "a", "t"] {
//!     round.guess(letter).unwrap();
//! }
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game rules
pub mod config;

// Secret word selection
pub mod selection;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
