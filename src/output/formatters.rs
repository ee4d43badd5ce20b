//! Formatting utilities for terminal output
//!
//! Plain-text renderers; colors are applied by the callers.

use crate::config::GameConfig;
use crate::core::RoundState;

/// Hangman figure for the current wrong-guess count, border included
#[must_use]
pub fn render_man(config: &GameConfig, wrong_count: usize) -> String {
    let mut lines = Vec::with_capacity(5);
    lines.push(config.border());
    lines.extend(config.stage(wrong_count).iter().copied());
    lines.push(config.border());
    lines.join("\n")
}

/// Revealed pattern as space-separated letters, `_` for blanks
#[must_use]
pub fn render_pattern(revealed: &[Option<u8>]) -> String {
    revealed
        .iter()
        .map(|slot| slot.map_or_else(|| "_".to_string(), |c| char::from(c).to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters separated by spaces, in the order given
#[must_use]
pub fn spaced_letters(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&c| char::from(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full board for a round in progress: figure, pattern, guessed letters and
/// the misses still allowed
#[must_use]
pub fn render_board(config: &GameConfig, round: &RoundState) -> String {
    format!(
        "{}\nCurrent word: {}\nGuessed letters: {}\nWrong guesses left: {}",
        render_man(config, round.wrong_count()),
        render_pattern(round.revealed()),
        spaced_letters(&round.guessed_sorted()),
        round.remaining_misses(),
    )
}
