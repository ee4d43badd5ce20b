//! Interactive game loop
//!
//! Drives rounds over any line-based input and writer, so sessions can be
//! scripted in tests exactly as a player would type them.

use crate::config::GameConfig;
use crate::core::{Difficulty, GuessError, GuessOutcome, RoundState, RoundStatus, Word};
use crate::output::{render_board, render_man, write_round_result, write_session_summary};
use crate::selection::{WordPicker, select_word};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt;
use std::io::{BufRead, Write};

const DIFFICULTY_PROMPT: &str = "Choose a difficulty level (easy, medium, hard): ";
const GUESS_PROMPT: &str = "Enter a letter: ";
const REPLAY_PROMPT: &str = "Do you want to play again? (yes/no): ";

/// The input stream ended while a prompt was waiting for an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input closed before the game finished")
    }
}

impl std::error::Error for InputClosed {}

/// Rounds played during one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

/// A hangman session over the given input and output
pub struct Game<'a, P, R, W> {
    words: &'a WordList,
    config: GameConfig,
    picker: P,
    input: R,
    output: W,
    stats: SessionStats,
}

impl<'a, P: WordPicker, R: BufRead, W: Write> Game<'a, P, R, W> {
    #[must_use]
    pub fn new(words: &'a WordList, config: GameConfig, picker: P, input: R, output: W) -> Self {
        Self {
            words,
            config,
            picker,
            input,
            output,
            stats: SessionStats::default(),
        }
    }

    /// Play rounds until the player declines a replay
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` if the input ends at any prompt, or an I/O error
    /// from reading or writing.
    pub fn run(&mut self) -> Result<SessionStats> {
        loop {
            let secret = self.choose_secret()?;
            let status = self.play_round(secret)?;

            self.stats.rounds_played += 1;
            if status == RoundStatus::Won {
                self.stats.rounds_won += 1;
            }

            if !self.ask_play_again()? {
                break;
            }
        }

        write_session_summary(&mut self.output, &self.stats)?;
        self.output.flush()?;
        Ok(self.stats)
    }

    /// Prompt for difficulty until a level with words is chosen
    fn choose_secret(&mut self) -> Result<Word> {
        loop {
            let level = self.select_difficulty()?;
            match select_word(self.words, level, &mut self.picker) {
                Ok(word) => return Ok(word.clone()),
                Err(e) => writeln!(self.output, "{}", e.to_string().yellow())?,
            }
        }
    }

    fn select_difficulty(&mut self) -> Result<Difficulty> {
        loop {
            let answer = self.prompt(DIFFICULTY_PROMPT)?;
            if let Ok(level) = answer.parse() {
                return Ok(level);
            }
            writeln!(
                self.output,
                "Invalid input. Please enter 'easy', 'medium', or 'hard'."
            )?;
        }
    }

    /// Play one round to completion and show the result
    fn play_round(&mut self, secret: Word) -> Result<RoundStatus> {
        let mut round = RoundState::new(secret, self.config.max_wrong());

        while !round.status().is_over() {
            writeln!(self.output, "{}", render_board(&self.config, &round))?;

            let answer = self.prompt(GUESS_PROMPT)?;
            match round.guess(&answer) {
                Ok(GuessOutcome::Hit { letter, revealed }) => {
                    let times = if revealed == 1 { "time" } else { "times" };
                    let message = format!("Good guess! '{letter}' appears {revealed} {times}.");
                    writeln!(self.output, "{}", message.green())?;
                }
                Ok(GuessOutcome::Miss { letter }) => {
                    let message = format!("Sorry, '{letter}' is not in the word.");
                    writeln!(self.output, "{}", message.red())?;
                }
                Err(e @ (GuessError::Invalid(_) | GuessError::Duplicate(_))) => {
                    writeln!(self.output, "{}", e.to_string().yellow())?;
                }
                Err(GuessError::RoundOver) => break,
            }
        }

        let status = round.status();
        writeln!(
            self.output,
            "{}",
            render_man(&self.config, round.wrong_count())
        )?;
        write_round_result(
            &mut self.output,
            round.secret(),
            status == RoundStatus::Won,
        )?;
        Ok(status)
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        let answer = self.prompt(REPLAY_PROMPT)?;
        Ok(answer.eq_ignore_ascii_case("yes"))
    }

    /// Show a prompt and read one trimmed line
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
    /// line is answered by the caller's own re-prompt.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Err(InputClosed.into());
        }

        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }
}

/// Run a session on standard input and output
///
/// # Errors
///
/// Returns an error if standard input closes mid-game or the terminal fails.
pub fn run_play<P: WordPicker>(
    words: &WordList,
    config: GameConfig,
    picker: P,
) -> Result<SessionStats> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Game::new(words, config, picker, stdin.lock(), stdout.lock()).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::RandomPicker;
    use crate::wordlists::words_from_slice;
    use std::io::Cursor;

    /// Play a scripted session; returns the result and everything written
    fn play(words: &[&str], script: &str) -> (Result<SessionStats>, String) {
        let words = words_from_slice(words);
        let mut output = Vec::new();
        let result = Game::new(
            &words,
            GameConfig::default(),
            RandomPicker::seeded(0),
            Cursor::new(script.to_string()),
            &mut output,
        )
        .run();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_round_then_quit() {
        let (result, out) = play(&["apple"], "easy\na\np\nl\ne\nno\n");

        let stats = result.unwrap();
        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.rounds_won, 1);

        assert!(out.contains("Current word: _ _ _ _ _"));
        assert!(out.contains("Current word: a _ _ _ _"));
        assert!(out.contains("Current word: a p p _ _"));
        assert!(out.contains("Current word: a p p l _"));
        assert!(out.contains("Guessed letters: a l p"));
        assert!(out.contains("a p p l e"));
        assert!(out.contains("Congratulations, YOU WIN!"));
        assert!(out.contains(REPLAY_PROMPT));
    }

    #[test]
    fn losing_round_draws_full_figure() {
        let (result, out) = play(&["cat"], "easy\nx\ny\nz\nq\nw\nr\nno\n");

        let stats = result.unwrap();
        assert_eq!(stats.rounds_won, 0);
        assert_eq!(stats.rounds_played, 1);
        assert!(out.contains("/|\\\n/ \\"));
        assert!(out.contains("Game over, YOU LOSE!"));
        assert!(out.contains("c a t"));
    }

    #[test]
    fn difficulty_prompt_repeats_until_valid() {
        let (result, out) = play(&["cat"], "extreme\n\nEASY\nc\na\nt\nno\n");

        assert!(result.is_ok());
        assert_eq!(out.matches(DIFFICULTY_PROMPT).count(), 3);
        assert_eq!(
            out.matches("Invalid input. Please enter 'easy', 'medium', or 'hard'.")
                .count(),
            2
        );
    }

    #[test]
    fn empty_difficulty_returns_to_prompt() {
        let (result, out) = play(&["blanket"], "easy\nmedium\nb\nl\na\nn\nk\ne\nt\nno\n");

        assert!(out.contains("No easy words are available"));
        assert_eq!(out.matches(DIFFICULTY_PROMPT).count(), 2);
        let stats = result.unwrap();
        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.rounds_won, 1);
    }

    #[test]
    fn invalid_and_duplicate_guesses_reprompt() {
        let (result, out) = play(&["cat"], "easy\n5\nab\nc\nc\na\nt\nno\n");

        assert_eq!(result.unwrap().rounds_won, 1);
        assert_eq!(
            out.matches("Invalid input. Please enter a single letter.")
                .count(),
            2
        );
        assert!(out.contains("You already guessed 'c'. Try a different letter."));
        assert_eq!(out.matches(GUESS_PROMPT).count(), 6);
    }

    #[test]
    fn guess_feedback_reports_hits_and_misses() {
        let (result, out) = play(&["apple"], "easy\np\nz\na\nl\ne\nno\n");

        assert_eq!(result.unwrap().rounds_won, 1);
        assert!(out.contains("Good guess! 'p' appears 2 times."));
        assert!(out.contains("Good guess! 'a' appears 1 time."));
        assert!(out.contains("Sorry, 'z' is not in the word."));
        assert!(out.contains("Wrong guesses left: 5"));
    }

    #[test]
    fn non_utf8_lines_reprompt() {
        let words = words_from_slice(&["cat"]);
        let script: &[u8] = b"\xff\xfe\neasy\n\xe9\nc\na\nt\nno\n";
        let mut output = Vec::new();
        let result = Game::new(
            &words,
            GameConfig::default(),
            RandomPicker::seeded(0),
            Cursor::new(script),
            &mut output,
        )
        .run();
        let out = String::from_utf8(output).unwrap();

        let stats = result.unwrap();
        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(out.matches(DIFFICULTY_PROMPT).count(), 2);
        assert_eq!(
            out.matches("Invalid input. Please enter a single letter.")
                .count(),
            1
        );
    }

    #[test]
    fn replay_plays_another_round() {
        let (result, out) = play(&["cat"], "easy\nc\na\nt\nYes\neasy\nz\nc\na\nt\nno\n");

        let stats = result.unwrap();
        assert_eq!(stats.rounds_played, 2);
        assert_eq!(stats.rounds_won, 2);
        assert_eq!(out.matches(REPLAY_PROMPT).count(), 2);
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = play(&["cat"], "easy\nc\n");

        let err = result.unwrap_err();
        assert!(err.downcast_ref::<InputClosed>().is_some());
    }

    #[test]
    fn closed_input_at_difficulty_prompt() {
        let (result, out) = play(&["cat"], "");

        assert!(result.unwrap_err().is::<InputClosed>());
        assert!(out.contains(DIFFICULTY_PROMPT));
    }
}
