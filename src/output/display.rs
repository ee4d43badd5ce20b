//! Display functions for game results

use super::formatters::spaced_letters;
use crate::commands::{SessionStats, WordStats};
use crate::core::Word;
use colored::Colorize;
use std::io::{self, Write};

/// Width of the rule printed after a round result
const RESULT_RULE_WIDTH: usize = 20;

/// Write the end-of-round result: the full word and a win or lose message
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_round_result<W: Write>(out: &mut W, secret: &Word, won: bool) -> io::Result<()> {
    writeln!(
        out,
        "\nThe word was: {}",
        spaced_letters(secret.text().as_bytes()).bright_white().bold()
    )?;
    if won {
        writeln!(out, "{}", "Congratulations, YOU WIN!".green().bold())?;
    } else {
        writeln!(out, "{}", "Game over, YOU LOSE!".red().bold())?;
    }
    writeln!(out, "{}", "=".repeat(RESULT_RULE_WIDTH))
}

/// Write the closing summary of a session
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_session_summary<W: Write>(out: &mut W, stats: &SessionStats) -> io::Result<()> {
    if stats.rounds_played == 0 {
        return writeln!(out, "\nThanks for playing!");
    }
    writeln!(
        out,
        "\nThanks for playing! You won {} of {} {}.",
        stats.rounds_won.to_string().bright_cyan().bold(),
        stats.rounds_played,
        if stats.rounds_played == 1 {
            "round"
        } else {
            "rounds"
        }
    )
}

/// Print the word list breakdown
pub fn print_word_stats(stats: &WordStats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "WORD LIST".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("\n   Total words:  {}", stats.total.to_string().bright_yellow());
    for (level, count) in stats.per_level() {
        let count_text = if count == 0 {
            "0 (unplayable)".red().to_string()
        } else {
            count.to_string()
        };
        let label = format!("{level}:");
        println!("   {label:<12}  {count_text}");
    }
    if let (Some(shortest), Some(longest)) = (&stats.shortest, &stats.longest) {
        println!("   Shortest:     {shortest} ({})", shortest.len());
        println!("   Longest:      {longest} ({})", longest.len());
    }
}
