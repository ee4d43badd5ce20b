//! Hangman - CLI
//!
//! Guess the hidden word one letter at a time before the figure is complete.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_play, word_stats},
    config::GameConfig,
    output::print_word_stats,
    selection::RandomPicker,
    wordlists::{BUILTIN, WordList, load_from_file, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Console hangman with easy, medium and hard word lists",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: path to a file with one word per line, or 'builtin'
    #[arg(
        short = 'w',
        long,
        global = true,
        default_value = "data/hangman_words.txt"
    )]
    wordlist: String,

    /// Seed for word selection (same seed, same words)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play hangman (default)
    Play,

    /// Show how the word list splits across difficulty levels
    Stats,
}

/// Load the word list named by the -w flag
///
/// - "builtin": the list embedded at build time
/// - "<path>": a word file; a missing or empty file is fatal
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "builtin" => Ok(words_from_slice(BUILTIN)),
        path => load_from_file(path)
            .context("Cannot load words (try '-w builtin' or a path to a word file)"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Fail fast: never start a game without words
    let words = load_wordlist(&cli.wordlist)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            run_play(&words, GameConfig::default(), RandomPicker::new(cli.seed))?;
        }
        Commands::Stats => print_word_stats(&word_stats(&words)),
    }

    Ok(())
}
