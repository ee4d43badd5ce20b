//! Terminal output formatting
//!
//! Renderers for the board and display utilities for results.

pub mod display;
pub mod formatters;

pub use display::{print_word_stats, write_round_result, write_session_summary};
pub use formatters::{render_board, render_man, render_pattern};
