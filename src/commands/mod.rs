//! Command implementations

pub mod play;
pub mod stats;

pub use play::{Game, InputClosed, SessionStats, run_play};
pub use stats::{WordStats, word_stats};
