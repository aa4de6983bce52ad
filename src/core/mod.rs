//! Core domain types for Wordle
//!
//! The fundamental pure pieces: validated words, feedback scores, and the
//! consistency filter. Everything here is deterministic and side-effect free.

mod filter;
mod score;
mod word;

/// Word and score length for standard Wordle
pub const WORD_LEN: usize = 5;

pub use filter::{is_consistent, is_consistent_with_history};
pub use score::{LetterScore, Score, ScoreParseError};
pub use word::{Word, WordError};
