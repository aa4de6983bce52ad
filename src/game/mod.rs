//! Game loops and tournament machinery
//!
//! Shared game types plus the two loops that drive solvers: the local
//! in-memory oracle loop and the service-backed tournament runner.

mod benchmark;
mod local;
mod tournament;

pub use benchmark::{BenchmarkReport, run_benchmark};
pub use local::play_local_game;
pub use tournament::{
    DEFAULT_MAX_REJECTIONS, DEFAULT_MAX_TURNS, TournamentConfig, TournamentRecord,
    TournamentRunner,
};

use crate::core::{Score, Word, WordError};
use crate::service::ServiceError;
use crate::solver::SolverError;
use std::fmt;
use thiserror::Error;

/// Terminal outcome of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The solution was guessed within the turn cap
    Won,
    /// The turn cap was exhausted (or the service ended the game) without
    /// a winning guess
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One accepted guess and its score
///
/// `turn` is 1-based; rejected guesses never become records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub score: Score,
    pub turn: usize,
}

/// Full result of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub records: Vec<GuessRecord>,
}

impl GameOutcome {
    /// Whether the game was won
    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Number of accepted guesses
    #[inline]
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.records.len()
    }
}

/// Error type for game loop failures
///
/// Everything here is fatal to the current game; the recoverable
/// invalid-word rejection is handled inside the loop and never surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Solver(#[from] SolverError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("guess '{word}' still rejected after {limit} retries")]
    RejectionLimit { word: Word, limit: usize },
}
