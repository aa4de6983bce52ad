//! Game service interface
//!
//! The tournament loop talks to an abstract game service: something that
//! registers users, creates seeded games, scores guesses, and accepts bulk
//! reports of offline-scored games. The in-process oracle here is the
//! reference implementation; an HTTP binding would implement the same
//! trait outside this crate.

mod oracle;

pub use oracle::OracleService;

use crate::core::{Score, Word};
use crate::game::{GameStatus, GuessRecord};
use thiserror::Error;

/// A registered tournament user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: u64,
    pub description: String,
}

/// A created game, as reported by the service
///
/// The solution is echoed back by the service; game loops must never leak
/// it to the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub game_id: u64,
    pub user_id: u64,
    pub seed: u64,
    pub solution: Word,
    pub num_guesses: usize,
    pub done: bool,
}

/// The service's verdict on one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub word: Word,
    pub score: Score,
    pub done: bool,
}

/// Acknowledgement of a bulk-reported game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedGame {
    pub game_id: u64,
    pub seed: u64,
    pub status: GameStatus,
}

/// Error type for game service failures
///
/// `UnrecognizedWord` is the recoverable rejection signal (HTTP 422 in the
/// reference binding); every other variant is a fatal transport or service
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("word '{0}' is not in the service dictionary")]
    UnrecognizedWord(Word),
    #[error("unknown user id {0}")]
    UnknownUser(u64),
    #[error("unknown game id {0}")]
    UnknownGame(u64),
    #[error("game {0} is already finished")]
    GameFinished(u64),
    #[error("service failure: {0}")]
    Transport(String),
}

impl ServiceError {
    /// Whether this is the invalid-word rejection signal
    ///
    /// Rejections are retried within the same turn; everything else aborts
    /// the game.
    #[inline]
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::UnrecognizedWord(_))
    }
}

/// The game service collaborator driven by the tournament loop
pub trait GameService {
    /// Register a user to play under
    ///
    /// # Errors
    /// Returns `ServiceError` on any service failure.
    fn create_user(&mut self, name: Option<&str>, description: &str)
    -> Result<User, ServiceError>;

    /// Create a game for a user
    ///
    /// An explicit `solution` takes precedence over `seed`; with neither,
    /// the service picks a solution itself.
    ///
    /// # Errors
    /// Returns `ServiceError` on any service failure.
    fn create_game(
        &mut self,
        user_id: u64,
        seed: Option<u64>,
        solution: Option<&Word>,
    ) -> Result<GameSession, ServiceError>;

    /// Submit one guess for an open game
    ///
    /// # Errors
    /// Returns `ServiceError::UnrecognizedWord` if the word is not in the
    /// service dictionary (recoverable, same-turn retry), any other variant
    /// on fatal failures.
    fn submit_guess(&mut self, game_id: u64, word: &Word) -> Result<GuessOutcome, ServiceError>;

    /// Report a fully offline-scored game in one call
    ///
    /// # Errors
    /// Returns `ServiceError` on any service failure.
    fn submit_complete_game(
        &mut self,
        user_id: u64,
        seed: u64,
        solution: &Word,
        status: GameStatus,
        history: &[GuessRecord],
    ) -> Result<CompletedGame, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_predicate_distinguishes_the_taxonomy() {
        let word = Word::new("zzzzz").unwrap();

        assert!(ServiceError::UnrecognizedWord(word).is_rejection());
        assert!(!ServiceError::UnknownUser(1).is_rejection());
        assert!(!ServiceError::UnknownGame(1).is_rejection());
        assert!(!ServiceError::GameFinished(1).is_rejection());
        assert!(!ServiceError::Transport("timeout".into()).is_rejection());
    }
}
