//! Guessing strategies
//!
//! Defines the Solver trait the game loops drive, the per-turn feedback it
//! receives, and the concrete strategies.

mod frequency;
mod random;

pub use frequency::FrequencySolver;
pub use random::RandomSolver;

use crate::core::{Score, Word};
use thiserror::Error;

/// Feedback about the previous guess, passed to the solver each turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// No guess has been made yet this game
    GameStart,
    /// The previous guess was accepted and scored
    Scored { guess: Word, score: Score },
    /// The previous guess was refused as not a dictionary word; the same
    /// turn is being retried and no turn accounting may advance
    Rejected { guess: Word },
}

/// Error type for solver failures
///
/// A rejected previous guess is normal turn state, never an error; the only
/// failure a strategy reports is running out of candidates, which callers
/// treat as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("no candidate words remain consistent with the observed feedback")]
    NoCandidates,
}

/// A guessing strategy driven by a game loop
///
/// Implementations are reusable across sequential games: the loop calls
/// `reset()` before each game, then `next_guess` once per turn (and again
/// within the same turn after a rejection).
pub trait Solver {
    /// Clear per-game state ahead of a new game
    fn reset(&mut self);

    /// Produce the next guess given feedback about the previous one
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if no word remains to guess.
    fn next_guess(&mut self, feedback: &Feedback) -> Result<Word, SolverError>;
}

/// Enum wrapper for the shipped strategies
///
/// Allows runtime selection by name while keeping static dispatch.
pub enum SolverKind {
    /// Letter-frequency pool narrowing (default)
    Frequency(FrequencySolver),
    /// Seeded uniform choice from the surviving pool
    Random(RandomSolver),
}

impl SolverKind {
    /// Create a solver from a name string
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if the
    /// name is unrecognized. `opening` forces the first guess of the
    /// frequency strategy; `rng_seed` seeds the random strategy.
    #[must_use]
    pub fn from_name(
        name: &str,
        dictionary: Vec<Word>,
        opening: Option<Word>,
        rng_seed: u64,
    ) -> Self {
        match name {
            "random" => Self::Random(RandomSolver::new(dictionary, rng_seed)),
            _ => match opening {
                Some(word) => Self::Frequency(FrequencySolver::with_opening(dictionary, word)),
                None => Self::Frequency(FrequencySolver::new(dictionary)),
            },
        }
    }
}

impl Solver for SolverKind {
    fn reset(&mut self) {
        match self {
            Self::Frequency(s) => s.reset(),
            Self::Random(s) => s.reset(),
        }
    }

    fn next_guess(&mut self, feedback: &Feedback) -> Result<Word, SolverError> {
        match self {
            Self::Frequency(s) => s.next_guess(feedback),
            Self::Random(s) => s.next_guess(feedback),
        }
    }
}
