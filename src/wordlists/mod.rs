//! Canonical word lists
//!
//! Process-wide read-only dictionaries compiled into the binary: the
//! ordered solution list (the tournament seed space) and the guessable
//! superset (the dictionary the game service accepts).

mod embedded;
pub mod loader;

pub use embedded::{GUESSABLE, GUESSABLE_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

/// Resolve a tournament seed to its canonical solution
///
/// Seeds wrap around the solution list, so every seed maps to exactly one
/// word and replaying a seed always yields the same solution.
#[must_use]
pub fn solution_for_seed(seed: u64) -> &'static str {
    SOLUTIONS[(seed % SOLUTIONS.len() as u64) as usize]
}
