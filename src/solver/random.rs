//! Seeded random strategy
//!
//! Picks uniformly from the surviving candidate pool. The RNG is seeded at
//! construction and re-seeded on every `reset()`, so tournament replays
//! with the same seed produce the same guesses.

use super::{Feedback, Solver, SolverError};
use crate::core::{Word, is_consistent};
use log::warn;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Uniform-random solver with a deterministic seed
pub struct RandomSolver {
    dictionary: Vec<Word>,
    pool: Vec<Word>,
    rng_seed: u64,
    rng: StdRng,
}

impl RandomSolver {
    /// Create a solver drawing candidates from `dictionary`
    #[must_use]
    pub fn new(dictionary: Vec<Word>, rng_seed: u64) -> Self {
        let pool = dictionary.clone();
        Self {
            dictionary,
            pool,
            rng_seed,
            rng: StdRng::seed_from_u64(rng_seed),
        }
    }

    /// Number of candidates still in the pool
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }
}

impl Solver for RandomSolver {
    fn reset(&mut self) {
        self.pool = self.dictionary.clone();
        self.rng = StdRng::seed_from_u64(self.rng_seed);
    }

    fn next_guess(&mut self, feedback: &Feedback) -> Result<Word, SolverError> {
        match feedback {
            Feedback::GameStart => {}
            Feedback::Scored { guess, score } => {
                self.pool.retain(|word| is_consistent(word, guess, score));
            }
            Feedback::Rejected { guess } => {
                warn!("guess {guess} rejected, removing from pool");
                self.pool.retain(|word| word != guess);
                self.dictionary.retain(|word| word != guess);
            }
        }

        self.pool
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SolverError::NoCandidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    #[test]
    fn same_seed_gives_same_guesses() {
        let dictionary = words(&["cigar", "sugar", "lunar", "briar", "crane"]);

        let mut first = RandomSolver::new(dictionary.clone(), 42);
        let mut second = RandomSolver::new(dictionary, 42);
        first.reset();
        second.reset();

        for _ in 0..5 {
            assert_eq!(
                first.next_guess(&Feedback::GameStart).unwrap(),
                second.next_guess(&Feedback::GameStart).unwrap()
            );
        }
    }

    #[test]
    fn reset_replays_the_seed() {
        let mut solver = RandomSolver::new(words(&["cigar", "sugar", "lunar", "briar"]), 7);
        solver.reset();
        let first = solver.next_guess(&Feedback::GameStart).unwrap();

        solver.reset();
        assert_eq!(solver.next_guess(&Feedback::GameStart).unwrap(), first);
    }

    #[test]
    fn scored_feedback_narrows_the_pool() {
        let mut solver = RandomSolver::new(words(&["cigar", "sugar", "slate"]), 1);
        solver.reset();

        let guess = word("cigar");
        let score = Score::of(&guess, &word("cigar"));
        let next = solver.next_guess(&Feedback::Scored { guess, score }).unwrap();

        assert_eq!(next, word("cigar"));
        assert_eq!(solver.pool_len(), 1);
    }

    #[test]
    fn exhausted_pool_reports_no_candidates() {
        let mut solver = RandomSolver::new(words(&["slate"]), 1);
        solver.reset();

        let guess = word("cigar");
        let score = Score::of(&guess, &word("cigar"));
        let result = solver.next_guess(&Feedback::Scored { guess, score });

        assert_eq!(result, Err(SolverError::NoCandidates));
    }
}
