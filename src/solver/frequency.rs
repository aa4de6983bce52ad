//! Letter-frequency pool-narrowing strategy
//!
//! The reference strategy: keep a pool of candidate solutions, filter it
//! with the consistency filter after every scored guess, and guess the
//! candidate whose letters are most common across the surviving pool.

use super::{Feedback, Solver, SolverError};
use crate::core::{Word, is_consistent};
use log::{debug, warn};

/// Frequency-narrowing solver
///
/// Deterministic: the candidate pool keeps dictionary order and ties break
/// to the first maximal word, so identical feedback always yields identical
/// guesses.
pub struct FrequencySolver {
    dictionary: Vec<Word>,
    pool: Vec<Word>,
    opening: Option<Word>,
}

impl FrequencySolver {
    /// Create a solver drawing candidates from `dictionary`
    #[must_use]
    pub fn new(dictionary: Vec<Word>) -> Self {
        let pool = dictionary.clone();
        Self {
            dictionary,
            pool,
            opening: None,
        }
    }

    /// Create a solver with a fixed opening word
    ///
    /// The opening is guessed on the first turn of every game; narrowing
    /// proceeds as usual from the second turn.
    #[must_use]
    pub fn with_opening(dictionary: Vec<Word>, opening: Word) -> Self {
        let mut solver = Self::new(dictionary);
        solver.opening = Some(opening);
        solver
    }

    /// Number of candidates still in the pool
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Pick the pool word maximizing summed letter frequency over the pool
    ///
    /// Each letter occurrence contributes the letter's total occurrence
    /// count across the current pool; duplicates count every time they
    /// occur. The first maximal word wins ties.
    fn pick(&self) -> Result<Word, SolverError> {
        let mut counts = [0u32; 26];
        for word in &self.pool {
            for &ch in word.chars() {
                counts[(ch - b'a') as usize] += 1;
            }
        }

        let mut best: Option<(&Word, u32)> = None;
        for word in &self.pool {
            let total: u32 = word
                .chars()
                .iter()
                .map(|&ch| counts[(ch - b'a') as usize])
                .sum();

            if best.is_none_or(|(_, best_total)| total > best_total) {
                best = Some((word, total));
            }
        }

        best.map(|(word, _)| word.clone())
            .ok_or(SolverError::NoCandidates)
    }
}

impl Solver for FrequencySolver {
    fn reset(&mut self) {
        self.pool = self.dictionary.clone();
    }

    fn next_guess(&mut self, feedback: &Feedback) -> Result<Word, SolverError> {
        match feedback {
            Feedback::GameStart => {
                if let Some(opening) = &self.opening {
                    return Ok(opening.clone());
                }
            }
            Feedback::Scored { guess, score } => {
                let before = self.pool.len();
                self.pool.retain(|word| is_consistent(word, guess, score));
                debug!(
                    "pool narrowed {before} -> {} after {guess} scored {score}",
                    self.pool.len()
                );
            }
            Feedback::Rejected { guess } => {
                // Not a dictionary word: drop it for this game and all
                // future resets, then retry the same turn
                warn!("guess {guess} rejected, removing from pool");
                self.pool.retain(|word| word != guess);
                self.dictionary.retain(|word| word != guess);
            }
        }

        self.pick()
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
    fn picks_word_with_most_common_letters() {
        // z occurs five times across the pool, every other letter at most
        // three, so the all-z word scores highest
        let mut solver = FrequencySolver::new(words(&["abcde", "abcdf", "abcdg", "zzzzz"]));
        solver.reset();

        assert_eq!(solver.next_guess(&Feedback::GameStart).unwrap(), word("zzzzz"));
    }

    #[test]
    fn ties_break_to_first_pool_word() {
        let mut solver = FrequencySolver::new(words(&["abcde", "abcdf"]));
        solver.reset();

        // Both words score a+b+c+d+1; the first wins
        assert_eq!(solver.next_guess(&Feedback::GameStart).unwrap(), word("abcde"));
    }

    #[test]
    fn scored_feedback_narrows_the_pool() {
        let mut solver = FrequencySolver::new(words(&["cigar", "sugar", "slate", "crane"]));
        solver.reset();
        assert_eq!(solver.pool_len(), 4);

        let guess = word("cigar");
        let score = Score::of(&guess, &word("cigar"));
        solver
            .next_guess(&Feedback::Scored { guess, score })
            .unwrap();

        // Only the exact match survives an all-green score
        assert_eq!(solver.pool_len(), 1);
    }

    #[test]
    fn pool_is_monotonically_non_increasing() {
        let mut solver = FrequencySolver::new(words(&["cigar", "sugar", "lunar", "briar", "crane"]));
        solver.reset();

        let solution = word("cigar");
        let mut guess = solver.next_guess(&Feedback::GameStart).unwrap();
        let mut sizes = vec![solver.pool_len()];

        for _ in 0..4 {
            let score = Score::of(&guess, &solution);
            if score.is_win() {
                break;
            }
            guess = solver.next_guess(&Feedback::Scored { guess, score }).unwrap();
            sizes.push(solver.pool_len());
        }

        for pair in sizes.windows(2) {
            assert!(pair[1] <= pair[0], "pool grew from {} to {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn identical_feedback_yields_identical_guesses() {
        let dictionary = words(&["cigar", "sugar", "lunar", "briar", "crane", "slate"]);
        let solution = word("lunar");

        let run = |solver: &mut FrequencySolver| {
            solver.reset();
            let mut guesses = Vec::new();
            let mut feedback = Feedback::GameStart;
            for _ in 0..6 {
                let guess = solver.next_guess(&feedback).unwrap();
                let score = Score::of(&guess, &solution);
                guesses.push(guess.clone());
                if score.is_win() {
                    break;
                }
                feedback = Feedback::Scored { guess, score };
            }
            guesses
        };

        let mut first = FrequencySolver::new(dictionary.clone());
        let mut second = FrequencySolver::new(dictionary);
        assert_eq!(run(&mut first), run(&mut second));
    }

    #[test]
    fn rejection_is_not_fatal_and_offers_a_different_word() {
        let mut solver = FrequencySolver::new(words(&["cigar", "sugar"]));
        solver.reset();

        let first = solver.next_guess(&Feedback::GameStart).unwrap();
        let retry = solver
            .next_guess(&Feedback::Rejected {
                guess: first.clone(),
            })
            .unwrap();

        assert_ne!(first, retry);
        // The rejected word stays gone after a reset
        solver.reset();
        assert_eq!(solver.pool_len(), 1);
    }

    #[test]
    fn exhausted_pool_reports_no_candidates() {
        let mut solver = FrequencySolver::new(words(&["slate"]));
        solver.reset();

        // slate cannot have produced an all-green score for cigar
        let guess = word("cigar");
        let score = Score::of(&guess, &word("cigar"));
        let result = solver.next_guess(&Feedback::Scored { guess, score });

        assert_eq!(result, Err(SolverError::NoCandidates));
    }

    #[test]
    fn opening_word_is_used_on_game_start() {
        let mut solver =
            FrequencySolver::with_opening(words(&["cigar", "sugar"]), word("slate"));
        solver.reset();

        assert_eq!(solver.next_guess(&Feedback::GameStart).unwrap(), word("slate"));
    }
}
