//! Benchmark harness
//!
//! Plays every requested solution through the local game loop with a
//! fresh solver per game and aggregates the results. Games are mutually
//! independent, so they run in parallel; within each game the sequential
//! solver contract holds.

use super::{GameError, local::play_local_game};
use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;

/// Aggregated results of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// Number of games played
    pub total: usize,
    /// Number of games won within the turn cap
    pub solved: usize,
    /// Average guesses per solved game
    pub average_guesses: f64,
    /// Solved-game count per number of guesses
    pub guess_distribution: HashMap<usize, usize>,
    /// Solutions the solver failed to find
    pub failed_words: Vec<String>,
}

impl BenchmarkReport {
    /// Fraction of games won
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.solved as f64 / self.total as f64
        }
    }
}

/// Play each solution with a fresh solver and aggregate the outcomes
///
/// `make_solver` is called once per game, so solver state never leaks
/// between the parallel games.
///
/// # Errors
/// Returns the first `GameError` any game produced.
///
/// # Panics
/// Panics if the progress bar template is malformed (fixed at compile
/// time).
pub fn run_benchmark<S, F>(
    make_solver: F,
    solutions: &[Word],
    max_turns: usize,
) -> Result<BenchmarkReport, GameError>
where
    S: Solver,
    F: Fn() -> S + Sync,
{
    let progress = ProgressBar::new(solutions.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let outcomes = solutions
        .par_iter()
        .map(|solution| {
            let mut solver = make_solver();
            let outcome = play_local_game(&mut solver, solution, max_turns)?;
            progress.inc(1);
            Ok((solution.text().to_string(), outcome))
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    progress.finish_and_clear();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut failed_words = Vec::new();
    let mut total_guesses = 0usize;
    let mut solved = 0usize;

    for (solution, outcome) in &outcomes {
        if outcome.is_won() {
            solved += 1;
            total_guesses += outcome.num_guesses();
            *guess_distribution.entry(outcome.num_guesses()).or_insert(0) += 1;
        } else {
            failed_words.push(solution.clone());
        }
    }

    let average_guesses = if solved == 0 {
        0.0
    } else {
        total_guesses as f64 / solved as f64
    };

    Ok(BenchmarkReport {
        total: outcomes.len(),
        solved,
        average_guesses,
        guess_distribution,
        failed_words,
    })
}
