//! Tournament runner
//!
//! Plays an ordered range of seeded games against a game service. Two
//! modes: online, submitting every guess to the service for scoring, and
//! offline, scoring each game locally and bulk-reporting only the result.
//! Both modes resolve seeds through the same canonical solution list, so
//! replays are reproducible.

use super::{GameError, GameStatus, GuessRecord, local::play_local_game};
use crate::core::Word;
use crate::service::{GameService, User};
use crate::solver::{Feedback, Solver};
use crate::wordlists::{self, SOLUTIONS_COUNT};
use log::{info, warn};

/// Default turn cap per game
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Default per-turn cap on invalid-word retries
///
/// Independent of the turn cap: a solver that keeps producing rejected
/// words fails fast instead of spinning inside one turn.
pub const DEFAULT_MAX_REJECTIONS: usize = 10;

/// Tournament parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentConfig {
    /// First seed to play (inclusive)
    pub seed_start: u64,
    /// Last seed to play (inclusive)
    pub seed_end: u64,
    /// Turn cap per game
    pub max_turns: usize,
    /// Per-turn cap on invalid-word retries
    pub max_rejections: usize,
}

impl TournamentConfig {
    /// Configure an explicit inclusive seed range
    #[must_use]
    pub const fn new(seed_start: u64, seed_end: u64) -> Self {
        Self {
            seed_start,
            seed_end,
            max_turns: DEFAULT_MAX_TURNS,
            max_rejections: DEFAULT_MAX_REJECTIONS,
        }
    }

    /// Configure one game per canonical solution
    #[must_use]
    pub const fn full_range() -> Self {
        Self::new(0, (SOLUTIONS_COUNT - 1) as u64)
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::full_range()
    }
}

/// Result of one tournament game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentRecord {
    pub seed: u64,
    /// Index into the canonical solution list
    pub solution_index: usize,
    pub status: GameStatus,
    pub records: Vec<GuessRecord>,
}

/// Drives a solver through a seed range against a game service
pub struct TournamentRunner<S: GameService> {
    service: S,
    config: TournamentConfig,
}

impl<S: GameService> TournamentRunner<S> {
    /// Create a runner over a service
    pub const fn new(service: S, config: TournamentConfig) -> Self {
        Self { service, config }
    }

    /// Register the user the tournament plays under
    ///
    /// # Errors
    /// Returns `GameError::Service` on any service failure.
    pub fn register_user(
        &mut self,
        name: Option<&str>,
        description: &str,
    ) -> Result<User, GameError> {
        Ok(self.service.create_user(name, description)?)
    }

    /// Consume the runner, returning the service
    pub fn into_service(self) -> S {
        self.service
    }

    /// Play the configured seed range online, one service call per guess
    ///
    /// The solver is reset between games so no pool or turn state leaks
    /// across seeds.
    ///
    /// # Errors
    /// Returns `GameError` on solver exhaustion, fatal service failures,
    /// or a turn exceeding the rejection cap. The run aborts at the first
    /// failed game.
    pub fn run_online(
        &mut self,
        solver: &mut dyn Solver,
        user_id: u64,
    ) -> Result<Vec<TournamentRecord>, GameError> {
        let mut results = Vec::new();
        for seed in self.config.seed_start..=self.config.seed_end {
            solver.reset();
            let record = self.play_online_game(solver, user_id, seed)?;
            info!(
                "seed {seed}: {} in {} guesses",
                record.status,
                record.records.len()
            );
            results.push(record);
        }
        Ok(results)
    }

    /// Play the configured seed range offline, bulk-reporting each result
    ///
    /// Each seed's solution comes from the canonical list (the same
    /// mapping the oracle uses), the game runs through the local loop,
    /// and only the finished game is reported to the service.
    ///
    /// # Errors
    /// Returns `GameError` on solver exhaustion or service failures.
    pub fn run_offline(
        &mut self,
        solver: &mut dyn Solver,
        user_id: u64,
    ) -> Result<Vec<TournamentRecord>, GameError> {
        let mut results = Vec::new();
        for seed in self.config.seed_start..=self.config.seed_end {
            let solution = Word::new(wordlists::solution_for_seed(seed))?;
            let outcome = play_local_game(solver, &solution, self.config.max_turns)?;

            self.service.submit_complete_game(
                user_id,
                seed,
                &solution,
                outcome.status,
                &outcome.records,
            )?;
            info!(
                "seed {seed}: {} in {} guesses (offline)",
                outcome.status,
                outcome.num_guesses()
            );

            results.push(TournamentRecord {
                seed,
                solution_index: canonical_index(seed),
                status: outcome.status,
                records: outcome.records,
            });
        }
        Ok(results)
    }

    fn play_online_game(
        &mut self,
        solver: &mut dyn Solver,
        user_id: u64,
        seed: u64,
    ) -> Result<TournamentRecord, GameError> {
        let session = self.service.create_game(user_id, Some(seed), None)?;

        let mut records = Vec::new();
        let mut feedback = Feedback::GameStart;
        let mut turn = 1;
        let mut rejections = 0;

        let status = loop {
            let guess = solver.next_guess(&feedback)?;

            match self.service.submit_guess(session.game_id, &guess) {
                Err(err) if err.is_rejection() => {
                    // Same turn retried: no record, no turn advance
                    rejections += 1;
                    warn!("seed {seed}, turn {turn}: {guess} rejected ({rejections})");
                    if rejections > self.config.max_rejections {
                        return Err(GameError::RejectionLimit {
                            word: guess,
                            limit: self.config.max_rejections,
                        });
                    }
                    feedback = Feedback::Rejected { guess };
                }
                Err(err) => return Err(err.into()),
                Ok(outcome) => {
                    rejections = 0;
                    records.push(GuessRecord {
                        word: outcome.word.clone(),
                        score: outcome.score,
                        turn,
                    });

                    if outcome.score.is_win() {
                        break GameStatus::Won;
                    }
                    // The service may end a game without a winning score
                    if outcome.done || turn >= self.config.max_turns {
                        break GameStatus::Lost;
                    }

                    feedback = Feedback::Scored {
                        guess: outcome.word,
                        score: outcome.score,
                    };
                    turn += 1;
                }
            }
        };

        Ok(TournamentRecord {
            seed,
            solution_index: canonical_index(seed),
            status,
            records,
        })
    }
}

fn canonical_index(seed: u64) -> usize {
    (seed % SOLUTIONS_COUNT as u64) as usize
}
