//! Local game loop
//!
//! Plays one full game against a known solution with no service involved.
//! Every guess is accepted; only solver failures can abort the game.

use super::{GameError, GameOutcome, GameStatus, GuessRecord};
use crate::core::{Score, Word};
use crate::solver::{Feedback, Solver};
use log::debug;

/// Play one game against `solution`, capped at `max_turns` guesses
///
/// The solver is reset before the first turn, so one instance can be
/// reused across sequential games.
///
/// # Errors
/// Returns `GameError::Solver` if the solver cannot produce a guess.
pub fn play_local_game(
    solver: &mut dyn Solver,
    solution: &Word,
    max_turns: usize,
) -> Result<GameOutcome, GameError> {
    solver.reset();

    let mut records = Vec::new();
    let mut feedback = Feedback::GameStart;

    for turn in 1..=max_turns {
        let guess = solver.next_guess(&feedback)?;
        let score = Score::of(&guess, solution);
        debug!("turn {turn}: {guess} scored {score}");

        records.push(GuessRecord {
            word: guess.clone(),
            score,
            turn,
        });

        if score.is_win() {
            return Ok(GameOutcome {
                status: GameStatus::Won,
                records,
            });
        }

        feedback = Feedback::Scored { guess, score };
    }

    Ok(GameOutcome {
        status: GameStatus::Lost,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencySolver, SolverError};

    /// Cycles through a fixed word list, one word per turn
    struct ScriptedSolver {
        script: Vec<Word>,
        position: usize,
    }

    impl ScriptedSolver {
        fn new(script: &[&str]) -> Self {
            Self {
                script: script.iter().map(|s| Word::new(*s).unwrap()).collect(),
                position: 0,
            }
        }
    }

    impl Solver for ScriptedSolver {
        fn reset(&mut self) {
            self.position = 0;
        }

        fn next_guess(&mut self, feedback: &Feedback) -> Result<Word, SolverError> {
            // A rejected guess retries the same turn with the next word,
            // without any turn accounting to rewind
            let _ = feedback;
            let word = self.script[self.position % self.script.len()].clone();
            self.position += 1;
            Ok(word)
        }
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn scripted_game_is_won_in_two_guesses() {
        let mut solver = ScriptedSolver::new(&["bread", "cigar"]);
        let outcome = play_local_game(&mut solver, &word("cigar"), 5).unwrap();

        assert!(outcome.is_won());
        assert_eq!(outcome.num_guesses(), 2);

        let pairs: Vec<(String, String)> = outcome
            .records
            .iter()
            .map(|r| (r.word.to_string(), r.score.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("bread".to_string(), "wywgw".to_string()),
                ("cigar".to_string(), "ggggg".to_string()),
            ]
        );
    }

    #[test]
    fn turn_cap_is_never_exceeded() {
        let mut solver = ScriptedSolver::new(&["bread", "cigar"]);
        let outcome = play_local_game(&mut solver, &word("joule"), 2).unwrap();

        assert!(!outcome.is_won());
        assert_eq!(outcome.num_guesses(), 2);
        assert_eq!(outcome.status, GameStatus::Lost);
    }

    #[test]
    fn records_carry_ordinal_turns() {
        let mut solver = ScriptedSolver::new(&["slate", "crane", "cigar"]);
        let outcome = play_local_game(&mut solver, &word("cigar"), 6).unwrap();

        let turns: Vec<usize> = outcome.records.iter().map(|r| r.turn).collect();
        assert_eq!(turns, vec![1, 2, 3]);
    }

    #[test]
    fn loop_resets_the_solver_between_games() {
        let mut solver = ScriptedSolver::new(&["bread", "cigar"]);

        let first = play_local_game(&mut solver, &word("cigar"), 5).unwrap();
        let second = play_local_game(&mut solver, &word("cigar"), 5).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn frequency_solver_wins_a_local_game() {
        let dictionary: Vec<Word> = ["cigar", "sugar", "lunar", "briar", "slate"]
            .iter()
            .map(|s| word(s))
            .collect();
        let mut solver = FrequencySolver::new(dictionary);

        let outcome = play_local_game(&mut solver, &word("cigar"), 6).unwrap();
        assert!(outcome.is_won());
        assert_eq!(
            outcome.records.last().unwrap().word,
            word("cigar")
        );
    }

    #[test]
    fn solver_exhaustion_is_fatal() {
        let mut solver = FrequencySolver::new(Vec::new());
        let result = play_local_game(&mut solver, &word("cigar"), 6);

        assert_eq!(result, Err(GameError::Solver(SolverError::NoCandidates)));
    }
}
