//! In-process oracle service
//!
//! A `GameService` that knows the solutions and scores guesses itself,
//! backed by the core scorer and the canonical word lists. Used by the CLI
//! tournament and as the loop's primary test collaborator.

use super::{CompletedGame, GameService, GameSession, GuessOutcome, ServiceError, User};
use crate::core::{Score, Word};
use crate::game::{GameStatus, GuessRecord};
use crate::wordlists::{self, GUESSABLE};
use log::{debug, info};
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};

struct OracleGame {
    solution: Word,
    num_guesses: usize,
    done: bool,
}

/// Oracle implementation of the game service
///
/// Users and games live in memory; ids are assigned sequentially. A game
/// is marked done only when a guess wins; turn caps are the client's job.
pub struct OracleService {
    dictionary: FxHashSet<Word>,
    solutions: Vec<Word>,
    users: FxHashMap<u64, User>,
    games: FxHashMap<u64, OracleGame>,
    completed: Vec<CompletedGame>,
    next_user_id: u64,
    next_game_id: u64,
}

impl OracleService {
    /// Create an oracle backed by the embedded canonical word lists
    #[must_use]
    pub fn new() -> Self {
        let dictionary = wordlists::loader::words_from_slice(GUESSABLE)
            .into_iter()
            .collect();
        let solutions = wordlists::loader::words_from_slice(wordlists::SOLUTIONS);
        Self::from_parts(dictionary, solutions)
    }

    /// Create an oracle over custom word lists
    ///
    /// `dictionary` is the set of accepted guesses; `solutions` is the
    /// ordered seed space.
    #[must_use]
    pub fn with_words(dictionary: Vec<Word>, solutions: Vec<Word>) -> Self {
        Self::from_parts(dictionary.into_iter().collect(), solutions)
    }

    fn from_parts(dictionary: FxHashSet<Word>, solutions: Vec<Word>) -> Self {
        Self {
            dictionary,
            solutions,
            users: FxHashMap::default(),
            games: FxHashMap::default(),
            completed: Vec::new(),
            next_user_id: 1,
            next_game_id: 1,
        }
    }

    /// Games reported through `submit_complete_game`, in arrival order
    #[must_use]
    pub fn completed_games(&self) -> &[CompletedGame] {
        &self.completed
    }

    fn resolve_solution(
        &self,
        seed: Option<u64>,
        solution: Option<&Word>,
    ) -> Result<(u64, Word), ServiceError> {
        if self.solutions.is_empty() {
            return Err(ServiceError::Transport("no solutions configured".into()));
        }

        // Explicit solution wins over seed; with neither, pick at random
        if let Some(word) = solution {
            return Ok((seed.unwrap_or(0), word.clone()));
        }

        let index = match seed {
            Some(seed) => (seed % self.solutions.len() as u64) as usize,
            None => rand::rng().random_range(0..self.solutions.len()),
        };
        Ok((seed.unwrap_or(index as u64), self.solutions[index].clone()))
    }

    fn check_user(&self, user_id: u64) -> Result<(), ServiceError> {
        if self.users.contains_key(&user_id) {
            Ok(())
        } else {
            Err(ServiceError::UnknownUser(user_id))
        }
    }
}

impl Default for OracleService {
    fn default() -> Self {
        Self::new()
    }
}

impl GameService for OracleService {
    fn create_user(
        &mut self,
        name: Option<&str>,
        description: &str,
    ) -> Result<User, ServiceError> {
        let user_id = self.next_user_id;
        self.next_user_id += 1;

        let description = match name {
            Some(name) => format!("{name}: {description}"),
            None => description.to_string(),
        };

        let user = User {
            user_id,
            description,
        };
        info!("registered user {user_id} ({})", user.description);
        self.users.insert(user_id, user.clone());
        Ok(user)
    }

    fn create_game(
        &mut self,
        user_id: u64,
        seed: Option<u64>,
        solution: Option<&Word>,
    ) -> Result<GameSession, ServiceError> {
        self.check_user(user_id)?;
        let (seed, solution) = self.resolve_solution(seed, solution)?;

        let game_id = self.next_game_id;
        self.next_game_id += 1;

        debug!("created game {game_id} for user {user_id}, seed {seed}");
        self.games.insert(
            game_id,
            OracleGame {
                solution: solution.clone(),
                num_guesses: 0,
                done: false,
            },
        );

        Ok(GameSession {
            game_id,
            user_id,
            seed,
            solution,
            num_guesses: 0,
            done: false,
        })
    }

    fn submit_guess(&mut self, game_id: u64, word: &Word) -> Result<GuessOutcome, ServiceError> {
        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(ServiceError::UnknownGame(game_id))?;

        if game.done {
            return Err(ServiceError::GameFinished(game_id));
        }

        // The rejection signal: valid shape, not a dictionary word
        if !self.dictionary.contains(word) {
            return Err(ServiceError::UnrecognizedWord(word.clone()));
        }

        let score = Score::of(word, &game.solution);
        game.num_guesses += 1;
        game.done = score.is_win();

        debug!("game {game_id}: {word} scored {score}");
        Ok(GuessOutcome {
            word: word.clone(),
            score,
            done: game.done,
        })
    }

    fn submit_complete_game(
        &mut self,
        user_id: u64,
        seed: u64,
        solution: &Word,
        status: GameStatus,
        history: &[GuessRecord],
    ) -> Result<CompletedGame, ServiceError> {
        self.check_user(user_id)?;

        let game_id = self.next_game_id;
        self.next_game_id += 1;

        self.games.insert(
            game_id,
            OracleGame {
                solution: solution.clone(),
                num_guesses: history.len(),
                done: true,
            },
        );

        let completed = CompletedGame {
            game_id,
            seed,
            status,
        };
        info!(
            "reported game {game_id}, seed {seed}, {status} in {} guesses",
            history.len()
        );
        self.completed.push(completed.clone());
        Ok(completed)
    }
}
