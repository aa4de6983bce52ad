//! Wordle Arena
//!
//! Plays Wordle against a local in-process oracle or an abstract game
//! service, and drives automated solvers through seeded tournaments.
//! The core is the duplicate-letter-correct scorer, the feedback
//! consistency filter, and the game/tournament loops built on them.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_arena::core::Word;
//! use wordle_arena::game::play_local_game;
//! use wordle_arena::solver::FrequencySolver;
//! use wordle_arena::wordlists::{GUESSABLE, loader::words_from_slice};
//!
//! let mut solver = FrequencySolver::new(words_from_slice(GUESSABLE));
//! let solution = Word::new("cigar").unwrap();
//!
//! let outcome = play_local_game(&mut solver, &solution, 6).unwrap();
//! println!("{} in {} guesses", outcome.status, outcome.num_guesses());
//! ```

// Core domain types
pub mod core;

// Game loops and tournaments
pub mod game;

// Game service collaborator
pub mod service;

// Guessing strategies
pub mod solver;

// Word lists
pub mod wordlists;
