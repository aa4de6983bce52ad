//! Wordle Arena - CLI
//!
//! Solve single words locally, run seeded tournaments against the
//! in-process oracle, or benchmark a strategy over the canonical
//! solution list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use wordle_arena::{
    core::{LetterScore, Word},
    game::{
        BenchmarkReport, GameStatus, TournamentConfig, TournamentRecord, TournamentRunner,
        play_local_game, run_benchmark,
    },
    service::OracleService,
    solver::SolverKind,
    wordlists::{
        GUESSABLE, SOLUTIONS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_arena",
    about = "Wordle scoring engine, solvers, and tournament runner",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: frequency (default) or random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Force the first guess (frequency strategy only)
    #[arg(short = 'f', long, global = true)]
    first_word: Option<String>,

    /// Path to a custom word list for the solver pool
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// RNG seed for the random strategy
    #[arg(long, global = true, default_value = "0")]
    rng_seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one local game against a known solution
    Solve {
        /// The target word to solve
        word: String,

        /// Turn cap
        #[arg(short = 't', long, default_value = "6")]
        max_turns: usize,
    },

    /// Play a seeded tournament against the in-process oracle
    Tournament {
        /// First seed (inclusive)
        #[arg(long, default_value = "0")]
        seed_start: u64,

        /// Last seed (inclusive); defaults to the full solution list
        #[arg(long)]
        seed_end: Option<u64>,

        /// Score games locally and bulk-report results instead of
        /// submitting every guess
        #[arg(long)]
        offline: bool,

        /// Turn cap per game
        #[arg(short = 't', long, default_value = "6")]
        max_turns: usize,

        /// Per-turn cap on invalid-word retries
        #[arg(long, default_value = "10")]
        max_rejections: usize,

        /// Description registered with the service
        #[arg(long, default_value = "wordle_arena tournament entry")]
        description: String,
    },

    /// Play every canonical solution and aggregate statistics
    Benchmark {
        /// Limit the number of solutions tested
        #[arg(short, long)]
        limit: Option<usize>,

        /// Turn cap per game
        #[arg(short = 't', long, default_value = "6")]
        max_turns: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    let opening = cli
        .first_word
        .as_deref()
        .map(|w| Word::new(w).context("invalid --first-word"))
        .transpose()?;

    match cli.command {
        Commands::Solve { word, max_turns } => {
            let solution = Word::new(&word).context("invalid target word")?;
            let mut solver =
                SolverKind::from_name(&cli.strategy, dictionary, opening, cli.rng_seed);

            let outcome = play_local_game(&mut solver, &solution, max_turns)
                .with_context(|| format!("game against '{solution}' failed"))?;

            for record in &outcome.records {
                println!(
                    "  {}. {}  {}",
                    record.turn,
                    colorize_guess(&record.word, record.score.letters()),
                    record.score
                );
            }
            match outcome.status {
                GameStatus::Won => println!(
                    "{} {solution} in {} guesses",
                    "solved".green().bold(),
                    outcome.num_guesses()
                ),
                GameStatus::Lost => println!(
                    "{} {solution} after {} guesses",
                    "failed".red().bold(),
                    outcome.num_guesses()
                ),
            }
        }

        Commands::Tournament {
            seed_start,
            seed_end,
            offline,
            max_turns,
            max_rejections,
            description,
        } => {
            let mut config = TournamentConfig::new(
                seed_start,
                seed_end.unwrap_or((SOLUTIONS.len() - 1) as u64),
            );
            config.max_turns = max_turns;
            config.max_rejections = max_rejections;

            let mut solver =
                SolverKind::from_name(&cli.strategy, dictionary, opening, cli.rng_seed);
            let mut runner = TournamentRunner::new(OracleService::new(), config);
            let user = runner
                .register_user(None, &description)
                .context("user registration failed")?;

            let results = if offline {
                runner.run_offline(&mut solver, user.user_id)
            } else {
                runner.run_online(&mut solver, user.user_id)
            }
            .context("tournament aborted")?;

            print_tournament_summary(&results);
        }

        Commands::Benchmark { limit, max_turns } => {
            let solutions = words_from_slice(SOLUTIONS);
            let solutions = &solutions[..limit.unwrap_or(solutions.len()).min(solutions.len())];
            println!("Benchmarking {} solutions...", solutions.len());

            let report = run_benchmark(
                || SolverKind::from_name(&cli.strategy, dictionary.clone(), opening.clone(), cli.rng_seed),
                solutions,
                max_turns,
            )
            .context("benchmark aborted")?;

            print_benchmark_report(&report);
        }
    }

    Ok(())
}

/// Load the solver pool: a custom file if given, the embedded guessable
/// dictionary otherwise
fn load_dictionary(wordlist: Option<&str>) -> Result<Vec<Word>> {
    match wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to load word list from {path}"))?;
            anyhow::ensure!(!words.is_empty(), "word list {path} contains no valid words");
            Ok(words)
        }
        None => Ok(words_from_slice(GUESSABLE)),
    }
}

fn colorize_guess(word: &Word, letters: &[LetterScore]) -> String {
    word.text()
        .chars()
        .zip(letters)
        .map(|(ch, letter)| {
            let ch = ch.to_string().to_uppercase();
            match letter {
                LetterScore::Exact => ch.green().bold().to_string(),
                LetterScore::Misplaced => ch.yellow().bold().to_string(),
                LetterScore::Absent => ch.dimmed().to_string(),
            }
        })
        .collect()
}

fn print_tournament_summary(results: &[TournamentRecord]) {
    let won = results
        .iter()
        .filter(|r| r.status == GameStatus::Won)
        .count();
    let total_guesses: usize = results.iter().map(|r| r.records.len()).sum();

    println!("\n{}", "Tournament results".bold());
    println!("  games:  {}", results.len());
    println!(
        "  won:    {} ({:.1}%)",
        won,
        100.0 * won as f64 / results.len().max(1) as f64
    );
    if !results.is_empty() {
        println!(
            "  avg guesses: {:.2}",
            total_guesses as f64 / results.len() as f64
        );
    }

    for record in results.iter().filter(|r| r.status == GameStatus::Lost) {
        println!(
            "  {} seed {} ({} guesses)",
            "lost".red(),
            record.seed,
            record.records.len()
        );
    }
}

fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\n{}", "Benchmark results".bold());
    println!("  games:  {}", report.total);
    println!(
        "  solved: {} ({:.1}%)",
        report.solved,
        100.0 * report.solve_rate()
    );
    println!("  avg guesses: {:.2}", report.average_guesses);

    let mut counts: Vec<(usize, usize)> = report
        .guess_distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();
    for (guesses, count) in counts {
        let bar_len = 40 * count / report.solved.max(1);
        println!("  {guesses}: {:<5} {}", count, "█".repeat(bar_len).cyan());
    }

    if !report.failed_words.is_empty() {
        println!("  {}: {}", "failed".red(), report.failed_words.join(", "));
    }
}
