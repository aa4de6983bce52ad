//! Feedback-consistency filter
//!
//! Decides whether a candidate word could still be the solution given
//! observed (guess, score) feedback. A candidate is consistent with one
//! observation exactly when scoring the guess against the candidate
//! reproduces the observed score, so the filter shares the scorer's
//! duplicate-letter semantics by construction.

use super::{Score, Word};

/// Check whether `candidate` could have produced `score` when `guess` was
/// scored against it
///
/// # Examples
/// ```
/// use wordle_arena::core::{Score, Word, is_consistent};
///
/// let guess = Word::new("bread").unwrap();
/// let solution = Word::new("cigar").unwrap();
/// let score = Score::of(&guess, &solution);
///
/// assert!(is_consistent(&solution, &guess, &score));
/// assert!(!is_consistent(&Word::new("slate").unwrap(), &guess, &score));
/// ```
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, score: &Score) -> bool {
    Score::of(guess, candidate) == *score
}

/// Check whether `candidate` is consistent with an entire game's feedback
///
/// A word survives iff it is consistent with every (guess, score) pair
/// observed this game.
#[must_use]
pub fn is_consistent_with_history(candidate: &Word, history: &[(Word, Score)]) -> bool {
    history
        .iter()
        .all(|(guess, score)| is_consistent(candidate, guess, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn solution_is_always_consistent_with_its_own_score() {
        let pairs = [
            ("bread", "cigar"),
            ("crane", "slate"),
            ("speed", "erase"),
            ("aaaab", "aaaaa"),
            ("ccccb", "bbbbb"),
            ("baaac", "caaab"),
        ];

        for (guess, solution) in pairs {
            let guess = word(guess);
            let solution = word(solution);
            let score = Score::of(&guess, &solution);
            assert!(
                is_consistent(&solution, &guess, &score),
                "{solution} must be consistent with score({guess}, {solution})"
            );
        }
    }

    #[test]
    fn exact_positions_pin_the_candidate() {
        // cigar scored against itself: only cigar survives
        let guess = word("cigar");
        let score = Score::of(&guess, &word("cigar"));

        assert!(is_consistent(&word("cigar"), &guess, &score));
        assert!(!is_consistent(&word("sugar"), &guess, &score));
    }

    #[test]
    fn misplaced_letter_forbidden_at_its_position() {
        // r scored y at position 1 means the candidate has an r, but not there
        let guess = word("bread");
        let score = "wywww".parse().unwrap();

        assert!(!is_consistent(&word("armor"), &guess, &score)); // r at position 1 would score g
        assert!(!is_consistent(&word("crumb"), &guess, &score)); // contains b
        assert!(is_consistent(&word("furor"), &guess, &score));
    }

    #[test]
    fn absent_letter_excluded_from_candidate() {
        let guess = word("bread");
        let solution = word("cigar");
        let score = Score::of(&guess, &solution); // wywgw

        // Contains a b, which scored w
        assert!(!is_consistent(&word("rabid"), &guess, &score));
    }

    #[test]
    fn misplaced_letters_require_the_full_budget() {
        // speed vs erase = "ywyyw": both misplaced e's must fit the
        // candidate's letter budget
        let guess = word("speed");
        let score = Score::of(&guess, &word("erase"));

        assert!(is_consistent(&word("erase"), &guess, &score));
        assert!(is_consistent(&word("verse"), &guess, &score));
        // hanse has only one e, so the second misplaced e would score w
        assert!(!is_consistent(&word("hanse"), &guess, &score));
    }

    #[test]
    fn history_filter_conjoins_all_observations() {
        let history = vec![
            (word("bread"), Score::of(&word("bread"), &word("cigar"))),
            (word("caird"), Score::of(&word("caird"), &word("cigar"))),
        ];

        assert!(is_consistent_with_history(&word("cigar"), &history));
        // Consistent with the first observation only
        assert!(is_consistent_with_history(&word("solar"), &history[..1]));
        assert!(!is_consistent_with_history(&word("solar"), &history));
        assert!(is_consistent_with_history(&word("cigar"), &[]));
    }
}
