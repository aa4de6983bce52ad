//! Wordle score calculation and representation
//!
//! A Score records the per-position verdict for one guess against one
//! solution, using the wire alphabet:
//! - `g` = letter in the correct position
//! - `y` = letter present but misplaced
//! - `w` = letter absent given the remaining letter budget
//!
//! A Score is only meaningful for the exact (guess, solution) pair that
//! produced it.

use super::{WORD_LEN, Word};
use std::fmt;
use thiserror::Error;

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Right letter, right position (`g`)
    Exact,
    /// Letter occurs elsewhere in the solution (`y`)
    Misplaced,
    /// Letter not in the solution, given already-consumed occurrences (`w`)
    Absent,
}

impl LetterScore {
    /// The wire character for this verdict
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Exact => 'g',
            Self::Misplaced => 'y',
            Self::Absent => 'w',
        }
    }
}

/// Feedback score for a Wordle guess
///
/// One verdict per letter position. The wire representation is a
/// length-5 string over `{g,y,w}`, e.g. `"wywgw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([LetterScore; WORD_LEN]);

/// Error type for malformed wire score strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreParseError {
    #[error("score must be exactly {WORD_LEN} characters, got {0}")]
    InvalidLength(usize),
    #[error("invalid score character '{0}', expected one of 'g', 'y', 'w'")]
    InvalidCharacter(char),
}

impl Score {
    /// All greens (winning score)
    pub const WIN: Self = Self([LetterScore::Exact; WORD_LEN]);

    /// Score `guess` against `solution`
    ///
    /// This implements Wordle's exact feedback rules, including proper
    /// handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (`g`) and consume them from the
    ///    solution's letter budget
    /// 2. Second pass: mark misplaced letters (`y`) while budget remains,
    ///    everything else `w`
    ///
    /// A letter guessed more often than the solution contains it gets at
    /// most that many non-`w` marks, and `g` takes priority over `y`
    /// regardless of scan order.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::{Score, Word};
    ///
    /// let guess = Word::new("bread").unwrap();
    /// let solution = Word::new("cigar").unwrap();
    /// assert_eq!(Score::of(&guess, &solution).to_string(), "wywgw");
    /// ```
    #[must_use]
    pub fn of(guess: &Word, solution: &Word) -> Self {
        let mut result = [LetterScore::Absent; WORD_LEN];
        let mut budget = solution.char_counts();

        // First pass: exact matches consume the budget first
        // Allow: index needed to compare guess[i] with solution[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == solution.char_at(i) {
                result[i] = LetterScore::Exact;

                if let Some(count) = budget.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters while budget remains
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == LetterScore::Absent
                && let Some(count) = budget.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterScore::Misplaced;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Get the per-position verdicts
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterScore; WORD_LEN] {
        &self.0
    }

    /// Check if this is the winning score (all `g`)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&l| l == LetterScore::Exact)
    }

    /// Count the exact-position matches
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&l| l == LetterScore::Exact).count()
    }

    /// Count the present-but-misplaced matches
    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.0
            .iter()
            .filter(|&&l| l == LetterScore::Misplaced)
            .count()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Score {
    type Err = ScoreParseError;

    /// Parse a wire score string like `"wywgw"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return Err(ScoreParseError::InvalidLength(chars.len()));
        }

        let mut result = [LetterScore::Absent; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            result[i] = match ch {
                'g' => LetterScore::Exact,
                'y' => LetterScore::Misplaced,
                'w' => LetterScore::Absent,
                other => return Err(ScoreParseError::InvalidCharacter(other)),
            };
        }

        Ok(Self(result))
    }
}
