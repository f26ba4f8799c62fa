//! Guess evaluation
//!
//! Compares a guess with a secret and classifies every letter of the guess:
//! - `Perfect`: same letter at the same position
//! - `Misplaced`: the letter occurs elsewhere in the secret
//! - `Absent`: no occurrence of the letter is left for this position
//!
//! Duplicate letters are handled with an occurrence budget per letter, so a
//! letter is never reported more often than it occurs in the secret.

use super::Word;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Perfect,
    Misplaced,
    Absent,
}

impl Feedback {
    /// Whether the letter is known to occur in the secret
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Perfect | Self::Misplaced)
    }
}

/// Result of comparing one guess against one secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    guess: Word,
    feedback: Vec<Feedback>,
    solved: bool,
}

impl Hint {
    /// Evaluate `guess` against `secret`
    ///
    /// Both words must have the same length; `Game` rejects mismatched
    /// guesses before they get here.
    ///
    /// # Panics
    /// Panics if `guess` and `secret` differ in length.
    ///
    /// # Algorithm
    /// 1. Count the letters of the secret
    /// 2. First pass: mark exact matches and take them out of the budget
    /// 3. Second pass: left to right, mark remaining letters misplaced while
    ///    the budget for that letter lasts
    ///
    /// Exact matches must consume the budget first, otherwise an earlier
    /// misplaced copy could take the occurrence a later exact match needs.
    ///
    /// # Examples
    /// ```
    /// use gordle::core::{Feedback, Hint, Word};
    ///
    /// let guess = Word::new("aabb").unwrap();
    /// let secret = Word::new("abca").unwrap();
    /// let hint = Hint::evaluate(&guess, &secret);
    ///
    /// assert_eq!(
    ///     hint.feedback(),
    ///     &[Feedback::Perfect, Feedback::Misplaced, Feedback::Misplaced, Feedback::Absent]
    /// );
    /// assert!(!hint.is_solved());
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let mut budget = secret.char_counts();
        let mut feedback = vec![Feedback::Absent; guess.len()];
        let mut solved = true;

        // First pass: exact matches
        for (i, (g, s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                feedback[i] = Feedback::Perfect;
                if let Some(count) = budget.get_mut(g) {
                    *count -= 1;
                }
            } else {
                solved = false;
            }
        }

        // Second pass: misplaced letters from what is left
        for (letter, slot) in guess.chars().iter().zip(feedback.iter_mut()) {
            if *slot == Feedback::Perfect {
                continue;
            }
            if let Some(count) = budget.get_mut(letter) {
                if *count > 0 {
                    *slot = Feedback::Misplaced;
                    *count -= 1;
                }
            }
        }

        Self {
            guess: guess.clone(),
            feedback,
            solved,
        }
    }

    /// The evaluated guess
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Per-position classification
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// True iff every position is `Perfect`
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Pairs of (letter, classification) in guess order
    pub fn letters(&self) -> impl Iterator<Item = (char, Feedback)> + '_ {
        self.guess
            .chars()
            .iter()
            .copied()
            .zip(self.feedback.iter().copied())
    }

    /// Compact form such as `G-Y--`: `G` perfect, `Y` misplaced, `-` absent
    #[must_use]
    pub fn to_code(&self) -> String {
        self.feedback
            .iter()
            .map(|f| match f {
                Feedback::Perfect => 'G',
                Feedback::Misplaced => 'Y',
                Feedback::Absent => '-',
            })
            .collect()
    }
}
