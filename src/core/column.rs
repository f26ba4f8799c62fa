//! Per-secret letter knowledge
//!
//! A `ColumnState` folds the hint of every round into what is known about one
//! secret: where letters are confirmed, how many copies of a letter are known
//! to exist, and which letters are eliminated.

use super::{Feedback, Hint, Positions};
use rustc_hash::{FxHashMap, FxHashSet};

/// Accumulated knowledge about a single secret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnState {
    perfect: FxHashMap<char, Positions>,
    // includes perfect letters in its count
    contained: FxHashMap<char, usize>,
    absent: FxHashSet<char>,
    solved: bool,
}

impl ColumnState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round's hint into the column
    ///
    /// Does nothing once the column is solved: a solved column stays frozen
    /// for the rest of the game.
    ///
    /// Within a round every present copy of a letter is counted once; the
    /// running count only moves up to the round's count, so a later guess with
    /// fewer copies of a letter never lowers what is already known.
    pub fn update(&mut self, hint: &Hint) {
        if self.solved {
            return;
        }

        let mut round_contained: FxHashMap<char, usize> = FxHashMap::default();

        for (i, (letter, feedback)) in hint.letters().enumerate() {
            match feedback {
                Feedback::Perfect => {
                    self.perfect.entry(letter).or_default().insert(i);
                    *round_contained.entry(letter).or_insert(0) += 1;
                    self.absent.remove(&letter);
                }
                Feedback::Misplaced => {
                    *round_contained.entry(letter).or_insert(0) += 1;
                    self.absent.remove(&letter);
                }
                Feedback::Absent => {
                    if !self.is_known_present(letter) && !round_contained.contains_key(&letter) {
                        self.absent.insert(letter);
                    }
                }
            }
        }

        for (letter, count) in round_contained {
            let known = self.contained.entry(letter).or_insert(0);
            *known = (*known).max(count);
        }

        if hint.is_solved() {
            self.solved = true;
        }
    }

    /// True once a round produced an all-`Perfect` hint
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Positions at which `letter` has been confirmed
    #[must_use]
    pub fn perfect_positions(&self, letter: char) -> Positions {
        self.perfect.get(&letter).copied().unwrap_or_default()
    }

    /// Highest number of copies of `letter` known to be in the secret
    #[must_use]
    pub fn contained_count(&self, letter: char) -> usize {
        self.contained.get(&letter).copied().unwrap_or(0)
    }

    /// Whether `letter` has been eliminated
    #[must_use]
    pub fn is_absent(&self, letter: char) -> bool {
        self.absent.contains(&letter)
    }

    /// Letters eliminated so far, sorted
    #[must_use]
    pub fn absent_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.absent.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    fn is_known_present(&self, letter: char) -> bool {
        self.perfect.get(&letter).is_some_and(|p| !p.is_empty())
            || self.contained.get(&letter).is_some_and(|&c| c > 0)
    }
}
