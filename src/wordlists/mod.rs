//! Word lists for the game
//!
//! A `Dictionary` is the sorted list of playable words plus the alphabet they
//! are written in. Secrets are drawn from it and guesses are checked against it.

pub mod loader;

use crate::core::Word;
use std::collections::BTreeSet;

/// Sorted word list with its alphabet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
    alphabet: Vec<char>,
}

impl Dictionary {
    /// Build a dictionary from words in any order
    ///
    /// Duplicates are kept.
    #[must_use]
    pub fn new(mut words: Vec<Word>) -> Self {
        words.sort();

        let alphabet = words
            .iter()
            .flat_map(|w| w.chars().iter().copied())
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect();

        Self { words, alphabet }
    }

    /// All words, sorted
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Every letter used by any word, sorted
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
