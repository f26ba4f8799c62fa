//! Word representation
//!
//! A Word is an uppercase sequence of code points of arbitrary (non-zero) length.
//! Secrets and guesses share this type; their lengths are checked against the
//! game configuration by the caller.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An uppercase word, stored both as text and as its code points
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must not contain whitespace or control characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalizing it to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains whitespace or
    /// control characters.
    ///
    /// # Examples
    /// ```
    /// use gordle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's code points
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of code points in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check whether every letter lies in `A..=Z`
    #[must_use]
    pub fn is_ascii_alphabetic(&self) -> bool {
        self.chars.iter().all(char::is_ascii_uppercase)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for hint calculation with duplicate letters.
    pub(crate) fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
