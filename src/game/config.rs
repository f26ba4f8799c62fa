//! Game configuration
//!
//! Validated board dimensions. Anything out of range is rejected here, before a
//! game is started, so the engine never has to check mid-game.

use crate::core::Positions;
use thiserror::Error;

/// Errors for invalid game setups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be at least 1")]
    ZeroLength,
    #[error("word length {chars} exceeds the maximum of {max}")]
    TooLong { chars: usize, max: usize },
    #[error("number of words must be at least 1")]
    NoWords,
    #[error("number of guesses must be at least 1")]
    NoGuesses,
    #[error("no dictionary words with {chars} letters")]
    EmptyDictionary { chars: usize },
    #[error("expected {expected} secrets, got {got}")]
    SecretCount { expected: usize, got: usize },
    #[error("secret \"{secret}\" does not have {chars} letters")]
    SecretLength { secret: String, chars: usize },
}

/// Board dimensions for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    chars: usize,
    words: usize,
    max_guesses: usize,
}

impl GameConfig {
    /// Create a configuration
    ///
    /// Without an explicit guess count, players get `3 + words + chars / 2`
    /// guesses.
    ///
    /// # Errors
    /// Returns `ConfigError` if any dimension is zero or the word length
    /// exceeds [`Positions::CAPACITY`].
    ///
    /// # Examples
    /// ```
    /// use gordle::game::GameConfig;
    ///
    /// let config = GameConfig::new(5, 1, None).unwrap();
    /// assert_eq!(config.max_guesses(), 6);
    ///
    /// assert!(GameConfig::new(0, 1, None).is_err());
    /// ```
    pub fn new(chars: usize, words: usize, max_guesses: Option<usize>) -> Result<Self, ConfigError> {
        if chars == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if chars > Positions::CAPACITY {
            return Err(ConfigError::TooLong {
                chars,
                max: Positions::CAPACITY,
            });
        }
        if words == 0 {
            return Err(ConfigError::NoWords);
        }

        let max_guesses = max_guesses.unwrap_or_else(|| Self::default_guesses(chars, words));
        if max_guesses == 0 {
            return Err(ConfigError::NoGuesses);
        }

        Ok(Self {
            chars,
            words,
            max_guesses,
        })
    }

    /// Guess count used when none is given
    #[must_use]
    pub const fn default_guesses(chars: usize, words: usize) -> usize {
        3 + words + chars / 2
    }

    /// Letters per word
    #[must_use]
    pub const fn chars(&self) -> usize {
        self.chars
    }

    /// Number of secrets guessed in parallel
    #[must_use]
    pub const fn words(&self) -> usize {
        self.words
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Horizontal padding around each board column
    #[must_use]
    pub const fn padding(&self) -> usize {
        let padding = 6_usize.saturating_sub(self.chars / 2);
        if padding < 1 { 1 } else { padding }
    }
}
