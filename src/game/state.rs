//! Game state
//!
//! Owns the secrets, one `ColumnState` per secret, and the round history.
//! Guesses reaching `Game::submit_guess` are assumed to be dictionary words;
//! only their length is checked.

use super::config::{ConfigError, GameConfig};
use crate::core::{ColumnState, Hint, Word};
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    /// Every secret was found
    Solved,
    /// All guesses were used up
    Exhausted,
    /// The player quit (end of input)
    Aborted,
}

/// Errors for guesses the game cannot accept
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("guess needs to be exactly {expected} characters long, got {got}")]
    GuessLength { expected: usize, got: usize },
    #[error("the game is already over")]
    GameOver,
}

/// One played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    guess: Word,
    hints: Vec<Option<Hint>>,
}

impl Round {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Hint for column `column`, `None` if the column was already solved
    #[must_use]
    pub fn hint(&self, column: usize) -> Option<&Hint> {
        self.hints.get(column).and_then(Option::as_ref)
    }

    /// Hints for all columns, in column order
    #[must_use]
    pub fn hints(&self) -> &[Option<Hint>] {
        &self.hints
    }
}

/// End-of-game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// All secrets found, with the number of guesses used
    Solved { secrets: Vec<Word>, guesses: usize },
    /// Not all secrets found (out of guesses or aborted)
    Failed { secrets: Vec<Word> },
}

/// A running game
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    secrets: Vec<Word>,
    columns: Vec<ColumnState>,
    history: Vec<Round>,
    status: Status,
}

impl Game {
    /// Start a game with the given secrets, one per column
    ///
    /// # Errors
    /// Returns `ConfigError` if the number of secrets does not match
    /// `config.words()` or a secret has the wrong length.
    pub fn new(config: GameConfig, secrets: Vec<Word>) -> Result<Self, ConfigError> {
        if secrets.len() != config.words() {
            return Err(ConfigError::SecretCount {
                expected: config.words(),
                got: secrets.len(),
            });
        }
        if let Some(secret) = secrets.iter().find(|s| s.len() != config.chars()) {
            return Err(ConfigError::SecretLength {
                secret: secret.text().to_string(),
                chars: config.chars(),
            });
        }

        debug!("starting game with {} secrets", secrets.len());

        Ok(Self {
            config,
            columns: vec![ColumnState::new(); secrets.len()],
            history: Vec::new(),
            secrets,
            status: Status::Playing,
        })
    }

    /// Start a game with secrets drawn at random from `words`
    ///
    /// The same secret may be drawn for several columns.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyDictionary` if `words` is empty, or any error
    /// of [`Game::new`].
    pub fn with_random_secrets<R: Rng>(
        config: GameConfig,
        words: &[Word],
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyDictionary {
                chars: config.chars(),
            });
        }

        let secrets = (0..config.words())
            .map(|_| words[rng.random_range(0..words.len())].clone())
            .collect();

        Self::new(config, secrets)
    }

    /// Play one round
    ///
    /// Evaluates the guess against every column that is not yet solved, folds
    /// the hints into the column states and advances the status.
    ///
    /// # Errors
    /// Returns `GameError` if the game is over or the guess has the wrong
    /// length. The state is left untouched in that case.
    ///
    /// # Panics
    /// Will not panic - the returned round is the one pushed just before.
    pub fn submit_guess(&mut self, guess: Word) -> Result<&Round, GameError> {
        if self.status != Status::Playing {
            return Err(GameError::GameOver);
        }
        if guess.len() != self.config.chars() {
            return Err(GameError::GuessLength {
                expected: self.config.chars(),
                got: guess.len(),
            });
        }

        debug!("round {}: {guess}", self.history.len() + 1);

        let mut hints = Vec::with_capacity(self.columns.len());
        for (index, (column, secret)) in self.columns.iter_mut().zip(&self.secrets).enumerate() {
            if column.is_solved() {
                hints.push(None);
                continue;
            }

            let hint = Hint::evaluate(&guess, secret);
            column.update(&hint);
            if column.is_solved() {
                debug!("column {} solved", index + 1);
            }
            hints.push(Some(hint));
        }

        self.history.push(Round { guess, hints });

        if self.columns.iter().all(ColumnState::is_solved) {
            self.status = Status::Solved;
            info!("solved after {} guesses", self.history.len());
        } else if self.history.len() >= self.config.max_guesses() {
            self.status = Status::Exhausted;
            info!("out of guesses");
        }

        Ok(self.history.last().expect("round was just pushed"))
    }

    /// Stop the game early
    pub fn abort(&mut self) {
        if self.status == Status::Playing {
            info!("game aborted after {} guesses", self.history.len());
            self.status = Status::Aborted;
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::Playing
    }

    /// Number of rounds played
    #[must_use]
    pub fn round(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Result of the game so far
    #[must_use]
    pub fn summary(&self) -> Summary {
        if self.status == Status::Solved {
            Summary::Solved {
                secrets: self.secrets.clone(),
                guesses: self.history.len(),
            }
        } else {
            Summary::Failed {
                secrets: self.secrets.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn game(chars: usize, guesses: usize, secrets: &[&str]) -> Game {
        let config = GameConfig::new(chars, secrets.len(), Some(guesses)).unwrap();
        Game::new(config, secrets.iter().map(|s| word(s)).collect()).unwrap()
    }

    #[test]
    fn solve_single_word() {
        let mut game = game(5, 6, &["crane"]);

        let round = game.submit_guess(word("slate")).unwrap();
        assert_eq!(round.hint(0).unwrap().to_code(), "--G-G");
        assert_eq!(game.status(), Status::Playing);

        let round = game.submit_guess(word("crane")).unwrap();
        assert!(round.hint(0).unwrap().is_solved());
        assert_eq!(game.status(), Status::Solved);
        assert_eq!(game.round(), 2);
        assert_eq!(
            game.summary(),
            Summary::Solved {
                secrets: vec![word("crane")],
                guesses: 2
            }
        );
    }

    #[test]
    fn exhausts_guesses() {
        let mut game = game(5, 2, &["crane"]);
        game.submit_guess(word("slate")).unwrap();
        game.submit_guess(word("audio")).unwrap();

        assert_eq!(game.status(), Status::Exhausted);
        assert_eq!(game.submit_guess(word("crane")), Err(GameError::GameOver));
        assert_eq!(
            game.summary(),
            Summary::Failed {
                secrets: vec![word("crane")]
            }
        );
    }

    #[test]
    fn solved_column_is_skipped_afterwards() {
        let mut game = game(5, 6, &["crane", "slate"]);

        let round = game.submit_guess(word("crane")).unwrap();
        assert!(round.hint(0).unwrap().is_solved());
        assert!(round.hint(1).is_some());

        let round = game.submit_guess(word("audio")).unwrap();
        assert!(round.hint(0).is_none());
        assert!(round.hint(1).is_some());
        assert!(game.columns()[0].is_solved());
        assert_eq!(game.status(), Status::Playing);

        game.submit_guess(word("slate")).unwrap();
        assert_eq!(game.status(), Status::Solved);
    }

    #[test]
    fn huge_guess_limit_does_not_preallocate() {
        let mut game = game(5, usize::MAX / 2, &["crane"]);
        game.submit_guess(word("slate")).unwrap();
        assert_eq!(game.round(), 1);
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn solving_on_last_guess_counts_as_solved() {
        let mut game = game(5, 1, &["crane"]);
        game.submit_guess(word("crane")).unwrap();
        assert_eq!(game.status(), Status::Solved);
    }

    #[test]
    fn rejects_wrong_length_without_side_effects() {
        let mut game = game(5, 6, &["crane"]);
        assert_eq!(
            game.submit_guess(word("cranes")),
            Err(GameError::GuessLength {
                expected: 5,
                got: 6
            })
        );
        assert_eq!(game.round(), 0);
    }

    #[test]
    fn abort_ends_game() {
        let mut game = game(5, 6, &["crane"]);
        game.abort();
        assert_eq!(game.status(), Status::Aborted);
        assert!(game.is_over());
        assert!(matches!(game.summary(), Summary::Failed { .. }));

        // abort after the end keeps the final status
        let mut solved = self::game(5, 6, &["crane"]);
        solved.submit_guess(word("crane")).unwrap();
        solved.abort();
        assert_eq!(solved.status(), Status::Solved);
    }

    #[test]
    fn rejects_mismatched_secrets() {
        let config = GameConfig::new(5, 2, None).unwrap();
        assert_eq!(
            Game::new(config, vec![word("crane")]).unwrap_err(),
            ConfigError::SecretCount {
                expected: 2,
                got: 1
            }
        );
        assert!(matches!(
            Game::new(config, vec![word("crane"), word("cranes")]),
            Err(ConfigError::SecretLength { .. })
        ));
    }

    #[test]
    fn random_secrets_are_seeded() {
        let config = GameConfig::new(5, 3, None).unwrap();
        let words: Vec<Word> = ["crane", "slate", "audio", "pious"]
            .iter()
            .map(|w| word(w))
            .collect();

        let a = Game::with_random_secrets(config, &words, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = Game::with_random_secrets(config, &words, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(a.secrets(), b.secrets());
        assert_eq!(a.secrets().len(), 3);
        assert!(a.secrets().iter().all(|s| words.contains(s)));
    }

    #[test]
    fn random_secrets_need_words() {
        let config = GameConfig::new(5, 1, None).unwrap();
        let result = Game::with_random_secrets(config, &[], &mut StdRng::seed_from_u64(1));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::EmptyDictionary { chars: 5 }
        );
    }

    #[test]
    fn history_keeps_each_round() {
        let mut game = game(4, 6, &["abca"]);
        game.submit_guess(word("aabb")).unwrap();
        game.submit_guess(word("abcd")).unwrap();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].guess().text(), "AABB");
        assert_eq!(
            history[0].hint(0).unwrap().feedback(),
            &[
                Feedback::Perfect,
                Feedback::Misplaced,
                Feedback::Misplaced,
                Feedback::Absent
            ]
        );
        assert_eq!(history[1].hint(0).unwrap().to_code(), "GGG-");
    }
}
