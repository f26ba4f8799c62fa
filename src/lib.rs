//! Gordle
//!
//! A terminal word-guessing game: guess one or more secret words at once, with
//! per-letter feedback after every guess and a running letter key per word.
//!
//! # Quick Start
//!
//! ```rust
//! use gordle::core::{Feedback, Word};
//! use gordle::game::{Game, GameConfig, Status};
//!
//! let config = GameConfig::new(5, 1, None).unwrap();
//! let mut game = Game::new(config, vec![Word::new("crane").unwrap()]).unwrap();
//!
//! let round = game.submit_guess(Word::new("slate").unwrap()).unwrap();
//! assert_eq!(round.hint(0).unwrap().feedback()[2], Feedback::Perfect);
//!
//! game.submit_guess(Word::new("crane").unwrap()).unwrap();
//! assert_eq!(game.status(), Status::Solved);
//! ```

// Core domain types
pub mod core;

// Game configuration and state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logging setup
pub mod logging;
