//! Core domain types for the game
//!
//! Guess evaluation and per-secret knowledge tracking. Everything here is pure:
//! no I/O, no randomness, no terminal formatting.

mod bitfield;
mod column;
mod hint;
mod word;

pub use bitfield::Positions;
pub use column::ColumnState;
pub use hint::{Feedback, Hint};
pub use word::{Word, WordError};
