//! Terminal output formatting
//!
//! Board layout and letter styling.

pub mod display;
pub mod formatters;

pub use display::{BoardRenderer, Cell, print_summary};
pub use formatters::{AnsiPainter, LetterStyle, Painter, PlainPainter};
