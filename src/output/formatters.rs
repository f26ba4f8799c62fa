//! Letter styling for terminal output
//!
//! Rendering decides a `LetterStyle` per letter; a `Painter` turns the styled
//! letter into text. Only `AnsiPainter` knows about escape sequences.

use crate::core::Feedback;
use colored::Colorize;

/// How a letter is shown on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStyle {
    /// Nothing known, or an absent letter inside a hint row
    Plain,
    Perfect,
    Misplaced,
    /// Eliminated letter in the key
    Absent,
}

impl LetterStyle {
    /// Style of a letter in a hint row
    ///
    /// Absent letters stay plain in the grid; the key is where eliminated
    /// letters are highlighted.
    #[must_use]
    pub const fn for_hint(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Perfect => Self::Perfect,
            Feedback::Misplaced => Self::Misplaced,
            Feedback::Absent => Self::Plain,
        }
    }
}

/// Turns a styled letter into printable text
pub trait Painter {
    fn paint(&self, letter: char, style: LetterStyle) -> String;
}

/// Black letters on green, yellow, or red backgrounds
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn paint(&self, letter: char, style: LetterStyle) -> String {
        let text = letter.to_string();
        match style {
            LetterStyle::Plain => text,
            LetterStyle::Perfect => text.black().on_green().to_string(),
            LetterStyle::Misplaced => text.black().on_yellow().to_string(),
            LetterStyle::Absent => text.black().on_red().to_string(),
        }
    }
}

/// Letters without any styling
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, letter: char, _style: LetterStyle) -> String {
        letter.to_string()
    }
}
