//! Board rendering
//!
//! The board has two blocks:
//! - the grid: one row per allowed guess, one cell per secret, each cell the
//!   hint of that round or a row of dots
//! - the key: for every unsolved secret, each letter of the alphabet styled by
//!   what is known about it, wrapped to the width of a grid cell
//!
//! Both are built as styled cells first and painted last, so layout does not
//! depend on escape sequences.

use super::formatters::{LetterStyle, Painter};
use crate::core::{ColumnState, Hint, Word};
use crate::game::{Game, GameConfig, Summary};
use std::io::{self, Write};

/// A letter with its style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: char,
    pub style: LetterStyle,
}

impl Cell {
    #[must_use]
    pub const fn new(letter: char, style: LetterStyle) -> Self {
        Self { letter, style }
    }
}

/// Lays out the board for one game configuration and alphabet
#[derive(Debug, Clone)]
pub struct BoardRenderer<'a> {
    config: GameConfig,
    alphabet: &'a [char],
}

impl<'a> BoardRenderer<'a> {
    #[must_use]
    pub const fn new(config: GameConfig, alphabet: &'a [char]) -> Self {
        Self { config, alphabet }
    }

    /// Width of one board column, padding included
    #[must_use]
    pub const fn cell_width(&self) -> usize {
        self.config.chars() + 2 * self.config.padding()
    }

    /// Styled cells of a hint row
    #[must_use]
    pub fn hint_cells(hint: &Hint) -> Vec<Cell> {
        hint.letters()
            .map(|(letter, feedback)| Cell::new(letter, LetterStyle::for_hint(feedback)))
            .collect()
    }

    /// Styled key letters of one column, before wrapping
    ///
    /// Each letter appears once per confirmed position, then once per further
    /// known copy; otherwise once as eliminated or once as unknown.
    #[must_use]
    pub fn key_cells(&self, column: &ColumnState) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.alphabet.len());

        for &letter in self.alphabet {
            let perfect = column.perfect_positions(letter).len();
            let contained = column.contained_count(letter);
            let start = cells.len();

            cells.extend((0..perfect).map(|_| Cell::new(letter, LetterStyle::Perfect)));
            cells.extend(
                (0..contained.saturating_sub(perfect)).map(|_| Cell::new(letter, LetterStyle::Misplaced)),
            );
            if column.is_absent(letter) {
                cells.push(Cell::new(letter, LetterStyle::Absent));
            }
            if cells.len() == start {
                cells.push(Cell::new(letter, LetterStyle::Plain));
            }
        }

        cells
    }

    /// Split key cells into rows of at most `cell_width` letters
    #[must_use]
    pub fn wrap(&self, cells: &[Cell]) -> Vec<Vec<Cell>> {
        cells.chunks(self.cell_width()).map(<[Cell]>::to_vec).collect()
    }

    /// Render the guess grid
    #[must_use]
    pub fn render_grid(&self, game: &Game, painter: &dyn Painter) -> String {
        let padding = " ".repeat(self.config.padding());
        let empty_word = ".".repeat(self.config.chars());
        let horizontal_line = "-".repeat(self.config.words() * (self.cell_width() + 1) + 1);

        let mut output = String::new();
        output.push_str(&horizontal_line);
        output.push('\n');

        for r in 0..self.config.max_guesses() {
            output.push('|');
            for c in 0..self.config.words() {
                output.push_str(&padding);
                match game.history().get(r).and_then(|round| round.hint(c)) {
                    Some(hint) => output.push_str(&paint_cells(&Self::hint_cells(hint), painter)),
                    None => output.push_str(&empty_word),
                }
                output.push_str(&padding);
                output.push('|');
            }
            output.push('\n');
        }

        output.push_str(&horizontal_line);
        output.push_str("\n\n");
        output
    }

    /// Render the per-column letter keys
    ///
    /// Solved columns are left blank; the block is as tall as the tallest
    /// unsolved key.
    #[must_use]
    pub fn render_key(&self, game: &Game, painter: &dyn Painter) -> String {
        let width = self.cell_width();
        let blank = " ".repeat(width);

        let keys: Vec<Option<Vec<Vec<Cell>>>> = game
            .columns()
            .iter()
            .map(|column| (!column.is_solved()).then(|| self.wrap(&self.key_cells(column))))
            .collect();
        let rows = keys.iter().flatten().map(Vec::len).max().unwrap_or(0);

        let mut output = String::new();
        for r in 0..rows {
            output.push(' ');
            for key in &keys {
                match key.as_ref().and_then(|lines| lines.get(r)) {
                    Some(line) => {
                        output.push_str(&paint_cells(line, painter));
                        output.push_str(&" ".repeat(width - line.len()));
                    }
                    None => output.push_str(&blank),
                }
                output.push(' ');
            }
            output.push('\n');
        }
        output
    }

    /// Render the whole board: grid, blank line, key
    #[must_use]
    pub fn render(&self, game: &Game, painter: &dyn Painter) -> String {
        let mut board = self.render_grid(game, painter);
        board.push_str(&self.render_key(game, painter));
        board
    }
}

fn paint_cells(cells: &[Cell], painter: &dyn Painter) -> String {
    cells
        .iter()
        .map(|cell| painter.paint(cell.letter, cell.style))
        .collect()
}

/// Print the end-of-game message
///
/// # Errors
/// Returns the underlying I/O error if writing fails.
pub fn print_summary<W: Write>(output: &mut W, summary: &Summary) -> io::Result<()> {
    match summary {
        Summary::Solved { .. } => writeln!(output, "\nWell done!"),
        Summary::Failed { secrets } => {
            let list: Vec<&str> = secrets.iter().map(Word::text).collect();
            writeln!(output, "\nThe solutions were: [{}]", list.join(" "))
        }
    }
}
