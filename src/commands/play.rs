//! Interactive game mode
//!
//! Prompts for guesses, rejects the ones the dictionary does not know, and
//! redraws the board after every round. Input and output are generic so the
//! loop runs the same against a terminal or in-memory buffers.

use crate::core::Word;
use crate::game::{Game, Status};
use crate::output::{BoardRenderer, Painter, print_summary};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

/// Settings for the interactive loop
pub struct PlaySession<'a> {
    pub dictionary: &'a Dictionary,
    pub painter: &'a dyn Painter,
    /// Reveal the secrets before the first round
    pub debug: bool,
}

/// What came back from one prompt
enum Input {
    Guess(Word),
    Eof,
}

impl PlaySession<'_> {
    /// Play `game` to the end
    ///
    /// End of input aborts the game. The board is drawn before every prompt
    /// and once more at the end, followed by the summary.
    ///
    /// # Errors
    /// Returns an error if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&self, game: &mut Game, mut input: R, output: &mut W) -> Result<Status> {
        let config = *game.config();
        let renderer = BoardRenderer::new(config, self.dictionary.alphabet());

        if self.debug {
            let secrets: Vec<&str> = game.secrets().iter().map(Word::text).collect();
            writeln!(output, "[DEBUG] the words are: [{}]\n", secrets.join(" "))?;
        }

        writeln!(
            output,
            "Looking for {} words, with {} letters each.\nYou have {} guesses, good luck!\n",
            config.words(),
            config.chars(),
            config.max_guesses()
        )?;

        while !game.is_over() {
            write!(output, "{}", renderer.render(game, self.painter))?;

            match self.read_guess(game, &mut input, output)? {
                Input::Guess(guess) => {
                    game.submit_guess(guess)?;
                }
                Input::Eof => {
                    writeln!(output)?;
                    game.abort();
                }
            }
        }

        write!(output, "{}", renderer.render(game, self.painter))?;
        print_summary(output, &game.summary())?;
        output.flush()?;

        debug!("game finished: {:?}", game.status());
        Ok(game.status())
    }

    /// Prompt until a valid guess or end of input
    fn read_guess<R: BufRead, W: Write>(&self, game: &Game, input: &mut R, output: &mut W) -> Result<Input> {
        let chars = game.config().chars();

        loop {
            write!(output, "\n> ")?;
            output.flush()?;

            let mut bytes = Vec::new();
            let read = input.read_until(b'\n', &mut bytes).context("failed to read guess")?;
            if read == 0 {
                return Ok(Input::Eof);
            }

            let Ok(line) = String::from_utf8(bytes) else {
                writeln!(output, "error: guess is not valid UTF-8")?;
                continue;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let guess = match Word::new(line) {
                Ok(word) if word.len() == chars => word,
                Ok(_) => {
                    writeln!(output, "error: guess needs to be exactly {chars} characters long")?;
                    continue;
                }
                Err(e) => {
                    writeln!(output, "error: {e}")?;
                    continue;
                }
            };

            if !self.dictionary.contains(&guess) {
                writeln!(output, "error: \"{guess}\" not in dictionary")?;
                continue;
            }

            return Ok(Input::Guess(guess));
        }
    }
}
