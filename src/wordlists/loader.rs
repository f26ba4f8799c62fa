//! Dictionary loading
//!
//! Finds a word list on a colon-separated search path and filters it down to
//! the words usable for a game of a given length.

use super::Dictionary;
use crate::core::Word;
use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default directories searched for word lists
pub const DEFAULT_DICT_PATH: &str = "/usr/share/dict:/usr/dict";

/// Default word list name
pub const DEFAULT_DICT: &str = "words";

/// Errors while locating or reading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not find language \"{0}\"")]
    NotFound(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Which dictionary lines make it into the word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    /// Required length in code points
    pub chars: usize,
    /// Keep only words made of `A..=Z`
    pub force_ascii: bool,
}

/// Open the first `<dir>/<name>` that exists on `search_path`
///
/// # Errors
/// Returns `DictionaryError::NotFound` if no directory holds a readable file
/// called `name`.
pub fn find_dictionary(search_path: &str, name: &str) -> Result<(PathBuf, File), DictionaryError> {
    for dir in search_path.split(':') {
        let path = Path::new(dir).join(name);
        match File::open(&path) {
            Ok(file) => {
                debug!("using dictionary {}", path.display());
                return Ok((path, file));
            }
            Err(e) => trace!("skipping {}: {e}", path.display()),
        }
    }

    Err(DictionaryError::NotFound(name.to_string()))
}

/// Locate and parse a dictionary
///
/// # Errors
/// Returns `DictionaryError` if the dictionary cannot be found or read.
///
/// # Examples
/// ```no_run
/// use gordle::wordlists::loader::{Filter, load_dictionary, DEFAULT_DICT, DEFAULT_DICT_PATH};
///
/// let filter = Filter { chars: 5, force_ascii: true };
/// let dict = load_dictionary(DEFAULT_DICT_PATH, DEFAULT_DICT, filter).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_dictionary(search_path: &str, name: &str, filter: Filter) -> Result<Dictionary, DictionaryError> {
    let (path, file) = find_dictionary(search_path, name)?;
    parse_dictionary(BufReader::new(file), filter).map_err(|source| DictionaryError::Read { path, source })
}

/// Parse a word list, one word per line
///
/// Lines are uppercased; lines of the wrong length (and, with
/// `force_ascii`, lines with anything but `A..=Z`) are skipped.
///
/// # Errors
/// Returns the underlying I/O error if reading fails.
pub fn parse_dictionary<R: BufRead>(reader: R, filter: Filter) -> io::Result<Dictionary> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.chars().count() != filter.chars {
            continue;
        }

        let Ok(word) = Word::new(&line) else {
            continue;
        };
        // uppercasing can change the length (e.g. 'ß' -> "SS")
        if word.len() != filter.chars {
            continue;
        }
        if filter.force_ascii && !word.is_ascii_alphabetic() {
            continue;
        }

        words.push(word);
    }

    let dict = Dictionary::new(words);
    debug!(
        "dictionary has {} words over {} letters",
        dict.len(),
        dict.alphabet().len()
    );
    Ok(dict)
}
