//! Gordle - CLI
//!
//! Terminal word-guessing game: find one or more secret words, with a
//! per-word letter key tracking what each guess revealed.

use anyhow::Result;
use clap::{ArgAction, Parser};
use gordle::{
    commands::PlaySession,
    game::{Game, GameConfig},
    logging::init_logging,
    output::{AnsiPainter, Painter, PlainPainter},
    wordlists::loader::{DEFAULT_DICT, DEFAULT_DICT_PATH, Filter, load_dictionary},
};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "gordle",
    about = "Guess one or more secret words, letter by letter",
    version,
    disable_version_flag = true
)]
struct Cli {
    /// Name of the dictionary file
    #[arg(short = 'l', long, default_value = DEFAULT_DICT)]
    list: String,

    /// Colon-separated list of directories in which to search for dictionary files
    #[arg(short = 'd', long, default_value = DEFAULT_DICT_PATH)]
    dicts: String,

    /// Number of words to guess
    #[arg(short = 'w', long, default_value = "1")]
    words: usize,

    /// Maximum number of guesses [default: 3 + words + chars/2]
    #[arg(short = 'g', long)]
    guesses: Option<usize>,

    /// The length (in code points) of words
    #[arg(short = 'c', long, default_value = "5")]
    chars: usize,

    /// Only accept dictionary words that consist exclusively of letters in a-z and A-Z
    #[arg(
        short = 'a',
        long,
        default_value = "true",
        value_name = "y|n",
        action = ArgAction::Set,
        value_parser = parse_yes_no
    )]
    force_ascii: bool,

    /// Show debug messages, including solutions
    #[arg(long)]
    debug: bool,

    /// Seed for choosing the secret words
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show program name and version and exit
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn parse_yes_no(value: &str) -> Result<bool, String> {
    match value {
        "y" | "yes" | "true" => Ok(true),
        "n" | "no" | "false" => Ok(false),
        _ => Err("unrecognized value, use one of: y, yes, true, n, no, false".to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = GameConfig::new(cli.chars, cli.words, cli.guesses)?;

    let filter = Filter {
        chars: cli.chars,
        force_ascii: cli.force_ascii,
    };
    let dictionary = load_dictionary(&cli.dicts, &cli.list, filter)?;

    let mut rng = match cli.seed {
        Some(seed) => {
            debug!("seeding secret selection with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::with_random_secrets(config, dictionary.words(), &mut rng)?;

    let painter: &dyn Painter = if cli.no_color { &PlainPainter } else { &AnsiPainter };
    let session = PlaySession {
        dictionary: &dictionary,
        painter,
        debug: cli.debug,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.run(&mut game, stdin.lock(), &mut stdout)?;

    Ok(())
}
