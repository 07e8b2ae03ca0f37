//! Command-line word-search generator.
//!
//! Prints a puzzle for the given words to stdout. Set `RUST_LOG=debug` (or
//! `trace`) to follow the placement engine.
//!
//! # Usage
//!
//! ```sh
//! wordsearch cat dog bird --level 3 --shape circle --secret mouse
//! wordsearch cat dog --seed "my puzzle" --attempts 8 --solution
//! wordsearch --list-shapes
//! ```

use std::{error::Error, process};

use clap::Parser;
use rayon::prelude::*;
use wordsearch_generator::{
    Alphabet, ExhaustionPolicy, GenerateError, GeneratorConfig, PuzzleSeed,
};
use wordsearch_mask::{Shape as _, builtin_shapes, shape_by_name};
use wordsearch_puzzle::{Formatter as _, PuzzleConfig, TextFormatter, WordSearch};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Words to hide, separated by spaces or commas.
    #[arg(value_name = "WORD", required_unless_present = "list_shapes")]
    words: Vec<String>,

    /// Words to hide without listing them in the hints. Repeatable.
    #[arg(long = "secret", value_name = "WORD", num_args = 1..)]
    secret: Vec<String>,

    /// Difficulty level for hidden words.
    #[arg(short, long, value_name = "N", default_value_t = 2, allow_negative_numbers = true)]
    level: i32,

    /// Difficulty level for secret words.
    #[arg(long, value_name = "N", default_value_t = 2, allow_negative_numbers = true)]
    secret_level: i32,

    /// Grid side length [default: derived from the words].
    #[arg(short, long, value_name = "N")]
    size: Option<usize>,

    /// Built-in shape restricting the playing area (see --list-shapes).
    #[arg(long, value_name = "NAME")]
    shape: Option<String>,

    /// Letters used for filler cells [default: A-Z].
    #[arg(long, value_name = "CHARS")]
    alphabet: Option<String>,

    /// Seed as 64 hex digits, or any phrase to hash into one.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Independent attempts raced in parallel; the first success wins.
    #[arg(
        long,
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    attempts: u64,

    /// Leave out words that do not fit instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Random placement attempts per word.
    #[arg(long, value_name = "N", default_value_t = GeneratorConfig::DEFAULT_MAX_FIT_TRIES)]
    max_fit_tries: usize,

    /// Lower-case the filler so the placed words stand out.
    #[arg(long)]
    solution: bool,

    /// Print the built-in shapes and exit.
    #[arg(long)]
    list_shapes: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.list_shapes {
        for shape in builtin_shapes() {
            println!("{:<10} min size {}", shape.name(), shape.min_size());
        }
        return;
    }

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut search = WordSearch::new(build_config(args)?);
    let rejected = search
        .add_words(&args.words.join(","), false)
        .into_iter()
        .chain(search.add_words(&args.secret.join(","), true));
    for word in rejected {
        eprintln!("skipped: {word}");
    }
    if let Some(name) = &args.shape {
        search.set_shape(Some(shape_by_name(name)?));
    }

    let seed = args
        .seed
        .as_deref()
        .map_or_else(PuzzleSeed::random, parse_seed);
    let search = if args.attempts == 1 {
        search.set_seed(Some(seed));
        search.generate()?;
        search
    } else {
        race(&search, seed, args.attempts)?
    };

    let Some(puzzle) = search.puzzle() else {
        return Ok(());
    };
    println!("{}", TextFormatter::new().format(puzzle, args.solution));
    println!();
    println!("Seed: {}", puzzle.seed);
    if !puzzle.unplaced.is_empty() {
        eprintln!("could not place: {}", puzzle.unplaced.join(", "));
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<PuzzleConfig, Box<dyn Error>> {
    let mut generator = GeneratorConfig::default().with_max_fit_tries(args.max_fit_tries);
    if args.lenient {
        generator = generator.with_policy(ExhaustionPolicy::Lenient);
    }
    if let Some(letters) = &args.alphabet {
        generator = generator.with_alphabet(Alphabet::new(letters)?);
    }
    Ok(PuzzleConfig::default()
        .with_level(args.level)?
        .with_secret_level(args.secret_level)?
        .with_size(args.size)
        .with_generator(generator))
}

/// Reads 64 hex digits as a seed, and hashes anything else.
fn parse_seed(text: &str) -> PuzzleSeed {
    text.parse()
        .unwrap_or_else(|_| PuzzleSeed::from_phrase(text))
}

/// Runs `attempts` generations with derived seeds on the rayon pool.
///
/// The lowest-index success wins, so the result only depends on `seed`. When
/// every attempt fails, the error of the first one is returned.
fn race(search: &WordSearch, seed: PuzzleSeed, attempts: u64) -> Result<WordSearch, GenerateError> {
    let attempt = |index: u64| -> Result<WordSearch, GenerateError> {
        let mut search = search.clone();
        search.set_seed(Some(seed.derive(index)));
        search.generate()?;
        Ok(search)
    };
    (0..attempts)
        .into_par_iter()
        .map(attempt)
        .find_map_first(Result::ok)
        .map_or_else(|| attempt(0), Ok)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "wordsearch", "cat", "dog", "--secret", "mouse", "--level", "-1", "--attempts", "4",
        ])
        .unwrap();
        assert_eq!(args.words, ["cat", "dog"]);
        assert_eq!(args.secret, ["mouse"]);
        assert_eq!(args.level, -1);
        assert_eq!(args.attempts, 4);

        assert!(Args::try_parse_from(["wordsearch"]).is_err());
        assert!(Args::try_parse_from(["wordsearch", "--list-shapes"]).is_ok());
        assert!(Args::try_parse_from(["wordsearch", "cat", "--attempts", "0"]).is_err());
    }

    #[test]
    fn test_parse_seed() {
        let hex = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
        assert_eq!(parse_seed(hex).to_string(), hex);
        assert_eq!(parse_seed("my puzzle"), PuzzleSeed::from_phrase("my puzzle"));
    }

    #[test]
    fn test_build_config() {
        let args = Args::try_parse_from(["wordsearch", "cat", "--level", "6"]).unwrap();
        assert!(build_config(&args).is_err());

        let args = Args::try_parse_from(["wordsearch", "cat", "--alphabet", "123"]).unwrap();
        assert!(build_config(&args).is_err());

        let args =
            Args::try_parse_from(["wordsearch", "cat", "--lenient", "--alphabet", "xy"]).unwrap();
        let config = build_config(&args).unwrap();
        assert!(config.generator.policy.is_lenient());
        assert_eq!(config.generator.alphabet.letters(), &['X', 'Y']);
    }

    #[test]
    fn test_race_is_deterministic() {
        let mut search = WordSearch::new(PuzzleConfig::default());
        search.add_words("cat dog bird", false);
        let seed = PuzzleSeed::from_phrase("race");
        let a = race(&search, seed, 4).unwrap();
        let b = race(&search, seed, 4).unwrap();
        assert_eq!(a.puzzle(), b.puzzle());
        assert_eq!(a.puzzle().unwrap().seed, seed.derive(0));
    }
}
