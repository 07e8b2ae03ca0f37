//! Example demonstrating basic word-search puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a `GeneratorConfig`
//! - Generate a puzzle on a full or shaped mask
//! - Display the puzzle, the placements, and the seed
//! - Sample many seeds and keep the puzzle whose words overlap the most
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- rust crab cargo borrow
//! ```
//!
//! Use a built-in shape and a larger grid:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --shape donut --size 15 rust crab cargo
//! ```
//!
//! Sample seeds in parallel and keep the one with the most shared letters:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --max-tries 1000 rust crab cargo trait
//! ```

use std::{error::Error, process};

use clap::Parser;
use rayon::prelude::*;
use wordsearch_core::{Word, WordList};
use wordsearch_generator::{GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed};
use wordsearch_mask::{Mask, Shape as _, shape_by_name};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Words to hide.
    #[arg(required = true, value_name = "WORD")]
    words: Vec<String>,

    /// Grid side length.
    #[arg(long, value_name = "SIZE", default_value_t = 12)]
    size: usize,

    /// Built-in shape name (case-insensitive).
    #[arg(long, value_name = "SHAPE")]
    shape: Option<String>,

    /// Seeds to sample; the puzzle with the most shared cells wins.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    max_tries: u64,
}

fn main() {
    let args = Args::parse();

    let words = match args
        .words
        .iter()
        .map(|text| Word::new(text))
        .collect::<Result<WordList, _>>()
    {
        Ok(words) => words,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let mask = match &args.shape {
        Some(name) => match shaped_mask(name, args.size) {
            Ok(mask) => mask,
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        },
        None => Mask::full(args.size),
    };

    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let generator = PuzzleGenerator::new(GeneratorConfig::default());
    let base = PuzzleSeed::random();
    let best = (0..args.max_tries)
        .into_par_iter()
        .filter_map(|i| {
            generator
                .generate_with_seed(&words, &mask, base.derive(i))
                .ok()
        })
        .map(|puzzle| {
            let score = shared_cells(&puzzle);
            (puzzle, score)
        })
        .max_by(|a, b| a.1.cmp(&b.1));

    if let Some((puzzle, score)) = best {
        print_puzzle(&puzzle, args.max_tries, score);
        return;
    }

    eprintln!("No attempt placed every word.");
    process::exit(1);
}

fn shaped_mask(name: &str, size: usize) -> Result<Mask, Box<dyn Error>> {
    Ok(shape_by_name(name)?.generate(size)?)
}

/// Counts the letters used by more than one word.
fn shared_cells(puzzle: &GeneratedPuzzle) -> usize {
    let total: usize = puzzle.placed_words().map(Word::len).sum();
    let distinct = puzzle
        .grid
        .iter()
        .filter(|(_, cell)| cell.is_placed())
        .count();
    total - distinct
}

fn print_puzzle(puzzle: &GeneratedPuzzle, max_tries: u64, score: usize) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if max_tries > 1 {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!("  Shared cells: {score}");
        println!();
    }

    println!("Puzzle:");
    for line in puzzle.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Answer key:");
    for word in puzzle.placed_words() {
        println!("  {}", word.key_string(puzzle.bounding_box));
    }
}
