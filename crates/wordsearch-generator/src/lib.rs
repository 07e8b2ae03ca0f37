//! Word-search puzzle generation.
//!
//! # Overview
//!
//! This crate turns a [`WordList`](wordsearch_core::WordList) and a
//! [`Mask`](wordsearch_mask::Mask) into a filled letter grid:
//!
//! 1. Words are sorted by priority, then length, so the hardest words are
//!    placed while the grid is still empty.
//! 2. Each word gets a bounded number of random (direction, start) draws and
//!    keeps the first one whose cells are active and empty or already hold the
//!    same letter.
//! 3. The remaining active cells receive letters from the [`Alphabet`], avoiding
//!    extra copies of placed words where possible.
//!
//! All randomness comes from a [`PuzzleSeed`], so a seed and the same inputs
//! always reproduce the same puzzle.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Word, WordList};
//! use wordsearch_generator::{Cell, GeneratorConfig, PuzzleGenerator};
//! use wordsearch_mask::Mask;
//!
//! let words: WordList = [Word::new("rust")?, Word::new("crab")?].into_iter().collect();
//! let generator = PuzzleGenerator::new(GeneratorConfig::default());
//! let puzzle = generator.generate(&words, &Mask::full(8))?;
//!
//! assert_eq!(puzzle.placed_words().count(), 2);
//! assert!(puzzle.grid.iter().all(|(_, cell)| !cell.is_empty()));
//! assert!(puzzle.grid.iter().all(|(_, cell)| *cell != Cell::Inactive));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod alphabet;
pub mod cell;
pub mod config;
pub mod error;
pub mod generated_puzzle;
pub mod generator;
pub mod seed;

// Re-export commonly used types
pub use self::{
    alphabet::Alphabet,
    cell::Cell,
    config::{ExhaustionPolicy, GeneratorConfig},
    error::{GenerateError, PlacementFailure},
    generated_puzzle::{GeneratedPuzzle, Outcome},
    generator::PuzzleGenerator,
    seed::{PuzzleSeed, SeedParseError},
};
