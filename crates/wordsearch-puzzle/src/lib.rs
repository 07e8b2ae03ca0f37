//! Word-search puzzles from word lists to printable text.
//!
//! # Overview
//!
//! 1. **Settings** - [`config`]: Size bounds, difficulty levels, priorities,
//!    validators and engine settings in one explicit value
//! 2. **Input** - [`validator`]: Checks that keep ambiguous words out of the grid
//! 3. **Façade** - [`word_search`]: Word management, automatic sizing, masks
//!    and generation
//! 4. **Output** - [`formatter`]: Plain-text rendering with hints and answer key
//!
//! # Examples
//!
//! ```
//! use wordsearch_generator::PuzzleSeed;
//! use wordsearch_mask::shape_by_name;
//! use wordsearch_puzzle::{PuzzleConfig, WordSearch};
//!
//! let mut search = WordSearch::new(PuzzleConfig::default().with_level(4)?);
//! search.add_words("ferris crab claw shell", false);
//! search.add_words("rust", true);
//! search.set_shape(Some(shape_by_name("circle")?));
//! search.set_seed(Some(PuzzleSeed::from_phrase("ferris")));
//!
//! search.generate()?;
//! let text = search.to_string();
//! assert!(text.contains("Find these words: CLAW, CRAB, FERRIS, SHELL"));
//! assert!(!text.contains("Find these words: RUST"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod formatter;
pub mod validator;
pub mod word_search;

// Re-export commonly used types
pub use self::{
    config::PuzzleConfig,
    formatter::{Formatter, TextFormatter},
    validator::{
        BoxedValidator, NoPalindromes, NoPunctuation, NoSingleLetterWords, NoSubwords, Validator,
        default_validators,
    },
    word_search::{RejectedWord, WordSearch, auto_size, parse_words},
};
