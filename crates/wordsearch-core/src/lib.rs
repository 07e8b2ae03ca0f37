//! Core data structures for word-search puzzles.
//!
//! This crate provides the vocabulary shared by mask construction, puzzle
//! generation and presentation.
//!
//! # Overview
//!
//! 1. **Geometry** - Where things are in a square grid
//!    - [`direction`]: The eight reading directions and their unit deltas
//!    - [`position`]: Cell coordinates and bounding boxes
//!    - [`grid`]: A generic row-major square container
//!
//! 2. **Direction sets** - Which directions a word may use
//!    - [`direction_set`]: Bitset of directions with named presets and merge operators
//!    - [`level`]: Difficulty levels mapped to direction sets
//!
//! 3. **Words** - What gets hidden
//!    - [`word`]: Normalized words with priority, secrecy and placement
//!    - [`word_list`]: Insertion-ordered word registry that merges duplicates
//!
//! 4. **Errors** - [`error`]: Validation and configuration failures
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Direction, DirectionSet, Level, Word};
//!
//! let hard = Level::new(4)?.directions();
//! assert!(!hard.contains_direction(Direction::E));
//!
//! let word = Word::new("rust")?.with_directions(hard);
//! assert_eq!(word.text(), "RUST");
//! assert_eq!(word.directions() & DirectionSet::E, DirectionSet::NONE);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod direction;
pub mod direction_set;
pub mod error;
pub mod grid;
pub mod level;
pub mod position;
pub mod word;
pub mod word_list;

// Re-export commonly used types
pub use self::{
    direction::{Direction, ParseDirectionError},
    direction_set::{DirectionSet, MergeOp},
    error::{ConfigurationError, ValidationError},
    grid::Grid,
    level::Level,
    position::{BoundingBox, Position},
    word::{Placement, Word},
    word_list::WordList,
};
