//! Error types shared by every wordsearch crate.

/// An input was rejected before any randomized work started.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    /// A word was empty after trimming.
    #[display("word is empty")]
    EmptyWord,
    /// Two words with different text were merged.
    #[display("cannot merge words with different text: {left:?} != {right:?}")]
    MergeMismatch {
        /// Text of the first word.
        left: String,
        /// Text of the second word.
        right: String,
    },
    /// The filler alphabet has no usable characters.
    #[display("no valid alphabet characters provided to the generator")]
    EmptyAlphabet,
    /// The number of words is outside the configured bounds.
    #[display("word count {count} is outside the allowed range {min}..={max}")]
    WordCount {
        /// Number of words supplied.
        count: usize,
        /// Minimum number of words.
        min: usize,
        /// Maximum number of words.
        max: usize,
    },
    /// The puzzle size is outside the configured bounds.
    #[display("puzzle size {size} is outside the allowed range {min}..={max}")]
    SizeOutOfRange {
        /// Requested size.
        size: usize,
        /// Minimum size.
        min: usize,
        /// Maximum size.
        max: usize,
    },
    /// A shape was requested on a grid smaller than it supports.
    #[display("mask too small: {shape} needs a grid of at least {min}, got {size}")]
    MaskTooSmall {
        /// Name of the shape.
        shape: &'static str,
        /// Requested grid size.
        size: usize,
        /// Minimum grid size for the shape.
        min: usize,
    },
    /// A mask does not have the puzzle's size.
    #[display("mask size {mask} does not match puzzle size {size}")]
    MaskSizeMismatch {
        /// Size of the mask.
        mask: usize,
        /// Size of the puzzle.
        size: usize,
    },
    /// A mask has no active cells.
    #[display("mask has no active cells")]
    EmptyMask,
}

/// A configuration value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigurationError {
    /// A difficulty level is not in the level table.
    #[display("unknown difficulty level: {level}")]
    UnknownLevel {
        /// The requested level.
        level: i32,
    },
    /// A word has no direction left to be placed in.
    #[display("word {word:?} has no allowed directions")]
    EmptyDirections {
        /// Text of the word.
        word: String,
    },
    /// Shape parameters are invalid.
    #[display("invalid {shape} shape: {reason}")]
    InvalidShape {
        /// Name of the shape.
        shape: &'static str,
        /// Why the parameters were rejected.
        reason: &'static str,
    },
    /// No shape with this name exists.
    #[display("unknown shape: {name:?}")]
    UnknownShape {
        /// The requested name.
        name: String,
    },
}
