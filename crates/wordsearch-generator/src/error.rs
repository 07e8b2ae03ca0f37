//! Generation errors.

use std::fmt;

use wordsearch_core::{ConfigurationError, ValidationError};

/// One or more words could not be placed.
///
/// The words are listed in placement order. A caller can recover by using a
/// larger grid, a less restrictive mask, or fewer or shorter words; the
/// generator never enlarges the grid on its own.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct PlacementFailure {
    words: Vec<String>,
}

impl PlacementFailure {
    /// Creates a failure naming `words`.
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Returns the words that could not be placed.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl fmt::Display for PlacementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not place ")?;
        match self.words.as_slice() {
            [word] => write!(f, "word {word}"),
            words => write!(f, "{} words: {}", words.len(), words.join(", ")),
        }
    }
}

/// Errors that can occur while generating a puzzle.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GenerateError {
    /// An input was rejected before placement started.
    #[display("invalid input: {_0}")]
    Validation(#[from] ValidationError),
    /// A setting cannot be used.
    #[display("invalid configuration: {_0}")]
    Configuration(#[from] ConfigurationError),
    /// Words could not be placed under the strict policy.
    #[display("{_0}")]
    Placement(#[from] PlacementFailure),
}
