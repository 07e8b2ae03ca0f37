//! Puzzle settings.

use wordsearch_core::{ConfigurationError, DirectionSet, Level};
use wordsearch_generator::GeneratorConfig;

use crate::validator::{BoxedValidator, default_validators};

/// Settings for a [`WordSearch`](crate::WordSearch).
///
/// # Examples
///
/// ```
/// use wordsearch_core::DirectionSet;
/// use wordsearch_puzzle::PuzzleConfig;
///
/// let config = PuzzleConfig::default().with_level(3)?.with_size(Some(12));
/// assert_eq!(config.directions, DirectionSet::ALL);
/// assert_eq!(config.secret_directions, DirectionSet::FORWARD);
/// assert!(PuzzleConfig::default().with_level(6).is_err());
/// # Ok::<(), wordsearch_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    /// Grid side length, or `None` to size the grid from the words.
    pub size: Option<usize>,
    /// Directions allowed for hidden words.
    pub directions: DirectionSet,
    /// Directions allowed for secret words.
    pub secret_directions: DirectionSet,
    /// Smallest allowed grid.
    pub min_size: usize,
    /// Largest allowed grid.
    pub max_size: usize,
    /// Fewest words a puzzle may have.
    pub min_words: usize,
    /// Most words a puzzle may have.
    pub max_words: usize,
    /// Placement priority given to hidden words.
    pub hidden_priority: i32,
    /// Placement priority given to secret words.
    pub secret_priority: i32,
    /// Checks applied to every word before it is accepted.
    pub validators: Vec<BoxedValidator>,
    /// Settings passed to the placement engine.
    pub generator: GeneratorConfig,
}

impl PuzzleConfig {
    /// Smallest grid size allowed by default.
    pub const MIN_SIZE: usize = 5;
    /// Largest grid size allowed by default.
    pub const MAX_SIZE: usize = 50;
    /// Fewest words allowed by default.
    pub const MIN_WORDS: usize = 1;
    /// Most words allowed by default.
    pub const MAX_WORDS: usize = 100;
    /// Priority of hidden words by default.
    pub const HIDDEN_PRIORITY: i32 = 2;
    /// Priority of secret words by default.
    pub const SECRET_PRIORITY: i32 = 4;

    /// Sets the grid size.
    #[must_use]
    pub fn with_size(mut self, size: Option<usize>) -> Self {
        self.size = size;
        self
    }

    /// Sets the hidden-word directions from a difficulty level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownLevel`] if `level` is not defined.
    pub fn with_level(mut self, level: i32) -> Result<Self, ConfigurationError> {
        self.directions = Level::new(level)?.directions();
        Ok(self)
    }

    /// Sets the secret-word directions from a difficulty level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownLevel`] if `level` is not defined.
    pub fn with_secret_level(mut self, level: i32) -> Result<Self, ConfigurationError> {
        self.secret_directions = Level::new(level)?.directions();
        Ok(self)
    }

    /// Sets the hidden-word directions.
    #[must_use]
    pub fn with_directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    /// Sets the secret-word directions.
    #[must_use]
    pub fn with_secret_directions(mut self, directions: DirectionSet) -> Self {
        self.secret_directions = directions;
        self
    }

    /// Replaces the validators.
    #[must_use]
    pub fn with_validators(mut self, validators: Vec<BoxedValidator>) -> Self {
        self.validators = validators;
        self
    }

    /// Replaces the placement engine settings.
    #[must_use]
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: None,
            directions: Level::DEFAULT.directions(),
            secret_directions: DirectionSet::FORWARD,
            min_size: Self::MIN_SIZE,
            max_size: Self::MAX_SIZE,
            min_words: Self::MIN_WORDS,
            max_words: Self::MAX_WORDS,
            hidden_priority: Self::HIDDEN_PRIORITY,
            secret_priority: Self::SECRET_PRIORITY,
            validators: default_validators(),
            generator: GeneratorConfig::default(),
        }
    }
}
