//! The puzzle façade.

use std::fmt;

use wordsearch_core::{
    ConfigurationError, DirectionSet, MergeOp, ValidationError, Word, WordList,
};
use wordsearch_generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use wordsearch_mask::{BoxedShape, Mask, Shape as _};

use crate::{Formatter, PuzzleConfig, TextFormatter};

/// A word turned away by a validator.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{word} rejected by {validator}")]
pub struct RejectedWord {
    /// The normalized word.
    pub word: String,
    /// Name of the validator that rejected it.
    pub validator: &'static str,
}

/// Splits free-form input into word tokens.
///
/// Words are separated by commas, whitespace, or both. Empty tokens are
/// skipped.
///
/// # Examples
///
/// ```
/// use wordsearch_puzzle::parse_words;
///
/// let words: Vec<_> = parse_words("cat, dog,,bird  fish").collect();
/// assert_eq!(words, ["cat", "dog", "bird", "fish"]);
/// ```
pub fn parse_words(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Computes the grid size used when none is configured.
///
/// The size grows with the longest word (at least 10) plus a margin that
/// widens once there are more than 15 words, clamped to
/// `min_size..=max_size`.
#[must_use]
pub fn auto_size(words: &WordList, min_size: usize, max_size: usize) -> usize {
    let longest = words.iter().map(Word::len).max().unwrap_or(0).max(10);
    let count = words.len();
    // round(2 * count / 15); the fraction can never be exactly one half
    let margin = if count > 15 { (4 * count + 15) / 30 } else { 2 };
    (longest + margin).clamp(min_size, max_size)
}

/// A word-search puzzle: words, settings and the latest generation result.
///
/// Adding, removing or replacing words, or changing the settings, discards
/// the previous result.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::PuzzleSeed;
/// use wordsearch_puzzle::{PuzzleConfig, WordSearch};
///
/// let mut search = WordSearch::new(PuzzleConfig::default().with_level(3)?);
/// let rejected = search.add_words("cat, dog bird, level", false);
/// assert_eq!(rejected.len(), 1); // LEVEL is a palindrome
///
/// search.set_seed(Some(PuzzleSeed::from_phrase("pets")));
/// let puzzle = search.generate()?;
/// assert_eq!(puzzle.size(), 12);
/// assert!(puzzle.is_success());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordSearch {
    config: PuzzleConfig,
    words: WordList,
    shape: Option<BoxedShape>,
    mask: Option<Mask>,
    seed: Option<PuzzleSeed>,
    puzzle: Option<GeneratedPuzzle>,
}

impl WordSearch {
    /// Creates an empty puzzle with the given settings.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the settings.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Replaces the settings.
    pub fn set_config(&mut self, config: PuzzleConfig) {
        self.config = config;
        self.invalidate();
    }

    /// Returns the words, with placements after a successful generation.
    ///
    /// Once a puzzle exists this is the generated copy: every word carries
    /// its placement, and its direction set is already narrowed to the
    /// configured level. [`WordSearch::input_words`] returns the words as
    /// they were added.
    #[must_use]
    pub fn words(&self) -> &WordList {
        self.puzzle.as_ref().map_or(&self.words, |p| &p.words)
    }

    /// Returns the words as added, without placements or level narrowing.
    #[must_use]
    pub fn input_words(&self) -> &WordList {
        &self.words
    }

    /// Returns the shape used to build the mask, if any.
    #[must_use]
    pub fn shape(&self) -> Option<&BoxedShape> {
        self.shape.as_ref()
    }

    /// Sets the shape used to build the mask.
    pub fn set_shape(&mut self, shape: Option<BoxedShape>) {
        self.shape = shape;
        self.invalidate();
    }

    /// Sets an explicit mask, which takes precedence over the shape.
    ///
    /// When no size is configured the grid takes the mask's size.
    pub fn set_mask(&mut self, mask: Option<Mask>) {
        self.mask = mask;
        self.invalidate();
    }

    /// Fixes the seed used by [`WordSearch::generate`].
    pub fn set_seed(&mut self, seed: Option<PuzzleSeed>) {
        self.seed = seed;
        self.invalidate();
    }

    /// Returns the latest generation result.
    #[must_use]
    pub fn puzzle(&self) -> Option<&GeneratedPuzzle> {
        self.puzzle.as_ref()
    }

    /// Returns the grid size the next generation will use.
    #[must_use]
    pub fn size(&self) -> usize {
        match (self.config.size, &self.mask) {
            (Some(size), _) => size,
            (None, Some(mask)) => mask.size(),
            (None, None) => auto_size(&self.words, self.config.min_size, self.config.max_size),
        }
    }

    /// Adds every word in `input` and returns the ones validators rejected.
    ///
    /// Words that normalize to nothing are skipped. The words allow every
    /// direction, so the configured level alone restricts them. Hidden and
    /// secret words take their priority from the settings.
    pub fn add_words(&mut self, input: &str, secret: bool) -> Vec<RejectedWord> {
        let priority = if secret {
            self.config.secret_priority
        } else {
            self.config.hidden_priority
        };
        let mut rejected = Vec::new();
        for token in parse_words(input) {
            let Ok(word) = Word::new(token) else {
                continue;
            };
            let word = word
                .with_secret(secret)
                .with_priority(priority)
                .with_directions(DirectionSet::ALL);
            if let Err(err) = self.add_word(word) {
                rejected.push(err);
            }
        }
        rejected
    }

    /// Adds a single word.
    ///
    /// A word without its own direction restriction should allow
    /// [`DirectionSet::ALL`] so that the difficulty level decides; words
    /// added through [`WordSearch::add_words`] do. A word already present is
    /// merged with the new settings. The word keeps its own priority.
    ///
    /// # Errors
    ///
    /// Returns [`RejectedWord`] if a validator refuses the word.
    pub fn add_word(&mut self, word: Word) -> Result<(), RejectedWord> {
        if let Some(validator) = self
            .config
            .validators
            .iter()
            .find(|v| !v.validate(word.text(), &self.words))
        {
            log::debug!("{} rejected by {}", word.text(), validator.name());
            return Err(RejectedWord {
                word: word.text().to_owned(),
                validator: validator.name(),
            });
        }
        self.words.insert(word, MergeOp::Union);
        self.invalidate();
        Ok(())
    }

    /// Removes every word in `input` and returns how many were present.
    pub fn remove_words(&mut self, input: &str) -> usize {
        let removed = parse_words(input)
            .filter(|token| self.words.remove(token).is_some())
            .count();
        if removed > 0 {
            self.invalidate();
        }
        removed
    }

    /// Replaces all words with the ones in `input`.
    pub fn replace_words(&mut self, input: &str, secret: bool) -> Vec<RejectedWord> {
        self.words = WordList::new();
        self.invalidate();
        self.add_words(input, secret)
    }

    /// Builds the mask, places the words and fills the grid.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::WordCount`] if the number of words is outside the
    ///   configured bounds.
    /// - [`ValidationError::SizeOutOfRange`] if a configured size is outside
    ///   the bounds.
    /// - [`ValidationError::MaskSizeMismatch`] if an explicit mask disagrees
    ///   with the configured size.
    /// - [`ValidationError::MaskTooSmall`] if the shape needs a larger grid.
    /// - [`ConfigurationError::EmptyDirections`] if a word has no direction
    ///   left after applying the level.
    /// - Any [`GenerateError`] from the placement engine.
    pub fn generate(&mut self) -> Result<&GeneratedPuzzle, GenerateError> {
        self.puzzle = None;
        let config = &self.config;

        let count = self.words.len();
        if !(config.min_words..=config.max_words).contains(&count) {
            return Err(ValidationError::WordCount {
                count,
                min: config.min_words,
                max: config.max_words,
            }
            .into());
        }

        let size = self.size();
        if !(config.min_size..=config.max_size).contains(&size) {
            return Err(ValidationError::SizeOutOfRange {
                size,
                min: config.min_size,
                max: config.max_size,
            }
            .into());
        }

        let mask = match (&self.mask, &self.shape) {
            (Some(mask), _) if mask.size() != size => {
                return Err(ValidationError::MaskSizeMismatch {
                    mask: mask.size(),
                    size,
                }
                .into());
            }
            (Some(mask), _) => mask.clone(),
            (None, Some(shape)) => shape.generate(size)?,
            (None, None) => Mask::full(size),
        };

        let mut words = self.words.clone();
        for word in words.iter_mut() {
            let level = if word.is_secret() {
                config.secret_directions
            } else {
                config.directions
            };
            let directions: DirectionSet = word.directions() & level;
            if directions.is_empty() {
                return Err(ConfigurationError::EmptyDirections {
                    word: word.text().to_owned(),
                }
                .into());
            }
            word.set_directions(directions);
        }

        let generator = PuzzleGenerator::new(config.generator.clone());
        let seed = self.seed.unwrap_or_else(PuzzleSeed::random);
        let puzzle = generator.generate_with_seed(&words, &mask, seed)?;
        Ok(self.puzzle.insert(puzzle))
    }

    /// Renders the latest result with `formatter`.
    #[must_use]
    pub fn format(&self, formatter: &dyn Formatter, solution: bool) -> Option<String> {
        self.puzzle.as_ref().map(|p| formatter.format(p, solution))
    }

    fn invalidate(&mut self) {
        self.puzzle = None;
    }
}

impl fmt::Display for WordSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format(&TextFormatter::new(), false) {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}
