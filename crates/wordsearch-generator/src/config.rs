//! Generator settings.

use crate::Alphabet;

/// What to do when a word cannot be placed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum ExhaustionPolicy {
    /// Abort the whole generation with a placement failure.
    #[default]
    Strict,
    /// Keep placing the remaining words and report the failures in the result.
    Lenient,
}

/// Settings for [`PuzzleGenerator`](crate::PuzzleGenerator).
///
/// # Examples
///
/// ```
/// use wordsearch_generator::{ExhaustionPolicy, GeneratorConfig};
///
/// let config = GeneratorConfig::default().with_policy(ExhaustionPolicy::Lenient);
/// assert_eq!(config.max_fit_tries, GeneratorConfig::DEFAULT_MAX_FIT_TRIES);
/// assert!(config.avoid_duplicate_words);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Letters used for filler cells.
    pub alphabet: Alphabet,
    /// Random placement attempts per word before it counts as unplaceable.
    pub max_fit_tries: usize,
    /// What to do with unplaceable words.
    pub policy: ExhaustionPolicy,
    /// Avoid filler letters that spell out an extra copy of a placed word.
    pub avoid_duplicate_words: bool,
}

impl GeneratorConfig {
    /// Attempts per word used by default.
    pub const DEFAULT_MAX_FIT_TRIES: usize = 1000;

    /// Replaces the filler alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Replaces the per-word attempt budget.
    #[must_use]
    pub fn with_max_fit_tries(mut self, max_fit_tries: usize) -> Self {
        self.max_fit_tries = max_fit_tries;
        self
    }

    /// Replaces the exhaustion policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables duplicate avoidance in the filler.
    #[must_use]
    pub fn with_avoid_duplicate_words(mut self, avoid: bool) -> Self {
        self.avoid_duplicate_words = avoid;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            max_fit_tries: Self::DEFAULT_MAX_FIT_TRIES,
            policy: ExhaustionPolicy::default(),
            avoid_duplicate_words: true,
        }
    }
}
