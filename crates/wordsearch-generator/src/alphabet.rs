//! Filler alphabets.

use std::{fmt, str::FromStr};

use wordsearch_core::ValidationError;

/// The letters used to fill cells that no word occupies.
///
/// Only alphabetic characters are kept. They are upper-cased, sorted and
/// deduplicated, so two alphabets built from the same letters in any order
/// produce the same puzzles for the same seed.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::Alphabet;
///
/// let alphabet = Alphabet::new("cab, a!")?;
/// assert_eq!(alphabet.letters(), &['A', 'B', 'C']);
/// assert!(Alphabet::new("123").is_err());
/// assert_eq!(Alphabet::default().len(), 26);
/// # Ok::<(), wordsearch_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the alphabetic characters of `letters`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAlphabet`] if `letters` has no
    /// alphabetic character.
    pub fn new(letters: &str) -> Result<Self, ValidationError> {
        let mut letters: Vec<char> = letters
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_uppercase)
            .collect();
        letters.sort_unstable();
        letters.dedup();
        if letters.is_empty() {
            return Err(ValidationError::EmptyAlphabet);
        }
        Ok(Self { letters })
    }

    /// Returns the letters in ascending order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`: an alphabet has at least one letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns `true` if `letter` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            letters: ('A'..='Z').collect(),
        }
    }
}

impl FromStr for Alphabet {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.letters.iter().collect();
        f.pad(&letters)
    }
}
