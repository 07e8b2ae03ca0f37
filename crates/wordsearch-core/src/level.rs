//! Difficulty levels.
//!
//! A difficulty level is a small integer that selects which reading directions
//! words may use. Easy levels only allow forward directions; harder levels hide
//! words backwards or forbid the most natural directions entirely.

use std::fmt;

use crate::{ConfigurationError, DirectionSet};

/// The level table as `(level, directions)` pairs.
const LEVELS: [(i32, DirectionSet); 9] = [
    (-1, DirectionSet::NONE),
    (1, DirectionSet::CROSSWORD),
    (2, DirectionSet::FORWARD),
    (3, DirectionSet::ALL),
    // no E or S, so words are harder to spot
    (
        4,
        DirectionSet::ALL.difference(DirectionSet::E.union(DirectionSet::S)),
    ),
    (5, DirectionSet::ALL.difference(DirectionSet::E)),
    (7, DirectionSet::DIAGONAL),
    (8, DirectionSet::CARDINAL),
    (10, DirectionSet::BACKWARD),
];

/// A validated difficulty level.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{DirectionSet, Level};
///
/// let level = Level::new(2)?;
/// assert_eq!(level.directions(), DirectionSet::FORWARD);
/// assert!(Level::new(6).is_err());
/// # Ok::<(), wordsearch_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Level {
    value: i32,
    directions: DirectionSet,
}

impl Level {
    /// The level used when none is configured.
    pub const DEFAULT: Self = Self {
        value: 2,
        directions: DirectionSet::FORWARD,
    };

    /// Looks up a difficulty level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownLevel`] if `value` is not in the
    /// level table.
    pub fn new(value: i32) -> Result<Self, ConfigurationError> {
        LEVELS
            .iter()
            .find(|(level, _)| *level == value)
            .map(|&(value, directions)| Self { value, directions })
            .ok_or(ConfigurationError::UnknownLevel { level: value })
    }

    /// Returns every known level in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        LEVELS
            .iter()
            .map(|&(value, directions)| Self { value, directions })
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.value
    }

    /// Returns the directions allowed at this level.
    #[must_use]
    pub const fn directions(self) -> DirectionSet {
        self.directions
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
