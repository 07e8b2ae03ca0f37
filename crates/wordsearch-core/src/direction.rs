//! The eight reading directions of a word-search grid.

use std::{fmt, str::FromStr};

/// A unit step along one of the eight compass directions.
///
/// Deltas are expressed as `(row, column)` pairs, so [`Direction::N`] moves one
/// row up and [`Direction::E`] moves one column to the right.
///
/// The set of directions is closed: word placement only ever uses these eight
/// vectors.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Direction;
///
/// assert_eq!(Direction::NE.delta(), (-1, 1));
/// assert_eq!(Direction::NE.opposite(), Direction::SW);
/// assert!(Direction::S.is_cardinal());
/// assert!(Direction::SE.is_forward());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Up.
    N = 0,
    /// Up and to the right.
    NE = 1,
    /// Right.
    E = 2,
    /// Down and to the right.
    SE = 3,
    /// Down.
    S = 4,
    /// Down and to the left.
    SW = 5,
    /// Left.
    W = 6,
    /// Up and to the left.
    NW = 7,
}

impl Direction {
    /// All eight directions, clockwise starting at [`Direction::N`].
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Returns the zero-based index of this direction within [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the direction at `index` within [`Direction::ALL`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-7.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 8, "direction index must be between 0 and 7");
        Self::ALL[index as usize]
    }

    /// Returns the `(row, column)` step of this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::N => (-1, 0),
            Self::NE => (-1, 1),
            Self::E => (0, 1),
            Self::SE => (1, 1),
            Self::S => (1, 0),
            Self::SW => (1, -1),
            Self::W => (0, -1),
            Self::NW => (-1, -1),
        }
    }

    /// Returns the row step of this direction.
    #[must_use]
    pub const fn row_delta(self) -> isize {
        self.delta().0
    }

    /// Returns the column step of this direction.
    #[must_use]
    pub const fn col_delta(self) -> isize {
        self.delta().1
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_index((self.index() + 4) % 8)
    }

    /// Returns `true` for directions that move along both axes.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }

    /// Returns `true` for directions that move along a single axis.
    #[must_use]
    pub const fn is_cardinal(self) -> bool {
        !self.is_diagonal()
    }

    /// Returns `true` for the "easy" reading directions: NE, E, SE and S.
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::NE | Self::E | Self::SE | Self::S)
    }

    /// Returns `true` for the directions that are not forward.
    #[must_use]
    pub const fn is_backward(self) -> bool {
        !self.is_forward()
    }

    /// Returns `true` if the column decreases along this direction.
    #[must_use]
    pub const fn goes_left(self) -> bool {
        self.col_delta() < 0
    }

    /// Returns `true` if the column increases along this direction.
    #[must_use]
    pub const fn goes_right(self) -> bool {
        self.col_delta() > 0
    }

    /// Returns `true` if the row decreases along this direction.
    #[must_use]
    pub const fn goes_up(self) -> bool {
        self.row_delta() < 0
    }

    /// Returns `true` if the row increases along this direction.
    #[must_use]
    pub const fn goes_down(self) -> bool {
        self.row_delta() > 0
    }

    /// Returns the compass name of this direction (`"N"`, `"NE"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction: {name:?}")]
pub struct ParseDirectionError {
    name: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseDirectionError {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_deltas_are_unit_steps() {
        for d in Direction::ALL {
            let (dr, dc) = d.delta();
            assert!((-1..=1).contains(&dr));
            assert!((-1..=1).contains(&dc));
            assert_ne!((dr, dc), (0, 0));
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::N.opposite(), Direction::S);
        assert_eq!(Direction::E.opposite(), Direction::W);
        assert_eq!(Direction::NW.opposite(), Direction::SE);
        for d in Direction::ALL {
            let (dr, dc) = d.delta();
            assert_eq!(d.opposite().delta(), (-dr, -dc));
        }
    }

    #[test]
    fn test_classification() {
        assert!(Direction::S.is_cardinal());
        assert!(Direction::NE.is_diagonal());
        assert!(Direction::E.is_forward());
        assert!(Direction::W.is_backward());
        assert!(Direction::N.is_backward());
        assert!(Direction::SW.goes_left() && Direction::SW.goes_down());
        assert!(Direction::NE.goes_right() && Direction::NE.goes_up());
        assert!(!Direction::E.goes_up() && !Direction::E.goes_down());
    }

    #[test]
    fn test_parse_names() {
        for d in Direction::ALL {
            assert_eq!(d.name().parse::<Direction>().unwrap(), d);
            assert_eq!(d.to_string().to_lowercase().parse::<Direction>().unwrap(), d);
        }
        assert!("up".parse::<Direction>().is_err());
    }

    proptest! {
        #[test]
        fn opposite_is_an_involution(i in 0u8..8) {
            let d = Direction::from_index(i);
            prop_assert_eq!(d.opposite().opposite(), d);
            prop_assert_ne!(d.opposite(), d);
        }
    }
}
