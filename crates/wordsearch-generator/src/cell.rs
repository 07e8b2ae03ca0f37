//! Cells of a generated grid.

use std::fmt;

/// The content of one grid cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Cell {
    /// An active cell with no letter yet.
    #[default]
    Empty,
    /// A letter of a placed word.
    Placed(char),
    /// A random filler letter.
    Filler(char),
    /// A cell outside the mask.
    Inactive,
}

impl Cell {
    /// The glyph used for inactive cells.
    pub const BLOCKER: char = '#';

    /// Returns the letter in the cell, if any.
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Placed(c) | Self::Filler(c) => Some(c),
            Self::Empty | Self::Inactive => None,
        }
    }

    /// Returns the character to print for the cell.
    ///
    /// Inactive cells print as [`Cell::BLOCKER`] and empty cells as a space.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Placed(c) | Self::Filler(c) => c,
            Self::Empty => ' ',
            Self::Inactive => Self::BLOCKER,
        }
    }

    /// Returns `true` if the cell is inside the mask.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(Cell::Placed('A').glyph(), 'A');
        assert_eq!(Cell::Filler('b').glyph(), 'b');
        assert_eq!(Cell::Inactive.glyph(), '#');
        assert_eq!(Cell::Empty.to_string(), " ");
    }

    #[test]
    fn test_letter_and_activity() {
        assert_eq!(Cell::Placed('Q').letter(), Some('Q'));
        assert_eq!(Cell::Inactive.letter(), None);
        assert!(Cell::Empty.is_active());
        assert!(!Cell::Inactive.is_active());
        assert!(Cell::Filler('Z').is_filler());
    }
}
