//! Grid coordinates.

use std::fmt;

use crate::Direction;

/// A cell coordinate in a square grid, zero-based, row first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (y coordinate).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (x coordinate).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Moves `steps` cells along `direction`.
    ///
    /// Returns `None` if the result would have a negative coordinate or lie
    /// outside a grid of side `size`.
    #[must_use]
    pub fn step(self, direction: Direction, steps: usize, size: usize) -> Option<Self> {
        let steps = isize::try_from(steps).ok()?;
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(steps)?)?;
        (row < size && col < size).then_some(Self { row, col })
    }

    /// Returns the cells `self, self + d, ..., self + (len - 1)·d`.
    ///
    /// Returns `None` if any of them falls outside a grid of side `size`.
    #[must_use]
    pub fn line(self, direction: Direction, len: usize, size: usize) -> Option<Vec<Self>> {
        (0..len).map(|k| self.step(direction, k, size)).collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The smallest rectangle covering a set of cells, inclusive on both ends.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{BoundingBox, Position};
///
/// let bbox = BoundingBox::covering([Position::new(2, 3), Position::new(5, 1)]).unwrap();
/// assert_eq!(bbox.top_left(), Position::new(2, 1));
/// assert_eq!(bbox.bottom_right(), Position::new(5, 3));
/// assert_eq!((bbox.width(), bbox.height()), (3, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    top_left: Position,
    bottom_right: Position,
}

impl BoundingBox {
    /// Creates a bounding box from its two corners.
    ///
    /// # Panics
    ///
    /// Panics if `bottom_right` is above or left of `top_left`.
    #[must_use]
    pub fn new(top_left: Position, bottom_right: Position) -> Self {
        assert!(top_left.row <= bottom_right.row && top_left.col <= bottom_right.col);
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Returns the bounding box of `positions`, or `None` if it is empty.
    pub fn covering<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        positions.into_iter().fold(None, |bbox, pos| {
            Some(match bbox {
                None => Self::new(pos, pos),
                Some(Self {
                    top_left,
                    bottom_right,
                }) => Self {
                    top_left: Position::new(top_left.row.min(pos.row), top_left.col.min(pos.col)),
                    bottom_right: Position::new(
                        bottom_right.row.max(pos.row),
                        bottom_right.col.max(pos.col),
                    ),
                },
            })
        })
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn top_left(self) -> Position {
        self.top_left
    }

    /// Returns the bottom-right corner.
    #[must_use]
    pub const fn bottom_right(self) -> Position {
        self.bottom_right
    }

    /// Returns the number of columns covered.
    #[must_use]
    pub const fn width(self) -> usize {
        self.bottom_right.col - self.top_left.col + 1
    }

    /// Returns the number of rows covered.
    #[must_use]
    pub const fn height(self) -> usize {
        self.bottom_right.row - self.top_left.row + 1
    }

    /// Returns `true` if `pos` lies inside the box.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.top_left.row <= pos.row
            && pos.row <= self.bottom_right.row
            && self.top_left.col <= pos.col
            && pos.col <= self.bottom_right.col
    }

    /// Converts `pos` into 1-based `(x, y)` coordinates relative to the box.
    ///
    /// Positions above or left of the box saturate at zero.
    #[must_use]
    pub const fn offset_xy(self, pos: Position) -> (usize, usize) {
        (
            (pos.col + 1).saturating_sub(self.top_left.col),
            (pos.row + 1).saturating_sub(self.top_left.row),
        )
    }
}
