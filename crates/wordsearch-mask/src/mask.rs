//! Active-cell masks.

use std::{fmt, str::FromStr};

use wordsearch_core::{BoundingBox, Grid, Position};

/// How a mask is merged into another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combine {
    /// A cell is active if it is active in either mask.
    #[default]
    Union,
    /// A cell is active if it is active in both masks.
    Intersect,
    /// Cells active in the other mask become inactive.
    Subtract,
}

/// A square grid of active and inactive cells.
///
/// Letters may only be placed on active cells. The text form uses `*` for
/// active and `#` for inactive cells, one row per line.
///
/// # Examples
///
/// ```
/// use wordsearch_mask::{Combine, Mask};
///
/// let mut mask: Mask = "
///     *##
///     ***
///     ###*
/// "
/// .parse()?;
/// assert_eq!(mask.size(), 3);
/// assert_eq!(mask.active_count(), 5);
///
/// let inverse = mask.invert();
/// assert_eq!(inverse.active_count(), 4);
/// mask.combine(&inverse, Combine::Union);
/// assert_eq!(mask, Mask::full(3));
/// # Ok::<(), wordsearch_mask::ParseMaskError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    cells: Grid<bool>,
}

impl Mask {
    /// Creates a mask with every cell active.
    #[must_use]
    pub fn full(size: usize) -> Self {
        Self {
            cells: Grid::new(size, true),
        }
    }

    /// Creates a mask with every cell inactive.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            cells: Grid::new(size, false),
        }
    }

    /// Creates a mask activating exactly `cells`.
    ///
    /// Cells outside the grid are ignored.
    pub fn from_cells<I>(size: usize, cells: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut mask = Self::empty(size);
        for pos in cells {
            if let Some(cell) = mask.cells.get_mut(pos) {
                *cell = true;
            }
        }
        mask
    }

    /// Returns the side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Returns `true` if `pos` is inside the grid and active.
    #[must_use]
    pub fn is_active(&self, pos: Position) -> bool {
        self.cells.get(pos).copied().unwrap_or(false)
    }

    /// Activates or deactivates a cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set_active(&mut self, pos: Position, active: bool) {
        self.cells[pos] = active;
    }

    /// Activates a cell if it is inside the grid; ignores it otherwise.
    pub(crate) fn activate_clipped(&mut self, row: i64, col: i64) {
        if let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col))
            && let Some(cell) = self.cells.get_mut(Position::new(row, col))
        {
            *cell = true;
        }
    }

    /// Returns the number of active cells.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|(_, active)| **active).count()
    }

    /// Iterates over the active cells in row-major order.
    pub fn active_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter_map(|(pos, active)| active.then_some(pos))
    }

    /// Returns the smallest rectangle covering every active cell.
    ///
    /// Returns `None` if no cell is active.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::covering(self.active_cells())
    }

    /// Merges `other` into `self`.
    ///
    /// # Panics
    ///
    /// Panics if the masks have different sizes.
    pub fn combine(&mut self, other: &Self, op: Combine) {
        assert_eq!(
            self.size(),
            other.size(),
            "cannot combine masks of different sizes"
        );
        for (pos, &theirs) in other.cells.iter() {
            let ours = &mut self.cells[pos];
            *ours = match op {
                Combine::Union => *ours || theirs,
                Combine::Intersect => *ours && theirs,
                Combine::Subtract => *ours && !theirs,
            };
        }
    }

    /// Returns the mask with active and inactive cells swapped.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            cells: self.cells.map(|active| !active),
        }
    }

    /// Mirrors the mask left to right.
    #[must_use]
    pub fn flip_horizontal(&self) -> Self {
        let last = self.size().saturating_sub(1);
        self.remap(|pos| Position::new(pos.row(), last - pos.col()))
    }

    /// Mirrors the mask top to bottom.
    #[must_use]
    pub fn flip_vertical(&self) -> Self {
        let last = self.size().saturating_sub(1);
        self.remap(|pos| Position::new(last - pos.row(), pos.col()))
    }

    /// Swaps rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        self.remap(|pos| Position::new(pos.col(), pos.row()))
    }

    /// Returns the underlying grid.
    #[must_use]
    pub fn as_grid(&self) -> &Grid<bool> {
        &self.cells
    }

    fn remap<F>(&self, source: F) -> Self
    where
        F: Fn(Position) -> Position,
    {
        Self {
            cells: Grid::from_fn(self.size(), |pos| self.cells[source(pos)]),
        }
    }
}

impl From<Grid<bool>> for Mask {
    fn from(cells: Grid<bool>) -> Self {
        Self { cells }
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &active in row {
                write!(f, "{}", if active { '*' } else { '#' })?;
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Mask`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseMaskError {
    /// A character other than `*` or `#` was found.
    #[display("invalid mask character {ch:?} on row {row}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Zero-based row index.
        row: usize,
    },
    /// A row does not have one cell per row of the mask.
    #[display("row {row} has {len} cells, expected {size}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Number of cells in the row.
        len: usize,
        /// Number of rows in the mask.
        size: usize,
    },
}

impl FromStr for Mask {
    type Err = ParseMaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let size = rows.len();
        let mut mask = Self::empty(size);
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(ParseMaskError::NotSquare { row, len, size });
            }
            for (col, ch) in line.chars().enumerate() {
                let active = match ch {
                    '*' => true,
                    '#' => false,
                    _ => return Err(ParseMaskError::InvalidChar { ch, row }),
                };
                mask.set_active(Position::new(row, col), active);
            }
        }
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Mask {
        s.parse().unwrap()
    }

    #[test]
    fn test_full_and_empty() {
        let full = Mask::full(4);
        assert_eq!(full.active_count(), 16);
        assert!(full.is_active(Position::new(3, 3)));
        assert!(!full.is_active(Position::new(4, 0)));

        let empty = Mask::empty(4);
        assert_eq!(empty.active_count(), 0);
        assert_eq!(empty.bounding_box(), None);
        assert_eq!(empty.invert(), full);
    }

    #[test]
    fn test_display_round_trips() {
        let text = "*##\n#*#\n**#";
        assert_eq!(parse(text).to_string(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "**\n*".parse::<Mask>(),
            Err(ParseMaskError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
        assert_eq!(
            "*.\n**".parse::<Mask>(),
            Err(ParseMaskError::InvalidChar { ch: '.', row: 0 })
        );
    }

    #[test]
    fn test_active_cells_and_bounding_box() {
        let mask = parse(
            "
            ####
            #*##
            ##*#
            ####
            ",
        );
        assert_eq!(
            mask.active_cells().collect::<Vec<_>>(),
            vec![Position::new(1, 1), Position::new(2, 2)]
        );
        let bbox = mask.bounding_box().unwrap();
        assert_eq!(bbox.top_left(), Position::new(1, 1));
        assert_eq!(bbox.bottom_right(), Position::new(2, 2));
    }

    #[test]
    fn test_combine() {
        let a = parse("**#\n**#\n###");
        let b = parse("###\n#**\n#**");

        let mut union = a.clone();
        union.combine(&b, Combine::Union);
        assert_eq!(union, parse("**#\n***\n#**"));

        let mut intersect = a.clone();
        intersect.combine(&b, Combine::Intersect);
        assert_eq!(intersect, parse("###\n#*#\n###"));

        let mut subtract = a;
        subtract.combine(&b, Combine::Subtract);
        assert_eq!(subtract, parse("**#\n*##\n###"));
    }

    #[test]
    #[should_panic(expected = "different sizes")]
    fn test_combine_size_mismatch_panics() {
        Mask::full(3).combine(&Mask::full(4), Combine::Union);
    }

    #[test]
    fn test_transformations() {
        let mask = parse("**#\n###\n###");
        assert_eq!(mask.flip_horizontal(), parse("#**\n###\n###"));
        assert_eq!(mask.flip_vertical(), parse("###\n###\n**#"));
        assert_eq!(mask.transpose(), parse("*##\n*##\n###"));
        assert_eq!(mask.transpose().transpose(), mask);
    }

    #[test]
    fn test_from_cells_clips() {
        let mask = Mask::from_cells(2, [Position::new(0, 1), Position::new(5, 5)]);
        assert_eq!(mask, parse("#*\n##"));
    }

    #[test]
    fn test_activate_clipped() {
        let mut mask = Mask::empty(2);
        mask.activate_clipped(-1, 0);
        mask.activate_clipped(0, 2);
        mask.activate_clipped(1, 1);
        assert_eq!(mask, parse("##\n#*"));
    }
}
