use wordsearch_core::Position;

use super::{BoxedShape, Shape};
use crate::Mask;

const NAME: &str = "bitmap";

/// An explicit set of active cells.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Position;
/// use wordsearch_mask::{Bitmap, Shape};
///
/// let bitmap = Bitmap::new([Position::new(0, 0), Position::new(2, 1)]);
/// assert_eq!(bitmap.min_size(), 3);
/// assert_eq!(bitmap.generate(3)?.to_string(), "*##\n###\n#*#");
/// # Ok::<(), wordsearch_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    name: &'static str,
    cells: Vec<Position>,
}

impl Bitmap {
    /// Creates a bitmap from its active cells.
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut cells: Vec<_> = cells.into_iter().collect();
        cells.sort_unstable();
        cells.dedup();
        Self { name: NAME, cells }
    }

    /// Captures the active cells of a mask.
    #[must_use]
    pub fn from_mask(mask: &Mask) -> Self {
        Self::new(mask.active_cells())
    }

    /// Renames the shape.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Returns the active cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }
}

impl Shape for Bitmap {
    fn name(&self) -> &'static str {
        self.name
    }

    fn min_size(&self) -> usize {
        self.cells
            .iter()
            .map(|pos| pos.row().max(pos.col()) + 1)
            .max()
            .unwrap_or(0)
    }

    fn rasterize(&self, size: usize) -> Mask {
        Mask::from_cells(size, self.cells.iter().copied())
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(self.clone())
    }
}
