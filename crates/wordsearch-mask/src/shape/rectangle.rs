use wordsearch_core::{BoundingBox, ConfigurationError, Position};

use super::{BoxedShape, Fill, Shape};
use crate::Mask;

const NAME: &str = "rectangle";

/// An axis-aligned rectangle.
///
/// Without an explicit origin the rectangle is centered, rounding towards the
/// top-left corner. Cells beyond the grid edge are clipped.
///
/// # Examples
///
/// ```
/// use wordsearch_mask::{Rectangle, Shape};
///
/// let mask = Rectangle::new(3, 2)?.with_origin(1, 0).generate(4)?;
/// assert_eq!(mask.to_string(), "#***\n#***\n####\n####");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    name: &'static str,
    width: usize,
    height: usize,
    origin: Option<(usize, usize)>,
    fill: Fill,
}

impl Rectangle {
    /// Creates a filled, centered rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidShape`] if either extent is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::InvalidShape {
                shape: NAME,
                reason: "width and height must be positive",
            });
        }
        Ok(Self::sized(width, height))
    }

    pub(crate) const fn sized(width: usize, height: usize) -> Self {
        Self {
            name: NAME,
            width,
            height,
            origin: None,
            fill: Fill::Filled,
        }
    }

    /// Creates a filled rectangle spanning two corner cells, both inclusive.
    #[must_use]
    pub fn from_bounds(bounds: BoundingBox) -> Self {
        let top_left = bounds.top_left();
        Self::sized(bounds.width(), bounds.height()).with_origin(top_left.col(), top_left.row())
    }

    /// Places the top-left corner at `(x, y)`.
    #[must_use]
    pub fn with_origin(mut self, x: usize, y: usize) -> Self {
        self.origin = Some((x, y));
        self
    }

    /// Selects which cells are activated.
    #[must_use]
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Renames the shape.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    fn origin(&self, size: usize) -> (usize, usize) {
        self.origin.unwrap_or((
            size.saturating_sub(self.width) / 2,
            size.saturating_sub(self.height) / 2,
        ))
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        self.name
    }

    fn min_size(&self) -> usize {
        let (x, y) = self.origin.unwrap_or((0, 0));
        x.saturating_add(self.width).max(y.saturating_add(self.height))
    }

    fn rasterize(&self, size: usize) -> Mask {
        let (x0, y0) = self.origin(size);
        let band = match self.fill {
            Fill::Boundary => 1,
            Fill::Filled => usize::MAX,
            Fill::Ring { thickness } => thickness.max(1),
        };
        let cells = (0..self.height).flat_map(|dy| {
            (0..self.width).filter_map(move |dx| {
                let edge = dx
                    .min(dy)
                    .min(self.width - 1 - dx)
                    .min(self.height - 1 - dy);
                (edge < band).then(|| Position::new(y0 + dy, x0 + dx))
            })
        });
        Mask::from_cells(size, cells)
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(self.clone())
    }
}
