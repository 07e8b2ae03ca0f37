use wordsearch_core::ConfigurationError;

use super::{BoxedShape, Fill, Shape, raster};
use crate::Mask;

const NAME: &str = "ellipse";
const MIN_SIZE: usize = 5;

/// An axis-aligned ellipse.
///
/// The outline is sampled parametrically, densely enough to close at cell
/// resolution. Interior cells are those whose centers satisfy
/// `((x - cx) / (w / 2))² + ((y - cy) / (h / 2))² <= 1`.
///
/// Without an explicit extent the ellipse is a circle spanning the grid.
/// Without an explicit origin it is centered.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Position;
/// use wordsearch_mask::{Ellipse, Shape};
///
/// let circle = Ellipse::fitted().generate(7)?;
/// assert!(circle.is_active(Position::new(3, 3)));
/// assert!(!circle.is_active(Position::new(0, 0)));
///
/// let dot = Ellipse::new(3, 3)?.generate(7)?;
/// assert_eq!(dot.active_count(), 9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ellipse {
    name: &'static str,
    extent: Option<(usize, usize)>,
    origin: Option<(usize, usize)>,
    fill: Fill,
}

impl Ellipse {
    /// Creates a filled circle that spans the whole grid.
    #[must_use]
    pub const fn fitted() -> Self {
        Self {
            name: NAME,
            extent: None,
            origin: None,
            fill: Fill::Filled,
        }
    }

    /// Creates a filled, centered ellipse `width` cells wide and `height` cells high.
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
            extent: Some((width, height)),
            ..Self::fitted()
        }
    }

    /// Places the top-left corner of the bounding rectangle at `(x, y)`.
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

    fn layout(&self, size: usize) -> ((usize, usize), (usize, usize)) {
        let (w, h) = self.extent.unwrap_or((size, size));
        let origin = self
            .origin
            .unwrap_or((size.saturating_sub(w) / 2, size.saturating_sub(h) / 2));
        ((w, h), origin)
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::fitted()
    }
}

impl Shape for Ellipse {
    fn name(&self) -> &'static str {
        self.name
    }

    fn min_size(&self) -> usize {
        match (self.extent, self.origin) {
            (None, _) => MIN_SIZE,
            (Some((w, h)), None) => w.max(h),
            (Some((w, h)), Some((x, y))) => x.saturating_add(w).max(y.saturating_add(h)),
        }
    }

    fn rasterize(&self, size: usize) -> Mask {
        let mut mask = Mask::empty(size);
        let ((w, h), (ox, oy)) = self.layout(size);
        let (w, h) = (raster::coord(w), raster::coord(h));
        let center = (
            raster::coord(ox) + (w - 1.0) / 2.0,
            raster::coord(oy) + (h - 1.0) / 2.0,
        );
        raster::draw_ellipse_outline(&mut mask, center, (w - 1.0) / 2.0, (h - 1.0) / 2.0);

        let (a, b) = (w / 2.0, h / 2.0);
        let hole = match self.fill {
            Fill::Boundary => return mask,
            Fill::Filled => None,
            Fill::Ring { thickness } => Some(raster::coord(thickness)),
        };
        let interior: Vec<_> = mask
            .as_grid()
            .positions()
            .filter(|pos| {
                let point = (raster::coord(pos.col()), raster::coord(pos.row()));
                raster::in_ellipse(center, a, b, point)
                    && hole.is_none_or(|t| !raster::in_ellipse(center, a - t, b - t, point))
            })
            .collect();
        for pos in interior {
            mask.set_active(pos, true);
        }
        mask
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(self.clone())
    }
}
