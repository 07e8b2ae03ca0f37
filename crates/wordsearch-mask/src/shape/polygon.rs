use wordsearch_core::ConfigurationError;

use super::{
    BoxedShape, Shape,
    raster::{self, Point},
};
use crate::Mask;

const NAME: &str = "polygon";
const MIN_SIZE: usize = 5;

/// A regular polygon inscribed in the grid.
///
/// Vertices are spaced `360 / n` degrees apart around the grid center,
/// starting `angle` degrees clockwise from straight up. The radius reaches the
/// grid edge, so the shape always spans the full grid in its widest direction.
///
/// # Examples
///
/// ```
/// use wordsearch_mask::{RegularPolygon, Shape};
///
/// let diamond = RegularPolygon::new(4, 90.0)?;
/// let mask = diamond.generate(5)?;
/// assert_eq!(
///     mask.to_string(),
///     "##*##\n#***#\n*****\n#***#\n##*##"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    name: &'static str,
    vertices: usize,
    angle: f64,
    outline: bool,
}

impl RegularPolygon {
    /// Creates a filled polygon with `vertices` corners.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidShape`] if there are fewer than
    /// three vertices or the angle is not finite.
    pub fn new(vertices: usize, angle: f64) -> Result<Self, ConfigurationError> {
        if vertices < 3 {
            return Err(ConfigurationError::InvalidShape {
                shape: NAME,
                reason: "a polygon needs at least 3 vertices",
            });
        }
        if !angle.is_finite() {
            return Err(ConfigurationError::InvalidShape {
                shape: NAME,
                reason: "the start angle must be finite",
            });
        }
        Ok(Self::preset(NAME, vertices, angle))
    }

    pub(crate) const fn preset(name: &'static str, vertices: usize, angle: f64) -> Self {
        Self {
            name,
            vertices,
            angle,
            outline: false,
        }
    }

    /// Renames the shape.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Draws only the edges.
    #[must_use]
    pub fn outline(mut self) -> Self {
        self.outline = true;
        self
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the start angle in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Returns the vertex coordinates `(x, y)` on a grid of side `size`.
    #[must_use]
    pub fn points(&self, size: usize) -> Vec<Point> {
        let c = raster::grid_center(size);
        raster::points_on_circle((c, c), c, self.vertices, self.angle).collect()
    }
}

impl Shape for RegularPolygon {
    fn name(&self) -> &'static str {
        self.name
    }

    fn min_size(&self) -> usize {
        MIN_SIZE
    }

    fn rasterize(&self, size: usize) -> Mask {
        let mut mask = Mask::empty(size);
        raster::draw_polygon(&mut mask, &self.points(size), self.outline);
        mask
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(self.clone())
    }
}
