use wordsearch_core::ConfigurationError;

use super::{
    BoxedShape, Shape,
    raster::{self, Point},
};
use crate::Mask;

const NAME: &str = "star";
const MIN_SIZE: usize = 7;
const DEFAULT_INNER_RATIO: f64 = 0.5;

/// A star with `points` tips.
///
/// The outline alternates between an outer regular polygon reaching the grid
/// edge and an inner one rotated by half a step, whose radius is
/// `inner_ratio` times the outer radius.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Position;
/// use wordsearch_mask::{Shape, Star};
///
/// let mask = Star::new(5)?.generate(11)?;
/// assert!(mask.is_active(Position::new(0, 5)));
/// assert!(mask.is_active(Position::new(5, 5)));
/// assert!(!mask.is_active(Position::new(0, 0)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    name: &'static str,
    points: usize,
    angle: f64,
    inner_ratio: f64,
    outline: bool,
}

impl Star {
    /// Creates a filled star pointing up.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidShape`] if `points` is below 3.
    pub fn new(points: usize) -> Result<Self, ConfigurationError> {
        if points < 3 {
            return Err(ConfigurationError::InvalidShape {
                shape: NAME,
                reason: "a star needs at least 3 points",
            });
        }
        Ok(Self::preset(NAME, points))
    }

    pub(crate) const fn preset(name: &'static str, points: usize) -> Self {
        Self {
            name,
            points,
            angle: 0.0,
            inner_ratio: DEFAULT_INNER_RATIO,
            outline: false,
        }
    }

    /// Rotates the first tip `angle` degrees clockwise from straight up.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidShape`] if the angle is not finite.
    pub fn with_angle(mut self, angle: f64) -> Result<Self, ConfigurationError> {
        if !angle.is_finite() {
            return Err(ConfigurationError::InvalidShape {
                shape: NAME,
                reason: "the start angle must be finite",
            });
        }
        self.angle = angle;
        Ok(self)
    }

    /// Sets the inner radius as a fraction of the outer radius.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidShape`] unless `0 < ratio < 1`.
    pub fn with_inner_ratio(mut self, ratio: f64) -> Result<Self, ConfigurationError> {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(ConfigurationError::InvalidShape {
                shape: NAME,
                reason: "the inner ratio must be between 0 and 1",
            });
        }
        self.inner_ratio = ratio;
        Ok(self)
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

    /// Returns the number of tips.
    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Returns the outline vertices `(x, y)`, alternating tips and notches.
    #[must_use]
    pub fn vertices(&self, size: usize) -> Vec<Point> {
        let c = raster::grid_center(size);
        let outer = raster::points_on_circle((c, c), c, self.points, self.angle);
        let inner = raster::points_on_circle(
            (c, c),
            c * self.inner_ratio,
            self.points,
            self.angle + 180.0 / raster::coord(self.points),
        );
        outer.zip(inner).flat_map(|(o, i)| [o, i]).collect()
    }
}

impl Shape for Star {
    fn name(&self) -> &'static str {
        self.name
    }

    fn min_size(&self) -> usize {
        MIN_SIZE
    }

    fn rasterize(&self, size: usize) -> Mask {
        let mut mask = Mask::empty(size);
        raster::draw_polygon(&mut mask, &self.vertices(size), self.outline);
        mask
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(self.clone())
    }
}
