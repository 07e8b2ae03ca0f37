//! Shapes that rasterize into masks.
//!
//! Each shape implements the [`Shape`] trait. Primitive shapes compute their
//! cells directly from the grid size; [`CompoundShape`] composes other shapes
//! in order with a [`Combine`](crate::Combine) policy per step.

use std::fmt::Debug;

use wordsearch_core::ValidationError;

pub use self::{
    bitmap::Bitmap,
    compound::CompoundShape,
    ellipse::Ellipse,
    polygon::RegularPolygon,
    rectangle::Rectangle,
    star::Star,
};
use crate::Mask;

mod bitmap;
mod compound;
mod ellipse;
mod polygon;
mod raster;
mod rectangle;
mod star;

/// Which cells of a closed shape are activated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fill {
    /// Only the outline.
    Boundary,
    /// The outline and everything inside it.
    #[default]
    Filled,
    /// The outline and a band of the given thickness inside it.
    Ring {
        /// Width of the band, in cells.
        thickness: usize,
    },
}

/// A shape that can be turned into a [`Mask`] for a given grid size.
pub trait Shape: Debug + Send + Sync {
    /// Returns the name of the shape.
    fn name(&self) -> &'static str;

    /// Returns the smallest grid size the shape can be drawn on.
    fn min_size(&self) -> usize;

    /// Draws the shape on a `size × size` grid without checking [`Shape::min_size`].
    fn rasterize(&self, size: usize) -> Mask;

    /// Returns a boxed clone of the shape.
    fn clone_box(&self) -> BoxedShape;

    /// Draws the shape on a `size × size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MaskTooSmall`] if `size` is below
    /// [`Shape::min_size`]. The size is never clamped.
    fn generate(&self, size: usize) -> Result<Mask, ValidationError> {
        let min = self.min_size();
        if size < min {
            return Err(ValidationError::MaskTooSmall {
                shape: self.name(),
                size,
                min,
            });
        }
        let mask = self.rasterize(size);
        log::trace!(
            "rasterized {} at size {size}: {} active cells",
            self.name(),
            mask.active_count()
        );
        Ok(mask)
    }
}

/// A boxed shape.
pub type BoxedShape = Box<dyn Shape>;

impl Clone for BoxedShape {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
