//! Masks that restrict a word-search grid to a shape.
//!
//! A [`Mask`] marks each cell of a square grid as active or inactive. Words
//! and filler letters only go on active cells; inactive cells are rendered as
//! blockers.
//!
//! Masks are produced by [`Shape`]s:
//!
//! - **Primitives** compute their cells from the grid size: [`Rectangle`],
//!   [`RegularPolygon`], [`Ellipse`], [`Star`] and [`Bitmap`].
//! - **Compound shapes** merge parts in order: [`CompoundShape`], and the
//!   built-in [`Donut`] and [`Tree`].
//! - The [`builtin`] module names the shapes offered to users, looked up with
//!   [`shape_by_name`].
//!
//! Asking for a shape on a grid below its [`Shape::min_size`] fails with
//! [`ValidationError::MaskTooSmall`](wordsearch_core::ValidationError::MaskTooSmall).
//!
//! # Examples
//!
//! ```
//! use wordsearch_mask::{Combine, Shape, shape_by_name};
//!
//! let mut mask = shape_by_name("circle")?.generate(9)?;
//! let star = shape_by_name("star5")?.generate(9)?;
//! mask.combine(&star, Combine::Subtract);
//! assert!(mask.active_count() > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builtin;
pub mod mask;
pub mod shape;

// Re-export commonly used types
pub use self::{
    builtin::{Donut, Tree, builtin_shapes, shape_by_name},
    mask::{Combine, Mask, ParseMaskError},
    shape::{
        Bitmap, BoxedShape, CompoundShape, Ellipse, Fill, RegularPolygon, Rectangle, Shape, Star,
    },
};
