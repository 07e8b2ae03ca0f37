//! Named built-in shapes.
//!
//! | Name | Construction |
//! |---|---|
//! | `circle` | Ellipse spanning the grid |
//! | `diamond` | 4-gon starting at 90° |
//! | `donut` | [`Donut`]: ellipse minus a centered hole |
//! | `hexagon` | 6-gon starting at 90° |
//! | `octagon` | 8-gon starting at 22.5° |
//! | `pentagon` | 5-gon pointing up |
//! | `star5` | 5-point [`Star`] |
//! | `star6` | Up triangle ∪ down triangle |
//! | `star8` | 8-point [`Star`] |
//! | `tree` | [`Tree`]: triangle top ∪ trunk sized from the top |
//! | `triangle` | 3-gon pointing up |

use wordsearch_core::ConfigurationError;

use crate::{
    BoxedShape, Combine, CompoundShape, Ellipse, Mask, Rectangle, RegularPolygon, Shape, Star,
};

/// A ring: a centered circle with a smaller centered circular hole.
///
/// The ring spans the grid (one less on even sizes so it stays centered) and
/// the hole is `⌊(size - 2)² / (3 · (size - 1))⌋` cells across, bumped to the
/// next odd number. The ring is drawn first and the hole subtracted from it.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Position;
/// use wordsearch_mask::{Donut, Shape};
///
/// assert_eq!(Donut::dimensions(11), (11, 3));
///
/// let mask = Donut.generate(11)?;
/// assert!(!mask.is_active(Position::new(5, 5)));
/// assert!(mask.is_active(Position::new(5, 1)));
/// # Ok::<(), wordsearch_core::ValidationError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Donut;

impl Donut {
    /// The smallest grid a donut can be drawn on.
    pub const MIN_SIZE: usize = 7;

    /// Returns the `(ring, hole)` diameters for a grid of side `size`.
    #[must_use]
    pub fn dimensions(size: usize) -> (usize, usize) {
        let ring = if size % 2 == 0 {
            size.saturating_sub(1)
        } else {
            size
        };
        let span = size.saturating_sub(2);
        let mut hole = span * span / (3 * size.saturating_sub(1)).max(1);
        if hole % 2 == 0 {
            hole += 1;
        }
        (ring, hole)
    }

    fn layers(size: usize) -> CompoundShape {
        let (ring, hole) = Self::dimensions(size);
        CompoundShape::new("donut")
            .with(Ellipse::sized(ring, ring), Combine::Union)
            .with(Ellipse::sized(hole, hole), Combine::Subtract)
    }
}

impl Shape for Donut {
    fn name(&self) -> &'static str {
        "donut"
    }

    fn min_size(&self) -> usize {
        Self::MIN_SIZE
    }

    fn rasterize(&self, size: usize) -> Mask {
        Self::layers(size).rasterize(size)
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(*self)
    }
}

/// A triangle top on a centered rectangular trunk.
///
/// The trunk is derived from the rasterized top: its width is a quarter of the
/// top's width, made odd, and it runs from the top's bottom row to the bottom
/// of the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tree;

impl Tree {
    /// The smallest grid a tree can be drawn on.
    pub const MIN_SIZE: usize = 7;

    /// Returns the trunk that goes under `top`.
    ///
    /// Returns `None` if the top has no active cells.
    #[must_use]
    pub fn trunk(top: &Mask) -> Option<Rectangle> {
        let size = top.size();
        let bounds = top.bounding_box()?;
        let quarter = bounds.width() / 4;
        let width = if quarter % 2 == 0 { quarter + 1 } else { quarter };
        let x = (size / 2)
            .saturating_sub(width / 2)
            .saturating_sub(usize::from(size % 2 == 0));
        let y = bounds.bottom_right().row();
        Some(Rectangle::sized(width, size - y).with_origin(x, y))
    }
}

impl Shape for Tree {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn min_size(&self) -> usize {
        Self::MIN_SIZE
    }

    fn rasterize(&self, size: usize) -> Mask {
        let mut mask = triangle().rasterize(size);
        if let Some(trunk) = Self::trunk(&mask) {
            mask.combine(&trunk.rasterize(size), Combine::Union);
        }
        mask
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(*self)
    }
}

/// A circle spanning the grid.
#[must_use]
pub fn circle() -> Ellipse {
    Ellipse::fitted().named("circle")
}

/// A square standing on one corner.
#[must_use]
pub fn diamond() -> RegularPolygon {
    RegularPolygon::preset("diamond", 4, 90.0)
}

/// A hexagon with flat top and bottom edges.
#[must_use]
pub fn hexagon() -> RegularPolygon {
    RegularPolygon::preset("hexagon", 6, 90.0)
}

/// An octagon with axis-aligned edges.
#[must_use]
pub fn octagon() -> RegularPolygon {
    RegularPolygon::preset("octagon", 8, 22.5)
}

/// A pentagon pointing up.
#[must_use]
pub fn pentagon() -> RegularPolygon {
    RegularPolygon::preset("pentagon", 5, 0.0)
}

/// A triangle pointing up.
#[must_use]
pub fn triangle() -> RegularPolygon {
    RegularPolygon::preset("triangle", 3, 0.0)
}

/// A five-point star.
#[must_use]
pub fn star5() -> Star {
    Star::preset("star5", 5)
}

/// A six-point star made of two opposed triangles.
#[must_use]
pub fn star6() -> CompoundShape {
    CompoundShape::new("star6")
        .with(triangle(), Combine::Union)
        .with(RegularPolygon::preset("triangle", 3, 180.0), Combine::Union)
}

/// An eight-point star.
#[must_use]
pub fn star8() -> Star {
    Star::preset("star8", 8)
}

/// Returns every built-in shape, sorted by name.
#[must_use]
pub fn builtin_shapes() -> Vec<BoxedShape> {
    vec![
        Box::new(circle()),
        Box::new(diamond()),
        Box::new(Donut),
        Box::new(hexagon()),
        Box::new(octagon()),
        Box::new(pentagon()),
        Box::new(star5()),
        Box::new(star6()),
        Box::new(star8()),
        Box::new(Tree),
        Box::new(triangle()),
    ]
}

/// Looks up a built-in shape by name, ignoring case.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownShape`] if no built-in shape has this name.
///
/// # Examples
///
/// ```
/// use wordsearch_mask::{Shape, shape_by_name};
///
/// assert_eq!(shape_by_name("Hexagon")?.name(), "hexagon");
/// assert!(shape_by_name("blob").is_err());
/// # Ok::<(), wordsearch_core::ConfigurationError>(())
/// ```
pub fn shape_by_name(name: &str) -> Result<BoxedShape, ConfigurationError> {
    builtin_shapes()
        .into_iter()
        .find(|shape| shape.name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ConfigurationError::UnknownShape {
            name: name.to_owned(),
        })
}
