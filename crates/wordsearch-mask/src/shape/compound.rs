use super::{BoxedShape, Shape};
use crate::{Combine, Mask};

/// Shapes composed in order.
///
/// Rasterizing starts from an all-inactive mask and merges each part with its
/// [`Combine`] policy, first to last. Order matters: a [`Combine::Subtract`]
/// part only removes cells activated by the parts before it.
///
/// # Examples
///
/// ```
/// use wordsearch_mask::{Combine, CompoundShape, Rectangle, Shape};
///
/// let frame = CompoundShape::new("frame")
///     .with(Rectangle::new(5, 5)?, Combine::Union)
///     .with(Rectangle::new(3, 3)?, Combine::Subtract);
/// assert_eq!(frame.generate(5)?.active_count(), 16);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CompoundShape {
    name: &'static str,
    parts: Vec<(BoxedShape, Combine)>,
}

impl CompoundShape {
    /// Creates a compound shape with no parts.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            parts: Vec::new(),
        }
    }

    /// Appends a part.
    #[must_use]
    pub fn with<S>(mut self, shape: S, op: Combine) -> Self
    where
        S: Shape + 'static,
    {
        self.push(Box::new(shape), op);
        self
    }

    /// Appends a boxed part.
    pub fn push(&mut self, shape: BoxedShape, op: Combine) {
        self.parts.push((shape, op));
    }

    /// Returns the parts in composition order.
    #[must_use]
    pub fn parts(&self) -> &[(BoxedShape, Combine)] {
        &self.parts
    }
}

impl Shape for CompoundShape {
    fn name(&self) -> &'static str {
        self.name
    }

    fn min_size(&self) -> usize {
        self.parts
            .iter()
            .map(|(shape, _)| shape.min_size())
            .max()
            .unwrap_or(0)
    }

    fn rasterize(&self, size: usize) -> Mask {
        let mut mask = Mask::empty(size);
        for (shape, op) in &self.parts {
            mask.combine(&shape.rasterize(size), *op);
        }
        mask
    }

    fn clone_box(&self) -> BoxedShape {
        Box::new(self.clone())
    }
}
