//! Puzzle words and their placement.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use tinyvec::TinyVec;

use crate::{BoundingBox, Direction, DirectionSet, MergeOp, Position, ValidationError};

/// Where a word ended up in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    start: Position,
    direction: Direction,
    cells: TinyVec<[Position; 16]>,
}

impl Placement {
    /// Creates a placement of `len` letters from `start` along `direction`.
    ///
    /// Returns `None` if the line leaves a grid of side `size`.
    #[must_use]
    pub fn new(start: Position, direction: Direction, len: usize, size: usize) -> Option<Self> {
        let cells = (0..len)
            .map(|k| start.step(direction, k, size))
            .collect::<Option<_>>()?;
        Some(Self {
            start,
            direction,
            cells,
        })
    }

    /// Returns the cell holding the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the reading direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the occupied cells, first letter first.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }
}

/// A word to hide in a puzzle.
///
/// The text is trimmed and upper-cased on construction. Two words are equal
/// when their texts are equal, regardless of their settings, so collections of
/// words behave as sets keyed by text.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{DirectionSet, MergeOp, Word};
///
/// let a = Word::new(" cat ")?.with_priority(5);
/// let b = Word::new("CAT")?
///     .with_secret(true)
///     .with_priority(1)
///     .with_directions(DirectionSet::BACKWARD);
/// assert_eq!(a.text(), "CAT");
/// assert_eq!(a, b);
///
/// let merged = a.merge(&b, MergeOp::Union)?;
/// assert_eq!(merged.priority(), 1);
/// assert!(!merged.is_secret());
/// assert_eq!(merged.directions(), DirectionSet::ALL);
/// # Ok::<(), wordsearch_core::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    secret: bool,
    priority: i32,
    directions: DirectionSet,
    placement: Option<Placement>,
}

impl Word {
    /// Priority given to words that do not set one.
    pub const DEFAULT_PRIORITY: i32 = 3;

    /// Creates a visible word with the default priority and forward directions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyWord`] if `text` is empty after trimming.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim().to_uppercase();
        if text.is_empty() {
            return Err(ValidationError::EmptyWord);
        }
        Ok(Self {
            text,
            secret: false,
            priority: Self::DEFAULT_PRIORITY,
            directions: DirectionSet::FORWARD,
            placement: None,
        })
    }

    /// Sets whether the word is left out of the hint list.
    #[must_use]
    pub fn with_secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }

    /// Sets the placement priority. Lower values are placed first.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the directions the word may be placed in.
    #[must_use]
    pub fn with_directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    /// Returns the normalized text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the word has no letters.
    ///
    /// Words built with [`Word::new`] are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the letters in reading order.
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// Returns `true` if the word is hidden from the hint list.
    #[must_use]
    pub fn is_secret(&self) -> bool {
        self.secret
    }

    /// Returns the placement priority.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the directions the word may be placed in.
    #[must_use]
    pub fn directions(&self) -> DirectionSet {
        self.directions
    }

    /// Replaces the allowed directions.
    pub fn set_directions(&mut self, directions: DirectionSet) {
        self.directions = directions;
    }

    /// Replaces each allowed direction by its opposite.
    pub fn flip_directions(&mut self) {
        self.directions = self.directions.flip();
    }

    /// Swaps allowed and forbidden directions.
    pub fn toggle_directions(&mut self) {
        self.directions = self.directions.complement();
    }

    /// Returns the placement, if the word has been placed.
    #[must_use]
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Returns `true` if the word has been placed.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Records where the word was placed.
    ///
    /// # Panics
    ///
    /// Panics if the placement does not cover exactly one cell per letter.
    pub fn set_placement(&mut self, placement: Placement) {
        assert_eq!(
            placement.cells().len(),
            self.len(),
            "placement of {} must cover one cell per letter",
            self.text
        );
        self.placement = Some(placement);
    }

    /// Forgets the placement.
    pub fn clear_placement(&mut self) {
        self.placement = None;
    }

    /// Returns the start position as 1-based `(x, y)` coordinates.
    #[must_use]
    pub fn position_xy(&self) -> Option<(usize, usize)> {
        self.placement
            .as_ref()
            .map(|p| (p.start.col() + 1, p.start.row() + 1))
    }

    /// Returns the start position as 1-based `(x, y)` coordinates relative to `bbox`.
    #[must_use]
    pub fn offset_position_xy(&self, bbox: BoundingBox) -> Option<(usize, usize)> {
        self.placement.as_ref().map(|p| bbox.offset_xy(p.start))
    }

    /// Returns every letter's 1-based `(x, y)` coordinates relative to `bbox`.
    #[must_use]
    pub fn offset_coordinates(&self, bbox: BoundingBox) -> Vec<(usize, usize)> {
        self.placement
            .iter()
            .flat_map(|p| p.cells().iter().map(move |&pos| bbox.offset_xy(pos)))
            .collect()
    }

    /// Describes the placement for an answer key, e.g. `*CAT NE @ (3, 5)`.
    ///
    /// Secret words are prefixed with `*`. Unplaced words yield an empty string.
    #[must_use]
    pub fn key_string(&self, bbox: BoundingBox) -> String {
        let Some(placement) = &self.placement else {
            return String::new();
        };
        let (x, y) = bbox.offset_xy(placement.start);
        format!(
            "{}{} {} @ ({x}, {y})",
            if self.secret { "*" } else { "" },
            self.text,
            placement.direction
        )
    }

    /// Returns `true` if both words have the same text and settings.
    #[must_use]
    pub fn equivalent_settings(&self, other: &Self) -> bool {
        self.text == other.text
            && self.secret == other.secret
            && self.priority == other.priority
            && self.directions == other.directions
    }

    /// Merges two entries for the same word.
    ///
    /// The result is secret only if both are, takes the lower priority, and
    /// combines the direction sets with `op`. The placement is not kept.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MergeMismatch`] if the texts differ.
    pub fn merge(&self, other: &Self, op: MergeOp) -> Result<Self, ValidationError> {
        if self.text != other.text {
            return Err(ValidationError::MergeMismatch {
                left: self.text.clone(),
                right: other.text.clone(),
            });
        }
        Ok(Self {
            text: self.text.clone(),
            secret: self.secret && other.secret,
            priority: self.priority.min(other.priority),
            directions: self.directions.apply(op, other.directions),
            placement: None,
        })
    }

    /// Orders words for placement.
    ///
    /// Lower priority first, then longer words, then visible words before
    /// secret ones, then alphabetically.
    #[must_use]
    pub fn placement_cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.len().cmp(&self.len()))
            .then_with(|| self.secret.cmp(&other.secret))
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}
