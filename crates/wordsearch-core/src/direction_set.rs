//! Sets of reading directions.
//!
//! [`DirectionSet`] is a compact bit set over the eight [`Direction`]s. The named
//! presets ([`DirectionSet::CARDINAL`], [`DirectionSet::FORWARD`], ...) are
//! computed at compile time and never change.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Direction, DirectionSet};
//!
//! let forward = DirectionSet::FORWARD;
//! assert_eq!(forward.complement(), DirectionSet::BACKWARD);
//! assert_eq!(forward.flip(), DirectionSet::BACKWARD);
//!
//! let set: DirectionSet = [Direction::E, Direction::S].into_iter().collect();
//! assert_eq!(set, DirectionSet::CROSSWORD);
//! ```

use std::fmt;

use crate::Direction;

bitflags::bitflags! {
    /// A set of [`Direction`]s.
    ///
    /// Each flag corresponds to the direction of the same name.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirectionSet: u8 {
        /// [`Direction::N`].
        const N = 1 << Direction::N.index();
        /// [`Direction::NE`].
        const NE = 1 << Direction::NE.index();
        /// [`Direction::E`].
        const E = 1 << Direction::E.index();
        /// [`Direction::SE`].
        const SE = 1 << Direction::SE.index();
        /// [`Direction::S`].
        const S = 1 << Direction::S.index();
        /// [`Direction::SW`].
        const SW = 1 << Direction::SW.index();
        /// [`Direction::W`].
        const W = 1 << Direction::W.index();
        /// [`Direction::NW`].
        const NW = 1 << Direction::NW.index();
    }
}

/// How two direction sets are combined when merging duplicate words.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeOp {
    /// Keep directions allowed by either set.
    #[default]
    Union,
    /// Keep directions allowed by both sets.
    Intersect,
    /// Keep directions allowed by exactly one set.
    SymmetricDifference,
}

impl DirectionSet {
    /// Every direction.
    pub const ALL: Self = Self::all();
    /// No direction.
    pub const NONE: Self = Self::empty();
    /// N, E, S and W.
    pub const CARDINAL: Self = Self::N.union(Self::E).union(Self::S).union(Self::W);
    /// NE, SE, SW and NW.
    pub const DIAGONAL: Self = Self::NE.union(Self::SE).union(Self::SW).union(Self::NW);
    /// NE, E, SE and S: the directions a reader scans naturally.
    pub const FORWARD: Self = Self::NE.union(Self::E).union(Self::SE).union(Self::S);
    /// The complement of [`DirectionSet::FORWARD`].
    pub const BACKWARD: Self = Self::FORWARD.complement();
    /// Directions that decrease the column.
    pub const LEFTWARD: Self = Self::SW.union(Self::W).union(Self::NW);
    /// Directions that increase the column.
    pub const RIGHTWARD: Self = Self::NE.union(Self::E).union(Self::SE);
    /// Directions that decrease the row.
    pub const UPWARD: Self = Self::NW.union(Self::N).union(Self::NE);
    /// Directions that increase the row.
    pub const DOWNWARD: Self = Self::SE.union(Self::S).union(Self::SW);
    /// E and S only, as in a crossword.
    pub const CROSSWORD: Self = Self::CARDINAL.intersection(Self::FORWARD);

    /// Returns the single-element set for `direction`.
    #[must_use]
    pub const fn from_direction(direction: Direction) -> Self {
        Self::from_bits_retain(1 << direction.index())
    }

    /// Returns `true` if `direction` is a member of this set.
    #[must_use]
    pub const fn contains_direction(self, direction: Direction) -> bool {
        self.contains(Self::from_direction(direction))
    }

    /// Adds `direction` to this set.
    pub fn insert_direction(&mut self, direction: Direction) {
        self.insert(Self::from_direction(direction));
    }

    /// Removes `direction` from this set.
    pub fn remove_direction(&mut self, direction: Direction) {
        self.remove(Self::from_direction(direction));
    }

    /// Replaces every member by its opposite direction.
    #[must_use]
    pub fn flip(self) -> Self {
        self.directions().map(Direction::opposite).collect()
    }

    /// Combines this set with `other` according to `op`.
    #[must_use]
    pub const fn apply(self, op: MergeOp, other: Self) -> Self {
        match op {
            MergeOp::Union => self.union(other),
            MergeOp::Intersect => self.intersection(other),
            MergeOp::SymmetricDifference => self.symmetric_difference(other),
        }
    }

    /// Returns the number of directions in this set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Iterates over the member directions in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> + Clone {
        Direction::ALL
            .into_iter()
            .filter(move |d| self.contains_direction(*d))
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        Self::from_direction(direction)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut set = Self::NONE;
        set.extend(iter);
        set
    }
}

impl Extend<Direction> for DirectionSet {
    fn extend<T: IntoIterator<Item = Direction>>(&mut self, iter: T) {
        for d in iter {
            self.insert_direction(d);
        }
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for d in self.directions() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            f.write_str(d.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn any_set() -> impl Strategy<Value = DirectionSet> {
        any::<u8>().prop_map(DirectionSet::from_bits_retain)
    }

    #[test]
    fn test_presets_partition_the_universe() {
        assert!((DirectionSet::CARDINAL & DirectionSet::DIAGONAL).is_empty());
        assert_eq!(
            DirectionSet::CARDINAL | DirectionSet::DIAGONAL,
            DirectionSet::ALL
        );
        assert_eq!(DirectionSet::ALL.len(), 8);
        assert!((DirectionSet::FORWARD & DirectionSet::BACKWARD).is_empty());
        assert_eq!(
            DirectionSet::FORWARD | DirectionSet::BACKWARD,
            DirectionSet::ALL
        );
        assert_eq!(DirectionSet::NONE.len(), 0);
    }

    #[test]
    fn test_presets_match_direction_predicates() {
        let check = |set: DirectionSet, pred: fn(Direction) -> bool| {
            for d in Direction::ALL {
                assert_eq!(set.contains_direction(d), pred(d), "{d}");
            }
        };
        check(DirectionSet::CARDINAL, Direction::is_cardinal);
        check(DirectionSet::DIAGONAL, Direction::is_diagonal);
        check(DirectionSet::FORWARD, Direction::is_forward);
        check(DirectionSet::BACKWARD, Direction::is_backward);
        check(DirectionSet::LEFTWARD, Direction::goes_left);
        check(DirectionSet::RIGHTWARD, Direction::goes_right);
        check(DirectionSet::UPWARD, Direction::goes_up);
        check(DirectionSet::DOWNWARD, Direction::goes_down);
    }

    #[test]
    fn test_crossword_is_east_and_south() {
        let dirs: Vec<_> = DirectionSet::CROSSWORD.directions().collect();
        assert_eq!(dirs, vec![Direction::E, Direction::S]);
    }

    #[test]
    fn test_complement_and_flip() {
        assert_eq!(DirectionSet::ALL.complement(), DirectionSet::NONE);
        assert_eq!(DirectionSet::FORWARD.flip(), DirectionSet::BACKWARD);
        assert_eq!(DirectionSet::NONE.flip(), DirectionSet::NONE);

        let mut set = DirectionSet::NONE;
        set = set.complement().flip();
        assert_eq!(set, DirectionSet::ALL);
    }

    #[test]
    fn test_apply_merge_ops() {
        let a = DirectionSet::N | DirectionSet::E;
        let b = DirectionSet::E | DirectionSet::S;
        assert_eq!(
            a.apply(MergeOp::Union, b),
            DirectionSet::N | DirectionSet::E | DirectionSet::S
        );
        assert_eq!(a.apply(MergeOp::Intersect, b), DirectionSet::E);
        assert_eq!(
            a.apply(MergeOp::SymmetricDifference, b),
            DirectionSet::N | DirectionSet::S
        );
    }

    #[test]
    fn test_insert_remove_direction() {
        let mut set = DirectionSet::NONE;
        set.insert_direction(Direction::SW);
        assert!(set.contains_direction(Direction::SW));
        assert_eq!(set.len(), 1);
        set.remove_direction(Direction::SW);
        assert!(set.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(DirectionSet::FORWARD.to_string(), "NE, E, SE, S");
        assert_eq!(DirectionSet::NONE.to_string(), "");
    }

    proptest! {
        #[test]
        fn complement_is_an_involution(set in any_set()) {
            prop_assert_eq!(set.complement().complement(), set);
            prop_assert_eq!(set.len() + set.complement().len(), 8);
        }

        #[test]
        fn flip_is_an_involution(set in any_set()) {
            prop_assert_eq!(set.flip().flip(), set);
            prop_assert_eq!(set.flip().len(), set.len());
        }

        #[test]
        fn directions_round_trip(set in any_set()) {
            let rebuilt: DirectionSet = set.directions().collect();
            prop_assert_eq!(rebuilt, set);
        }
    }
}
