//! An insertion-ordered set of words keyed by text.

use crate::{MergeOp, Word};

/// Words keyed by text, kept in insertion order.
///
/// Inserting a word whose text is already present merges the two entries with
/// [`Word::merge`] instead of adding a duplicate.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{DirectionSet, MergeOp, Word, WordList};
///
/// let mut words = WordList::new();
/// words.insert(Word::new("cat")?, MergeOp::Union);
/// words.insert(Word::new("dog")?, MergeOp::Union);
/// words.insert(
///     Word::new("CAT")?.with_directions(DirectionSet::BACKWARD),
///     MergeOp::Union,
/// );
///
/// assert_eq!(words.len(), 2);
/// assert_eq!(words.get("cat").unwrap().directions(), DirectionSet::ALL);
/// # Ok::<(), wordsearch_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word, merging it with an existing entry of the same text.
    ///
    /// Returns `true` if the word was new.
    pub fn insert(&mut self, word: Word, op: MergeOp) -> bool {
        match self.words.iter_mut().find(|w| **w == word) {
            Some(existing) => {
                // Texts are equal, so the merge cannot fail.
                if let Ok(merged) = existing.merge(&word, op) {
                    *existing = merged;
                }
                false
            }
            None => {
                self.words.push(word);
                true
            }
        }
    }

    /// Returns the entry for `text`, compared after normalization.
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let text = text.trim().to_uppercase();
        self.words.iter().find(|w| w.text() == text)
    }

    /// Returns a mutable entry for `text`, compared after normalization.
    #[must_use]
    pub fn get_mut(&mut self, text: &str) -> Option<&mut Word> {
        let text = text.trim().to_uppercase();
        self.words.iter_mut().find(|w| w.text() == text)
    }

    /// Returns `true` if an entry for `text` exists.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Removes and returns the entry for `text`.
    pub fn remove(&mut self, text: &str) -> Option<Word> {
        let text = text.trim().to_uppercase();
        let index = self.words.iter().position(|w| w.text() == text)?;
        Some(self.words.remove(index))
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Iterates mutably over the words in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Word> {
        self.words.iter_mut()
    }

    /// Iterates over the words shown in the hint list.
    pub fn hidden(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| !w.is_secret())
    }

    /// Iterates over the secret words.
    pub fn secret(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| w.is_secret())
    }

    /// Iterates over the words that have a placement.
    pub fn placed(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| w.is_placed())
    }

    /// Iterates over the words without a placement.
    pub fn unplaced(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| !w.is_placed())
    }

    /// Forgets every placement.
    pub fn clear_placements(&mut self) {
        for word in &mut self.words {
            word.clear_placement();
        }
    }

    /// Returns the words sorted by [`Word::placement_cmp`].
    #[must_use]
    pub fn placement_order(&self) -> Vec<&Word> {
        let mut words: Vec<_> = self.words.iter().collect();
        words.sort_by(|a, b| a.placement_cmp(b));
        words
    }

    /// Returns the texts in insertion order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<Word> for WordList {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word, MergeOp::Union);
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for WordList {
    type Item = Word;
    type IntoIter = std::vec::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, DirectionSet, Placement, Position};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn test_insert_merges_duplicates() {
        let mut list = WordList::new();
        assert!(list.insert(word("one").with_secret(true), MergeOp::Union));
        assert!(list.insert(word("two"), MergeOp::Union));
        assert!(!list.insert(
            word("ONE")
                .with_secret(true)
                .with_priority(1)
                .with_directions(DirectionSet::BACKWARD),
            MergeOp::Union,
        ));

        assert_eq!(list.texts(), vec!["ONE", "TWO"]);
        let one = list.get(" one ").unwrap();
        assert!(one.is_secret());
        assert_eq!(one.priority(), 1);
        assert_eq!(one.directions(), DirectionSet::ALL);
    }

    #[test]
    fn test_insert_with_intersection() {
        let mut list = WordList::new();
        list.insert(word("a").with_directions(DirectionSet::CARDINAL), MergeOp::Union);
        list.insert(
            word("a").with_directions(DirectionSet::FORWARD),
            MergeOp::Intersect,
        );
        assert_eq!(list.get("a").unwrap().directions(), DirectionSet::CROSSWORD);
    }

    #[test]
    fn test_remove_and_contains() {
        let mut list: WordList = [word("x"), word("y"), word("z")].into_iter().collect();
        assert!(list.contains("Y"));
        assert_eq!(list.remove("y").map(|w| w.text().to_owned()), Some("Y".to_owned()));
        assert!(!list.contains("y"));
        assert!(list.remove("y").is_none());
        assert_eq!(list.texts(), vec!["X", "Z"]);
    }

    #[test]
    fn test_filters() {
        let mut list: WordList = [word("abc"), word("def").with_secret(true)]
            .into_iter()
            .collect();
        let placement = Placement::new(Position::new(0, 0), Direction::E, 3, 5).unwrap();
        list.get_mut("abc").unwrap().set_placement(placement);

        assert_eq!(list.hidden().map(Word::text).collect::<Vec<_>>(), vec!["ABC"]);
        assert_eq!(list.secret().map(Word::text).collect::<Vec<_>>(), vec!["DEF"]);
        assert_eq!(list.placed().count(), 1);
        assert_eq!(list.unplaced().count(), 1);

        list.clear_placements();
        assert_eq!(list.placed().count(), 0);
    }

    #[test]
    fn test_placement_order() {
        let list: WordList = [
            word("short").with_priority(3),
            word("longer").with_priority(3),
            word("late").with_priority(4),
            word("early").with_priority(1),
        ]
        .into_iter()
        .collect();
        let order: Vec<_> = list.placement_order().into_iter().map(Word::text).collect();
        assert_eq!(order, vec!["EARLY", "LONGER", "SHORT", "LATE"]);
    }
}
