//! The result of a generation.

use std::fmt;

use wordsearch_core::{BoundingBox, Grid, Position, Word, WordList};

use crate::{Cell, PuzzleSeed};

/// Whether every word found a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Outcome {
    /// Every word was placed.
    Success,
    /// Some words were left out under the lenient policy.
    Failure,
}

/// A filled word-search grid together with its placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed the puzzle was generated from.
    pub seed: PuzzleSeed,
    /// The letters, filler and blockers.
    pub grid: Grid<Cell>,
    /// The words, with placements for the ones that were placed.
    pub words: WordList,
    /// Texts of the words that could not be placed, in placement order.
    pub unplaced: Vec<String>,
    /// The smallest rectangle covering the mask's active cells.
    pub bounding_box: BoundingBox,
}

impl GeneratedPuzzle {
    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns [`Outcome::Failure`] if any word is unplaced.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.unplaced.is_empty() {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }

    /// Returns `true` if every word was placed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome().is_success()
    }

    /// Returns the letter at `pos`, or `None` for blockers and positions outside the grid.
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.grid.get(pos).and_then(|cell| cell.letter())
    }

    /// Iterates over the placed words.
    pub fn placed_words(&self) -> impl Iterator<Item = &Word> {
        self.words.placed()
    }

    /// Iterates over the words shown in the hint list.
    pub fn hidden_words(&self) -> impl Iterator<Item = &Word> {
        self.words.hidden()
    }

    /// Iterates over the secret words.
    pub fn secret_words(&self) -> impl Iterator<Item = &Word> {
        self.words.secret()
    }

    /// Iterates over the rows cropped to the bounding box.
    pub fn rows_in_bounds(&self) -> impl Iterator<Item = &[Cell]> {
        let top_left = self.bounding_box.top_left();
        let bottom_right = self.bounding_box.bottom_right();
        self.grid
            .rows()
            .skip(top_left.row())
            .take(self.bounding_box.height())
            .map(move |row| &row[top_left.col()..=bottom_right.col()])
    }
}

impl fmt::Display for GeneratedPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows_in_bounds().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
