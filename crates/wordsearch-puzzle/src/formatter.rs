//! Rendering generated puzzles.

use std::fmt::{self, Debug, Write};

use wordsearch_core::{DirectionSet, Word};
use wordsearch_generator::{Cell, GeneratedPuzzle};

/// Turns a generated puzzle into presentable output.
pub trait Formatter: Debug + Send + Sync {
    /// Renders `puzzle`.
    ///
    /// In solution mode the placed words must be distinguishable from filler.
    fn format(&self, puzzle: &GeneratedPuzzle, solution: bool) -> String;
}

/// Plain-text output for terminals.
///
/// The grid is cropped to the mask's bounding box and followed by the hint
/// list, the allowed directions and, optionally, the answer key. In solution
/// mode filler letters are lower-cased so the words stand out.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Word, WordList};
/// use wordsearch_generator::{PuzzleGenerator, PuzzleSeed};
/// use wordsearch_mask::Mask;
/// use wordsearch_puzzle::{Formatter as _, TextFormatter};
///
/// let words: WordList = [Word::new("cat")?].into_iter().collect();
/// let puzzle = PuzzleGenerator::default().generate_with_seed(
///     &words,
///     &Mask::full(5),
///     PuzzleSeed::from_phrase("cat"),
/// )?;
///
/// let text = TextFormatter::default().format(&puzzle, false);
/// assert!(text.contains("Find these words: CAT"));
/// assert!(text.contains("Answer Key: CAT "));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatter {
    /// Whether to print the answer key under the hints.
    pub answer_key: bool,
}

impl TextFormatter {
    const TITLE: &str = "WORD SEARCH";

    /// Creates a formatter that prints the answer key.
    #[must_use]
    pub const fn new() -> Self {
        Self { answer_key: true }
    }

    /// Sets whether to print the answer key.
    #[must_use]
    pub const fn with_answer_key(mut self, answer_key: bool) -> Self {
        self.answer_key = answer_key;
        self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter {
    /// Writes the rendering of `puzzle` into `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` fails to accept the text.
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        puzzle: &GeneratedPuzzle,
        solution: bool,
    ) -> fmt::Result {
        let rule = "-".repeat(Self::TITLE.len());
        writeln!(out, "{rule}\n{}\n{rule}", Self::TITLE)?;

        for row in puzzle.rows_in_bounds() {
            let line: Vec<String> = row
                .iter()
                .map(|&cell| match cell {
                    Cell::Filler(c) if solution => c.to_lowercase().to_string(),
                    cell => cell.glyph().to_string(),
                })
                .collect();
            writeln!(out, "{}", line.join(" "))?;
        }

        let mut hints: Vec<&Word> = puzzle.hidden_words().filter(|w| w.is_placed()).collect();
        hints.sort_by(|a, b| a.text().cmp(b.text()));
        let hint_texts: Vec<&str> = hints.iter().map(|w| w.text()).collect();
        write!(out, "\nFind these words: {}", hint_texts.join(", "))?;

        let directions: DirectionSet = hints
            .iter()
            .fold(DirectionSet::NONE, |acc, w| acc | w.directions());
        if !directions.is_empty() {
            write!(out, "\n* Words can go {directions}.")?;
        }

        if self.answer_key {
            let mut placed: Vec<&Word> = puzzle.placed_words().collect();
            placed.sort_by(|a, b| a.text().cmp(b.text()));
            let keys: Vec<String> = placed
                .iter()
                .map(|w| w.key_string(puzzle.bounding_box))
                .collect();
            write!(out, "\n\nAnswer Key: {}", keys.join(", "))?;
        }

        Ok(())
    }
}

impl Formatter for TextFormatter {
    fn format(&self, puzzle: &GeneratedPuzzle, solution: bool) -> String {
        let mut out = String::new();
        // writing into a `String` cannot fail
        self.write_to(&mut out, puzzle, solution)
            .map(|()| out)
            .unwrap_or_default()
    }
}
