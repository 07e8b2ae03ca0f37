//! The placement engine.

use rand::prelude::*;
use rand_pcg::Pcg64;
use wordsearch_core::{
    ConfigurationError, Direction, DirectionSet, Grid, Placement, Position, ValidationError, Word,
    WordList,
};
use wordsearch_mask::Mask;

use crate::{
    Cell, ExhaustionPolicy, GenerateError, GeneratedPuzzle, GeneratorConfig, PlacementFailure,
    PuzzleSeed,
};

/// Lays out words on a masked grid and fills the rest with random letters.
///
/// Words are attempted in [`Word::placement_cmp`] order. For each word the
/// generator repeatedly draws a direction from the word's allowed set and a
/// start cell from the mask's active cells, and keeps the first candidate
/// where every letter lands on an active cell that is empty or already holds
/// the same letter. Earlier placements are never undone.
///
/// Generation is single-threaded and owns all of its state, so independent
/// attempts with different seeds can run in parallel.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Word, WordList};
/// use wordsearch_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
/// use wordsearch_mask::Mask;
///
/// let words: WordList = [Word::new("cat")?, Word::new("dog")?].into_iter().collect();
/// let generator = PuzzleGenerator::new(GeneratorConfig::default());
/// let seed = PuzzleSeed::from_phrase("example");
///
/// let puzzle = generator.generate_with_seed(&words, &Mask::full(10), seed)?;
/// assert!(puzzle.is_success());
/// assert_eq!(puzzle, generator.generate_with_seed(&words, &Mask::full(10), seed)?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the given settings.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the settings.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate(
        &self,
        words: &WordList,
        mask: &Mask,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(words, mask, PuzzleSeed::random())
    }

    /// Generates a puzzle from `seed`.
    ///
    /// The grid has the mask's size. Placements already stored in `words` are
    /// ignored.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyMask`] if the mask has no active cell.
    /// - [`ConfigurationError::EmptyDirections`] if a word allows no direction.
    /// - [`PlacementFailure`] under [`ExhaustionPolicy::Strict`] if a word cannot
    ///   be placed. Words that have no fitting line at all are reported together
    ///   before any random draw.
    pub fn generate_with_seed(
        &self,
        words: &WordList,
        mask: &Mask,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let size = mask.size();
        let bounding_box = mask.bounding_box().ok_or(ValidationError::EmptyMask)?;
        if let Some(word) = words.iter().find(|w| w.directions().is_empty()) {
            return Err(ConfigurationError::EmptyDirections {
                word: word.text().to_owned(),
            }
            .into());
        }
        log::debug!(
            "generating {size}x{size} puzzle with {} words (seed {seed})",
            words.len()
        );

        let mut words = words.clone();
        words.clear_placements();
        let order: Vec<String> = words
            .placement_order()
            .into_iter()
            .map(|w| w.text().to_owned())
            .collect();

        let unfit: Vec<String> = words
            .placement_order()
            .into_iter()
            .filter(|w| !has_fitting_line(w, mask))
            .map(|w| w.text().to_owned())
            .collect();
        if !unfit.is_empty() && self.config.policy.is_strict() {
            log::debug!("no line fits: {}", unfit.join(", "));
            return Err(PlacementFailure::new(unfit).into());
        }

        let mut rng = seed.rng();
        let mut grid = Grid::from_fn(size, |pos| {
            if mask.is_active(pos) {
                Cell::Empty
            } else {
                Cell::Inactive
            }
        });
        let active: Vec<Position> = mask.active_cells().collect();
        let mut unplaced = Vec::new();

        for text in order {
            let Some(word) = words.get_mut(&text) else {
                continue;
            };
            let placement = if unfit.contains(&text) {
                None
            } else {
                self.try_place(word, &grid, &active, &mut rng)
            };
            let Some(placement) = placement else {
                match self.config.policy {
                    ExhaustionPolicy::Strict => {
                        return Err(PlacementFailure::new(vec![text]).into());
                    }
                    ExhaustionPolicy::Lenient => {
                        log::warn!("could not place {text}, leaving it out");
                        unplaced.push(text);
                        continue;
                    }
                }
            };
            for (&pos, letter) in placement.cells().iter().zip(text.chars()) {
                grid[pos] = Cell::Placed(letter);
            }
            word.set_placement(placement);
        }

        self.fill(&mut grid, &words, &mut rng);
        log::debug!(
            "generated puzzle: {} placed, {} unplaced",
            words.placed().count(),
            unplaced.len()
        );

        Ok(GeneratedPuzzle {
            seed,
            grid,
            words,
            unplaced,
            bounding_box,
        })
    }

    fn try_place(
        &self,
        word: &Word,
        grid: &Grid<Cell>,
        active: &[Position],
        rng: &mut Pcg64,
    ) -> Option<Placement> {
        let letters = word.letters();
        let directions: Vec<Direction> = word.directions().directions().collect();
        for attempt in 1..=self.config.max_fit_tries {
            let direction = *directions.choose(rng)?;
            let start = *active.choose(rng)?;
            if let Some(placement) = fit(grid, &letters, start, direction) {
                log::trace!(
                    "placed {word} at {start} {direction} after {attempt} attempt(s)"
                );
                return Some(placement);
            }
        }
        log::trace!(
            "gave up on {word} after {} attempts",
            self.config.max_fit_tries
        );
        None
    }

    fn fill(&self, grid: &mut Grid<Cell>, words: &WordList, rng: &mut Pcg64) {
        let placed: Vec<Vec<char>> = if self.config.avoid_duplicate_words {
            words.placed().map(Word::letters).collect()
        } else {
            Vec::new()
        };
        let empty: Vec<Position> = grid
            .iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect();
        let mut letters = self.config.alphabet.letters().to_vec();
        for pos in empty {
            let letter = if placed.is_empty() {
                letters.choose(rng).copied()
            } else {
                letters.shuffle(rng);
                letters
                    .iter()
                    .copied()
                    .find(|&c| !completes_word(grid, pos, c, &placed))
                    .or_else(|| letters.first().copied())
            };
            let Some(letter) = letter else {
                return;
            };
            grid[pos] = Cell::Filler(letter);
        }
    }
}

/// Checks whether `letters` can go from `start` along `direction`.
///
/// Every cell must be active and either empty or already hold the same letter.
fn fit(
    grid: &Grid<Cell>,
    letters: &[char],
    start: Position,
    direction: Direction,
) -> Option<Placement> {
    let placement = Placement::new(start, direction, letters.len(), grid.size())?;
    let legal = placement
        .cells()
        .iter()
        .zip(letters)
        .all(|(&pos, &letter)| match grid[pos] {
            Cell::Empty => true,
            Cell::Placed(c) => c == letter,
            Cell::Filler(_) | Cell::Inactive => false,
        });
    legal.then_some(placement)
}

/// Returns `true` if at least one line of active cells can hold the word,
/// ignoring other words.
fn has_fitting_line(word: &Word, mask: &Mask) -> bool {
    let size = mask.size();
    let len = word.len();
    if len > size {
        return false;
    }
    let directions: DirectionSet = word.directions();
    mask.active_cells().any(|start| {
        directions.directions().any(|direction| {
            Placement::new(start, direction, len, size)
                .is_some_and(|p| p.cells().iter().all(|&pos| mask.is_active(pos)))
        })
    })
}

/// Returns `true` if writing `letter` at `pos` would spell out one of `words`
/// through `pos` in any direction.
fn completes_word(grid: &Grid<Cell>, pos: Position, letter: char, words: &[Vec<char>]) -> bool {
    let size = grid.size();
    words.iter().any(|word| {
        word.iter()
            .enumerate()
            .filter(|&(_, &c)| c == letter)
            .any(|(i, _)| {
                Direction::ALL.iter().any(|&direction| {
                    let Some(start) = pos.step(direction.opposite(), i, size) else {
                        return false;
                    };
                    word.iter().enumerate().all(|(k, &expected)| {
                        k == i
                            || start
                                .step(direction, k, size)
                                .and_then(|p| grid[p].letter())
                                .is_some_and(|c| c == expected)
                    })
                })
            })
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use wordsearch_mask::{Donut, Shape};

    use super::*;
    use crate::Alphabet;

    const SEED: &str = "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3";

    fn seed() -> PuzzleSeed {
        SEED.parse().unwrap()
    }

    fn words(texts: &[&str]) -> WordList {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn lenient() -> PuzzleGenerator {
        PuzzleGenerator::new(GeneratorConfig::default().with_policy(ExhaustionPolicy::Lenient))
    }

    #[test]
    fn test_two_words_on_full_grid() {
        let generator = PuzzleGenerator::default();
        let puzzle = generator
            .generate_with_seed(&words(&["CAT", "DOG"]), &Mask::full(10), seed())
            .unwrap();

        assert!(puzzle.is_success());
        assert_eq!(puzzle.placed_words().count(), 2);

        let occupied: HashSet<Position> = puzzle
            .placed_words()
            .flat_map(|w| w.placement().unwrap().cells().to_vec())
            .collect();
        assert_eq!(occupied.len(), 6);

        let mut fillers = 0;
        for (pos, cell) in puzzle.grid.iter() {
            match *cell {
                Cell::Placed(_) => assert!(occupied.contains(&pos)),
                Cell::Filler(c) => {
                    assert!(c.is_ascii_uppercase());
                    fillers += 1;
                }
                Cell::Empty | Cell::Inactive => panic!("unexpected {cell:?} at {pos}"),
            }
        }
        assert_eq!(fillers, 94);

        for word in puzzle.placed_words() {
            let spelled: String = word
                .placement()
                .unwrap()
                .cells()
                .iter()
                .map(|&pos| puzzle.letter_at(pos).unwrap())
                .collect();
            assert_eq!(spelled, word.text());
            let direction = word.placement().unwrap().direction();
            assert!(DirectionSet::FORWARD.contains_direction(direction));
        }
    }

    #[test]
    fn test_word_longer_than_grid_fails() {
        let err = PuzzleGenerator::default()
            .generate_with_seed(&words(&["engineering"]), &Mask::full(5), seed())
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::Placement(PlacementFailure::new(vec!["ENGINEERING".to_owned()]))
        );
    }

    #[test]
    fn test_lenient_policy_reports_unplaced() {
        let puzzle = lenient()
            .generate_with_seed(&words(&["engineering", "cat"]), &Mask::full(5), seed())
            .unwrap();
        assert!(puzzle.outcome().is_failure());
        assert_eq!(puzzle.unplaced, vec!["ENGINEERING".to_owned()]);
        assert!(puzzle.words.get("cat").unwrap().is_placed());
        assert!(!puzzle.words.get("engineering").unwrap().is_placed());
        assert!(puzzle.grid.iter().all(|(_, c)| c.letter().is_some()));
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let list = words(&["alpha", "beta", "gamma", "delta", "epsilon"]);
        let mask = Donut.generate(13).unwrap();
        let generator = PuzzleGenerator::default();
        let a = generator.generate_with_seed(&list, &mask, seed()).unwrap();
        let b = generator.generate_with_seed(&list, &mask, seed()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_masked_cells_stay_blocked() {
        let mask = Donut.generate(11).unwrap();
        let puzzle = PuzzleGenerator::default()
            .generate_with_seed(&words(&["ring", "hole"]), &mask, seed())
            .unwrap();
        for (pos, cell) in puzzle.grid.iter() {
            assert_eq!(cell.is_active(), mask.is_active(pos), "{pos}");
        }
        for word in puzzle.placed_words() {
            for &pos in word.placement().unwrap().cells() {
                assert!(mask.is_active(pos));
            }
        }
        assert_eq!(puzzle.bounding_box, mask.bounding_box().unwrap());
    }

    #[test]
    fn test_prechecks_use_mask() {
        let mask: Mask = "
            #####
            #####
            *****
            #####
            #####
        "
        .parse()
        .unwrap();
        let down = Word::new("abc")
            .unwrap()
            .with_directions(DirectionSet::S);
        let list: WordList = [down].into_iter().collect();
        let err = PuzzleGenerator::default()
            .generate_with_seed(&list, &mask, seed())
            .unwrap_err();
        assert!(err.is_placement());

        let across = Word::new("abc")
            .unwrap()
            .with_directions(DirectionSet::E);
        let list: WordList = [across].into_iter().collect();
        let puzzle = PuzzleGenerator::default()
            .generate_with_seed(&list, &mask, seed())
            .unwrap();
        let placement = puzzle.words.get("abc").unwrap().placement().unwrap().clone();
        assert_eq!(placement.direction(), Direction::E);
        assert_eq!(placement.start().row(), 2);
        assert_eq!(puzzle.bounding_box.height(), 1);
    }

    #[test]
    fn test_empty_mask_is_rejected() {
        let err = PuzzleGenerator::default()
            .generate_with_seed(&words(&["cat"]), &Mask::empty(5), seed())
            .unwrap_err();
        assert_eq!(err, GenerateError::Validation(ValidationError::EmptyMask));
    }

    #[test]
    fn test_empty_directions_are_rejected() {
        let list: WordList = [Word::new("cat").unwrap().with_directions(DirectionSet::NONE)]
            .into_iter()
            .collect();
        let err = PuzzleGenerator::default()
            .generate_with_seed(&list, &Mask::full(5), seed())
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::Configuration(ConfigurationError::EmptyDirections {
                word: "CAT".to_owned()
            })
        );
    }

    #[test]
    fn test_zero_budget_fails() {
        let generator = PuzzleGenerator::new(GeneratorConfig::default().with_max_fit_tries(0));
        let err = generator
            .generate_with_seed(&words(&["cat"]), &Mask::full(5), seed())
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::Placement(PlacementFailure::new(vec!["CAT".to_owned()]))
        );
    }

    #[test]
    fn test_lenient_exhaustion_keeps_going() {
        let generator = PuzzleGenerator::new(
            GeneratorConfig::default()
                .with_policy(ExhaustionPolicy::Lenient)
                .with_max_fit_tries(0),
        );
        let list: WordList = [
            Word::new("cat").unwrap(),
            Word::new("dog").unwrap().with_priority(1),
        ]
        .into_iter()
        .collect();
        let puzzle = generator
            .generate_with_seed(&list, &Mask::full(5), seed())
            .unwrap();
        assert!(puzzle.outcome().is_failure());
        assert_eq!(puzzle.unplaced, ["DOG", "CAT"]);
        assert_eq!(puzzle.placed_words().count(), 0);
        assert!(puzzle.grid.iter().all(|(_, c)| c.is_filler()));
    }

    #[test]
    fn test_exhaustion_keeps_earlier_words() {
        let mask: Mask = "
            #####
            #####
            *****
            #####
            #####
        "
        .parse()
        .unwrap();
        let list: WordList = [
            Word::new("aaaaa")
                .unwrap()
                .with_priority(1)
                .with_directions(DirectionSet::E),
            Word::new("bb").unwrap().with_directions(DirectionSet::E),
        ]
        .into_iter()
        .collect();
        let puzzle = lenient().generate_with_seed(&list, &mask, seed()).unwrap();

        assert!(puzzle.outcome().is_failure());
        assert_eq!(puzzle.unplaced, ["BB"]);
        let placement = puzzle.words.get("aaaaa").unwrap().placement().unwrap();
        assert_eq!(placement.start(), Position::new(2, 0));
        for col in 0..5 {
            assert_eq!(puzzle.grid[Position::new(2, col)], Cell::Placed('A'));
        }
        assert!(!puzzle.words.get("bb").unwrap().is_placed());
    }

    #[test]
    fn test_filler_avoids_duplicates() {
        let config = GeneratorConfig::default().with_alphabet(Alphabet::new("AB").unwrap());
        let puzzle = PuzzleGenerator::new(config)
            .generate_with_seed(&words(&["aa"]), &Mask::full(5), seed())
            .unwrap();
        for (pos, cell) in puzzle.grid.iter() {
            if *cell != Cell::Filler('A') {
                continue;
            }
            for direction in Direction::ALL {
                let neighbor = pos.step(direction, 1, puzzle.size());
                assert_ne!(
                    neighbor.and_then(|p| puzzle.letter_at(p)),
                    Some('A'),
                    "{pos} {direction}"
                );
            }
        }
    }

    #[test]
    fn test_filler_uses_alphabet() {
        let config = GeneratorConfig::default()
            .with_alphabet(Alphabet::new("xyz").unwrap())
            .with_avoid_duplicate_words(false);
        let puzzle = PuzzleGenerator::new(config)
            .generate_with_seed(&words(&["cat"]), &Mask::full(6), seed())
            .unwrap();
        for (_, cell) in puzzle.grid.iter() {
            if let Cell::Filler(c) = *cell {
                assert!(matches!(c, 'X' | 'Y' | 'Z'));
            }
        }
    }

    #[test]
    fn test_fit_rules() {
        let mut grid = Grid::new(4, Cell::Empty);
        grid[Position::new(0, 1)] = Cell::Placed('A');
        grid[Position::new(3, 3)] = Cell::Inactive;

        let letters = ['X', 'A'];
        assert!(fit(&grid, &letters, Position::new(0, 0), Direction::E).is_some());
        assert!(fit(&grid, &['X', 'B'], Position::new(0, 0), Direction::E).is_none());
        assert!(fit(&grid, &letters, Position::new(2, 2), Direction::SE).is_none());
        assert!(fit(&grid, &letters, Position::new(0, 3), Direction::E).is_none());
        assert!(fit(&grid, &['A'], Position::new(0, 1), Direction::S).is_some());
    }

    #[test]
    fn test_completes_word() {
        let mut grid = Grid::new(3, Cell::Empty);
        grid[Position::new(0, 0)] = Cell::Placed('C');
        grid[Position::new(0, 1)] = Cell::Filler('A');
        let words = vec![vec!['C', 'A', 'T']];
        assert!(completes_word(&grid, Position::new(0, 2), 'T', &words));
        assert!(!completes_word(&grid, Position::new(0, 2), 'X', &words));
        assert!(!completes_word(&grid, Position::new(1, 2), 'T', &words));
    }
}
