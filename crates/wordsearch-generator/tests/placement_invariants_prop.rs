//! Property tests for the placement engine.
//!
//! Random word lists, direction sets and masks are generated under the lenient
//! policy, and every result is checked against the grid invariants: placed
//! words spell themselves along a straight line of active cells in an allowed
//! direction, blockers match the mask, every active cell holds a letter, and a
//! seed replays to the same puzzle.

use proptest::prelude::*;
use wordsearch_core::{DirectionSet, Position, Word, WordList};
use wordsearch_generator::{
    Cell, ExhaustionPolicy, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed,
};
use wordsearch_mask::Mask;

const MAX_SIZE: usize = 12;

fn arb_words() -> impl Strategy<Value = WordList> {
    prop::collection::vec(("[a-f]{1,7}", 1u8..=u8::MAX), 1..8).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(text, bits)| {
                Word::new(&text)
                    .unwrap()
                    .with_directions(DirectionSet::from_bits_truncate(bits))
            })
            .collect()
    })
}

fn arb_mask() -> impl Strategy<Value = Mask> {
    (
        4..=MAX_SIZE,
        prop::collection::vec(prop::bool::weighted(0.8), MAX_SIZE * MAX_SIZE),
    )
        .prop_map(|(size, cells)| {
            let active = cells
                .into_iter()
                .enumerate()
                .filter(|&(_, on)| on)
                .map(|(i, _)| Position::new(i / MAX_SIZE, i % MAX_SIZE));
            Mask::from_cells(size, active)
        })
        .prop_filter("mask needs an active cell", |mask| mask.active_count() > 0)
}

fn generate(words: &WordList, mask: &Mask, seed: [u8; 32]) -> GeneratedPuzzle {
    let config = GeneratorConfig::default()
        .with_policy(ExhaustionPolicy::Lenient)
        .with_max_fit_tries(200);
    PuzzleGenerator::new(config)
        .generate_with_seed(words, mask, PuzzleSeed::from(seed))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_words_spell_themselves(
        words in arb_words(),
        mask in arb_mask(),
        seed in any::<[u8; 32]>(),
    ) {
        let puzzle = generate(&words, &mask, seed);

        for word in puzzle.placed_words() {
            let placement = word.placement().unwrap();
            prop_assert!(word.directions().contains_direction(placement.direction()));
            prop_assert_eq!(placement.cells().len(), word.len());

            let expected = placement
                .start()
                .line(placement.direction(), word.len(), puzzle.size())
                .unwrap();
            prop_assert_eq!(placement.cells(), expected.as_slice());

            for (&pos, letter) in placement.cells().iter().zip(word.text().chars()) {
                prop_assert!(mask.is_active(pos));
                prop_assert_eq!(puzzle.grid[pos], Cell::Placed(letter));
            }
        }
    }

    #[test]
    fn every_active_cell_holds_a_letter(
        words in arb_words(),
        mask in arb_mask(),
        seed in any::<[u8; 32]>(),
    ) {
        let puzzle = generate(&words, &mask, seed);

        prop_assert_eq!(puzzle.size(), mask.size());
        prop_assert_eq!(puzzle.bounding_box, mask.bounding_box().unwrap());
        for (pos, cell) in puzzle.grid.iter() {
            if mask.is_active(pos) {
                prop_assert!(cell.letter().is_some(), "{} is {:?}", pos, cell);
            } else {
                prop_assert_eq!(*cell, Cell::Inactive);
            }
        }
    }

    #[test]
    fn unplaced_words_are_reported(
        words in arb_words(),
        mask in arb_mask(),
        seed in any::<[u8; 32]>(),
    ) {
        let puzzle = generate(&words, &mask, seed);

        prop_assert_eq!(
            puzzle.placed_words().count() + puzzle.unplaced.len(),
            words.len()
        );
        for text in &puzzle.unplaced {
            prop_assert!(!puzzle.words.get(text).unwrap().is_placed());
        }
        prop_assert_eq!(puzzle.is_success(), puzzle.unplaced.is_empty());
    }

    #[test]
    fn seed_replays_puzzle(
        words in arb_words(),
        mask in arb_mask(),
        seed in any::<[u8; 32]>(),
    ) {
        let first = generate(&words, &mask, seed);
        let second = generate(&words, &mask, seed);

        prop_assert_eq!(&first.grid, &second.grid);
        prop_assert_eq!(&first.unplaced, &second.unplaced);
        for word in first.placed_words() {
            let replayed = second.words.get(word.text()).unwrap();
            prop_assert_eq!(word.placement(), replayed.placement());
        }
    }
}
