//! Benchmarks for word-search puzzle generation.
//!
//! # Benchmarks
//!
//! - **`generator_full`**: Places a fixed word list on an unmasked 15x15 grid
//!   and fills the rest, with duplicate avoidance enabled.
//! - **`generator_donut`**: Places the same words on a 21x21 donut mask, where
//!   the blocked centre makes more random draws fail.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use wordsearch_core::{Word, WordList};
use wordsearch_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
use wordsearch_mask::{Donut, Mask, Shape as _};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const WORDS: [&str; 12] = [
    "ownership", "borrow", "lifetime", "trait", "closure", "iterator", "module",
    "crate", "macro", "pattern", "generic", "slice",
];

fn word_list() -> WordList {
    WORDS.iter().map(|text| Word::new(text).unwrap()).collect()
}

fn bench_mask(c: &mut Criterion, name: &str, mask: &Mask) {
    let words = word_list();
    let generator = PuzzleGenerator::new(GeneratorConfig::default());

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(&words, mask, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_full(c: &mut Criterion) {
    bench_mask(c, "generator_full", &Mask::full(15));
}

fn bench_generator_donut(c: &mut Criterion) {
    let mask = Donut.generate(21).unwrap();
    bench_mask(c, "generator_donut", &mask);
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_full,
        bench_generator_donut
);
criterion_main!(benches);
