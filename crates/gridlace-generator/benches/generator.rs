//! Benchmarks for puzzle generation.
//!
//! Measures the complete generation pipeline (solution search plus clue
//! removal) for the outermost difficulty tiers. Three fixed seeds keep
//! the runs reproducible while covering distinct search shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridlace_core::{Board, Difficulty};
use gridlace_generator::{BacktrackingGenerator, PuzzleGenerator, Seed};

const SEEDS: [&str; 3] = [
    "4f1cd6af8af64f126546884e19298acb",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7",
    "1234567890abcdef1234567890abcdef",
];

fn bench_generate(c: &mut Criterion) {
    for difficulty in [Difficulty::VeryEasy, Difficulty::Hardest] {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = Seed::new(seed);
            c.bench_with_input(
                BenchmarkId::new(format!("generate_{difficulty:?}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter(|| {
                        let mut board = Board::new();
                        BacktrackingGenerator
                            .generate(&mut board, difficulty, hint::black_box(seed))
                            .unwrap();
                        board
                    });
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = bench_generate
);
criterion_main!(benches);
