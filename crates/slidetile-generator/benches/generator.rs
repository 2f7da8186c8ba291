//! Benchmarks for solvable shuffle generation.
//!
//! This benchmark suite measures `ShuffleGenerator::generate_with_seed` for the
//! three difficulty tiers (3×3, 4×4, 5×5). Each tier is measured with fixed seeds
//! so runs are reproducible while still covering shuffles that need different
//! numbers of attempts.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use slidetile_core::GridSize;
use slidetile_generator::{ShuffleGenerator, ShuffleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator(c: &mut Criterion) {
    let generator = ShuffleGenerator::new();

    for size in [GridSize::EASY, GridSize::MEDIUM, GridSize::HARD] {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = ShuffleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generator_{size}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(size, seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = bench_generator
);
criterion_main!(benches);
