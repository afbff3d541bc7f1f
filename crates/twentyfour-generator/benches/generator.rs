//! Benchmarks for solvable deal generation.
//!
//! # Benchmarks
//!
//! - **`generate_with_seed`**: Runs the full rejection-sampling loop from a
//!   fixed seed, including every solver call on rejected draws.
//! - **`generate_with_source`**: Feeds a scripted source that yields several
//!   unsolvable deals before a solvable one, measuring the cost of rejections.
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
use twentyfour_core::Deal;
use twentyfour_generator::{DealGenerator, DealSeed, ScriptedCards};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate_with_seed(c: &mut Criterion) {
    let generator = DealGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = DealSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_with_seed", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_with_source(c: &mut Criterion) {
    let generator = DealGenerator::new();
    let deals: Vec<Deal> = ["1 1 1 1", "9 9 9 9", "1 1 1 2", "5 5 5 5", "8 8 3 3"]
        .into_iter()
        .map(|s| s.parse().unwrap())
        .collect();

    c.bench_function("generate_with_source", |b| {
        b.iter_batched(
            || ScriptedCards::from_deals(deals.iter().copied()).unwrap(),
            |mut source| generator.generate_with_source(&mut source),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_generate_with_seed,
        bench_generate_with_source
);
criterion_main!(benches);
