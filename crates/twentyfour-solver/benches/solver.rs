//! Benchmarks for the solvability search.
//!
//! # Benchmarks
//!
//! - **`is_solvable`**: Decides solvability for a few representative deals. Unsolvable
//!   deals are the worst case since the whole tree is explored.
//! - **`find_solution`**: Same deals, building a witness expression.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use twentyfour_core::Deal;
use twentyfour_solver::{find_solution, is_solvable};

const DEALS: [(&str, &str); 4] = [
    ("easy", "1 2 3 4"),
    ("fractions", "8 8 3 3"),
    ("late_hit", "1 1 5 5"),
    ("unsolvable", "9 9 9 9"),
];

fn bench_is_solvable(c: &mut Criterion) {
    for (name, deal) in DEALS {
        let values = deal.parse::<Deal>().unwrap().values();
        c.bench_with_input(BenchmarkId::new("is_solvable", name), &values, |b, values| {
            b.iter(|| is_solvable(hint::black_box(values)));
        });
    }
}

fn bench_find_solution(c: &mut Criterion) {
    for (name, deal) in DEALS {
        let values = deal.parse::<Deal>().unwrap().values();
        c.bench_with_input(
            BenchmarkId::new("find_solution", name),
            &values,
            |b, values| {
                b.iter(|| find_solution(hint::black_box(values)));
            },
        );
    }
}

criterion_group!(benches, bench_is_solvable, bench_find_solution);
criterion_main!(benches);
