//! Performance measurement for the generation step at varying torus sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lifegrid::Grid;
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

/// Measures step cost as the torus grows, seeded with a 1-in-7 soup
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for size in &[32_usize, 64, 128] {
        let mut rng = StdRng::seed_from_u64(12345);
        let mut grid = Grid::new(*size, *size);
        grid.randomize(&mut rng, 1.0 / 7.0);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                grid.step();
                black_box(grid.population());
            });
        });
    }

    group.finish();
}

/// Measures serialization and parsing of a 128x128 soup
fn bench_text_round_trip(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut grid = Grid::new(128, 128);
    grid.randomize(&mut rng, 1.0 / 7.0);

    c.bench_function("text_round_trip", |b| {
        b.iter(|| {
            let text = grid.to_text();
            black_box(Grid::from_text(black_box(&text)));
        });
    });
}

criterion_group!(benches, bench_step, bench_text_round_trip);
criterion_main!(benches);
