//! Benchmarks for the CPU simulation step and the raster renderer.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use emberfx::prelude::*;

fn populated_store(count: usize) -> ParticleStore {
    let mut store = ParticleStore::with_capacity(count);
    let mut rng = EntropySource::seeded(1234);
    for _ in 0..count {
        store.spawn(Vec2::new(512.0, 384.0), false, &mut rng);
    }
    store
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    // 30 and 60 are the low-power and full caps; 10k is a stress point.
    for count in [30usize, 60, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || populated_store(count),
                |mut store| {
                    step(&mut store);
                    black_box(store.len())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    let store = populated_store(60);
    let mut frame = Frame::new(1024, 768);

    group.bench_function("full_cap_1024x768", |b| {
        b.iter(|| {
            draw(&mut frame, black_box(store.all()));
        })
    });
    group.finish();
}

criterion_group!(benches, bench_step, bench_draw);
criterion_main!(benches);
