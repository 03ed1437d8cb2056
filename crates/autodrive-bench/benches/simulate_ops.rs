//! Criterion benchmarks for full simulation runs and car registration.

use std::hint::black_box;

use autodrive_bench::{jam_workload, reference_workload, stress_workload, Workload};
use autodrive_core::{Cell, Heading};
use autodrive_engine::Field;
use autodrive_test_utils::fixtures::crossroads;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

fn run(workload: Workload) {
    let Workload { mut field, plan } = workload;
    let metrics = field.simulate(&plan);
    black_box(metrics);
}

/// Benchmark: 100x100 field, 200 cars, 500 steps.
fn bench_reference(c: &mut Criterion) {
    let workload = reference_workload(42).unwrap();
    c.bench_function("simulate_reference_500_steps", |b| {
        b.iter_batched(|| workload.clone(), run, BatchSize::LargeInput);
    });
}

/// Benchmark: 316x316 field, 2000 cars, 1000 steps.
fn bench_stress(c: &mut Criterion) {
    let workload = stress_workload(42).unwrap();
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("simulate_stress_1000_steps", |b| {
        b.iter_batched(|| workload.clone(), run, BatchSize::LargeInput);
    });
    group.finish();
}

/// Benchmark: dense field where most cars freeze early.
fn bench_jam(c: &mut Criterion) {
    let workload = jam_workload(42).unwrap();
    c.bench_function("simulate_jam_100_steps", |b| {
        b.iter_batched(|| workload.clone(), run, BatchSize::SmallInput);
    });
}

/// Benchmark: the two-car crossroads scenario end to end.
fn bench_crossroads(c: &mut Criterion) {
    c.bench_function("simulate_crossroads", |b| {
        b.iter_batched(crossroads, |mut s| black_box(s.run()), BatchSize::SmallInput);
    });
}

/// Benchmark: register 2500 cars, one per cell of a 50x50 field.
///
/// Occupancy checks scan the registry, so this is quadratic in car count.
fn bench_place_2500(c: &mut Criterion) {
    let names: Vec<String> = (0..2_500).map(|i| format!("car-{i}")).collect();
    c.bench_function("place_cars_2500", |b| {
        b.iter(|| {
            let mut field = Field::new(50, 50).unwrap();
            for (i, name) in names.iter().enumerate() {
                let cell = Cell::new((i % 50) as i32, (i / 50) as i32);
                field
                    .place_car(name.as_str(), cell, Heading::North)
                    .unwrap();
            }
            black_box(field);
        });
    });
}

criterion_group!(
    benches,
    bench_reference,
    bench_stress,
    bench_jam,
    bench_crossroads,
    bench_place_2500
);
criterion_main!(benches);
