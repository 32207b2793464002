//! Benchmarks for bin computation and histogram recomputation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use histobin::prelude::*;
use rand::prelude::*;

/// Generate uniformly distributed test values
fn generate_test_data(size: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
}

/// Generate categorical keys with a fixed number of distinct values
fn generate_categories(size: usize, distinct: usize) -> Vec<String> {
    (0..size).map(|i| format!("key{}", (i * 7 + 3) % distinct)).collect()
}

/// Benchmark counting with numeric binnings of different sizes
fn bench_number_binning(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_binning");

    for &size in &[1_000, 10_000, 100_000] {
        let data = generate_test_data(size);

        for &bin_count in &[10, 100, 1000] {
            let binning =
                binnings::create_number_binning(&data, |v: &f64| *v, bin_count, None, None)
                    .unwrap();
            group.bench_with_input(
                BenchmarkId::new("compute", format!("{size}_values_{bin_count}_bins")),
                &data,
                |b, data| {
                    b.iter(|| black_box(binning.compute(data, true).unwrap()));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark counting with categorical binnings
fn bench_general_binning(c: &mut Criterion) {
    let mut group = c.benchmark_group("general_binning");

    for &distinct in &[4, 64, 1024] {
        let data = generate_categories(10_000, distinct);
        let binning = binnings::create_general_binning(&data, |s: &String| s.clone());
        group.bench_with_input(BenchmarkId::new("compute", distinct), &data, |b, data| {
            b.iter(|| black_box(binning.compute(data, true).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark rebinning a populated histogram, including label rebuild
fn bench_rebinning(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebinning");
    let data = generate_test_data(50_000);
    let highlighted: Vec<f64> = data.iter().copied().step_by(3).collect();

    let mut engine = histograms::numeric(data.clone(), |v: &f64| *v).unwrap();
    engine.set_highlighted(highlighted);

    group.bench_function("set_bin_count", |b| {
        let mut bin_count = 10;
        b.iter(|| {
            bin_count = if bin_count == 10 { 200 } else { 10 };
            engine.set_bin_count(black_box(bin_count)).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_number_binning, bench_general_binning, bench_rebinning);
criterion_main!(benches);
