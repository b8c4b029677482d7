//! Run with:
//! ```bash
//! cargo bench --bench benchmark
//! ```

use ansv::{ansv_parallel, ansv_sequential, all_blocks, Rmq};
use ansv_local_transport::run_group;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Fixed RNG seed for reproducible benchmarks.
const SEED: u64 = 0xDEAD_BEEF_CAFE_BABE;

/// Generate `n` random values in `[0, max)`.
/// Using a seeded RNG ensures the benchmark data is identical across runs,
/// making benchmark comparisons statistically valid.
fn generate_random_values(n: usize, max: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..max)).collect()
}

/// Measures `Rmq::build` — the `O(n log n)` sparse-table preprocessing.
fn bench_rmq_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("rmq_build");
    for n in [1_000usize, 10_000, 100_000] {
        let values = generate_random_values(n, 1_000_000, SEED);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _n| {
            b.iter(|| black_box(Rmq::build(black_box(&values))))
        });
    }
    group.finish();
}

/// Measures `Rmq::query` once the table is built — should be O(1) regardless
/// of `n` or the queried range's width.
fn bench_rmq_query(c: &mut Criterion) {
    let n = 100_000;
    let values = generate_random_values(n, 1_000_000, SEED);
    let rmq = Rmq::build(&values);

    let mut group = c.benchmark_group("rmq_query");
    group.throughput(Throughput::Elements(1));
    group.bench_function("query_half_range", |b| {
        b.iter(|| black_box(rmq.query(black_box(0), black_box(n / 2))))
    });
    group.finish();
}

/// Measures the sequential monotone-stack sweep (C2) across input sizes.
fn bench_ansv_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("ansv_sequential");
    for n in [1_000usize, 10_000, 100_000] {
        let values = generate_random_values(n, 1_000_000, SEED);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _n| {
            b.iter(|| black_box(ansv_sequential(black_box(&values)).unwrap()))
        });
    }
    group.finish();
}

/// Measures `ansv_parallel` end to end through the reference in-process
/// transport, across a range of simulated worker counts, at a fixed N.
fn bench_ansv_parallel(c: &mut Criterion) {
    const N: usize = 100_000;
    let values = generate_random_values(N, 1_000_000, SEED);

    let mut group = c.benchmark_group("ansv_parallel");
    group.throughput(Throughput::Elements(N as u64));
    for workers in [1usize, 2, 4, 8, 16] {
        let blocks = all_blocks(N, workers);
        let slices: Vec<Vec<u32>> = blocks.iter().map(|b| values[b.lo..b.hi].to_vec()).collect();

        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.iter(|| {
                let slices = slices.clone();
                black_box(run_group(workers, move |group| {
                    let local = &slices[group.rank()];
                    ansv_parallel(local, group)
                }))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_rmq_build,
    bench_rmq_query,
    bench_ansv_sequential,
    bench_ansv_parallel,
);
criterion_main!(benches);
