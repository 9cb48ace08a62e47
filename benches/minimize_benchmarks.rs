//! Benchmark suite for Quine-McCluskey minimization
//!
//! Covers the three cost regimes: small exact instances, mid-size
//! instances dominated by prime generation, and large instances that fall
//! back to the greedy covering heuristic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qmc_logic::{BoolFunction, CoverStrategy, MinimizeConfig};

const NAMES: [&str; 12] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

/// Deterministic pseudo-random row selection without an RNG dependency:
/// keep row i when a fixed multiplicative hash of i clears a threshold.
fn scattered_minterms(num_vars: usize, keep_one_in: u64) -> Vec<usize> {
    (0..1usize << num_vars)
        .filter(|&i| ((i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 32) % keep_one_in == 0)
        .collect()
}

fn bench_small_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_exact");
    let cases: Vec<(&str, usize, Vec<usize>)> = vec![
        ("two_prime_3var", 3, vec![0, 2, 5, 7]),
        ("cyclic_3var", 3, vec![0, 1, 2, 5, 6, 7]),
        ("nine_minterm_4var", 4, vec![0, 1, 2, 5, 6, 7, 8, 9, 14]),
    ];
    for (name, num_vars, minterms) in cases {
        let f = BoolFunction::new(num_vars, &minterms, &[]).unwrap();
        group.throughput(Throughput::Elements(minterms.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(&f).minimize(&NAMES[..num_vars]).unwrap())
        });
    }
    group.finish();
}

fn bench_generation_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_heavy");
    for num_vars in [6usize, 8, 10] {
        // Every third row: merge-friendly, many rounds.
        let minterms: Vec<usize> = (0..1usize << num_vars).step_by(3).collect();
        let f = BoolFunction::new(num_vars, &minterms, &[]).unwrap();
        group.throughput(Throughput::Elements(minterms.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(num_vars), |b| {
            b.iter(|| black_box(&f).minimize(&NAMES[..num_vars]).unwrap())
        });
    }
    group.finish();
}

fn bench_greedy_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_fallback");
    group.sample_size(20);
    for num_vars in [10usize, 12] {
        let minterms = scattered_minterms(num_vars, 3);
        let f = BoolFunction::new(num_vars, &minterms, &[]).unwrap();
        let config = MinimizeConfig {
            strategy: CoverStrategy::Greedy,
            ..Default::default()
        };
        group.throughput(Throughput::Elements(minterms.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(num_vars), |b| {
            b.iter(|| {
                black_box(&f)
                    .minimize_with_config(&NAMES[..num_vars], &config)
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_small_exact,
    bench_generation_heavy,
    bench_greedy_fallback
);
criterion_main!(benches);
