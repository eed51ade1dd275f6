//! # Shuffling Benchmarks
//!
//! - `shuffle_list`: one pass over mirror pairs per round, one hash per 256
//!   positions.
//! - per-index: two hashes per round per position.

use consensus_helpers::algorithms::{compute_shuffled_index, shuffle_list};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use helpers_benchmarks::utils::generate_random_seed;

const ROUNDS: u8 = 90;

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffling");

    for size in [1_000u64, 16_384, 131_072] {
        let indices: Vec<u64> = (0..size).collect();
        let seed = generate_random_seed();
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("shuffle_list", size), &indices, |b, indices| {
            b.iter(|| {
                let mut list = indices.clone();
                shuffle_list(&mut list, black_box(&seed), ROUNDS).ok();
                list
            })
        });

        // Per-index shuffling of large lists is too slow to sample fully.
        if size <= 16_384 {
            group.bench_with_input(BenchmarkId::new("per_index", size), &size, |b, &size| {
                b.iter(|| {
                    let count = size as usize;
                    (0..count)
                        .filter_map(|i| compute_shuffled_index(i, count, black_box(&seed), ROUNDS).ok())
                        .collect::<Vec<_>>()
                })
            });
        }
    }

    group.finish();
}
