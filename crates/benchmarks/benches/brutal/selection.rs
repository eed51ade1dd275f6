//! # Committee and Proposer Benchmarks

use consensus_helpers::algorithms::{compute_committee, compute_proposer_index};
use consensus_helpers::{LruShuffleCache, UncachedShuffle};
use criterion::{black_box, BenchmarkId, Criterion};
use helpers_benchmarks::utils::{generate_balances, generate_random_seed};
use shared_types::SpecConfig;

pub fn register_benchmarks(c: &mut Criterion) {
    let config = SpecConfig::mainnet();
    let rounds = config.shuffle_round_count;
    let mut group = c.benchmark_group("committees");

    let indices: Vec<u64> = (0..65_536).collect();
    let seed = generate_random_seed();

    group.bench_function("uncached_committee", |b| {
        b.iter(|| compute_committee(&indices, black_box(&seed), 3, 64, rounds, &UncachedShuffle))
    });

    let cache = LruShuffleCache::default();
    group.bench_function("cached_committee", |b| {
        b.iter(|| compute_committee(&indices, black_box(&seed), 3, 64, rounds, &cache))
    });
    group.finish();

    let mut group = c.benchmark_group("proposer");
    for count in [1_000u64, 100_000] {
        let candidates: Vec<u64> = (0..count).collect();
        let balances = generate_balances(count, config.max_effective_balance);
        group.bench_with_input(BenchmarkId::new("compute_proposer_index", count), &count, |b, _| {
            b.iter(|| {
                compute_proposer_index(
                    &candidates,
                    black_box(&generate_random_seed()),
                    &balances,
                    config.max_effective_balance,
                    rounds,
                )
            })
        });
    }
    group.finish();
}
