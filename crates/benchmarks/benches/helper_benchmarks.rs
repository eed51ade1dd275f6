//! # Consensus Helper Benchmarks
//!
//! ## Usage
//!
//! Run all benchmarks:
//! ```bash
//! cargo bench --package helpers-benchmarks --bench helper_benchmarks
//! ```
//!
//! Run one group:
//! ```bash
//! cargo bench --package helpers-benchmarks --bench helper_benchmarks -- shuffling
//! ```
//!
//! ## Coverage
//!
//! | Group | Claim |
//! |-------|-------|
//! | shuffling | Whole-list shuffle beats per-index shuffling by ~90x at 90 rounds |
//! | committees | Cached committees cost one slice after the first |
//! | proposer | Selection ends within a few iterations at realistic balances |

mod brutal;

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_shuffling(c: &mut Criterion) {
    brutal::shuffling::register_benchmarks(c);
}

fn bench_selection(c: &mut Criterion) {
    brutal::selection::register_benchmarks(c);
}

criterion_group!(
    name = helper_benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(5));
    targets =
        bench_shuffling,
        bench_selection,
);

criterion_main!(helper_benches);
