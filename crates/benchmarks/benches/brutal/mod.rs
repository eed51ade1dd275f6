//! Benchmark groups.

pub mod selection;
pub mod shuffling;
