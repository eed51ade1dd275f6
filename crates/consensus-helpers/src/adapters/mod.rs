//! # Adapters Layer (Hexagonal Architecture)
//!
//! Concrete implementations of the outbound ports.

mod balances;
mod shuffle_cache;

pub use balances::InMemoryBalances;
pub use shuffle_cache::{
    LruShuffleCache, ShuffleCacheStats, UncachedShuffle, DEFAULT_SHUFFLE_CACHE_CAPACITY,
};
