//! # Shuffle Cache Adapters
//!
//! [`LruShuffleCache`] keeps the most recent full shuffles keyed by seed.
//! Lookups share a read lock; a miss computes outside any lock and the
//! first writer for a seed wins, so racing threads all return the same
//! `Arc`.

use crate::domain::HelperError;
use crate::ports::CommitteeShuffleCache;
use lru::LruCache;
use parking_lot::RwLock;
use shared_types::{Seed, ValidatorIndex};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Default number of seeds kept (a few epochs of committee shuffles).
pub const DEFAULT_SHUFFLE_CACHE_CAPACITY: usize = 16;

/// Cache statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShuffleCacheStats {
    /// Seeds currently stored.
    pub entries: usize,
    /// Maximum seeds stored.
    pub capacity: usize,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran the shuffle.
    pub misses: u64,
}

/// Bounded LRU memo of full shuffles.
pub struct LruShuffleCache {
    entries: RwLock<LruCache<Seed, Arc<Vec<ValidatorIndex>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LruShuffleCache {
    /// Cache holding at most `capacity` seeds (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Whether a shuffle for `seed` is stored.
    pub fn contains(&self, seed: &Seed) -> bool {
        self.entries.read().contains(seed)
    }

    /// Drop every stored shuffle.
    pub fn clear(&mut self) {
        self.entries.get_mut().clear();
    }

    /// Get cache statistics.
    pub fn stats(&self) -> ShuffleCacheStats {
        let entries = self.entries.read();
        ShuffleCacheStats {
            entries: entries.len(),
            capacity: entries.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for LruShuffleCache {
    fn default() -> Self {
        Self::new(DEFAULT_SHUFFLE_CACHE_CAPACITY)
    }
}

impl CommitteeShuffleCache for LruShuffleCache {
    fn get_or_compute(
        &self,
        seed: &Seed,
        compute: &dyn Fn() -> Result<Vec<ValidatorIndex>, HelperError>,
    ) -> Result<Arc<Vec<ValidatorIndex>>, HelperError> {
        let cached = self.entries.read().peek(seed).cloned();
        if let Some(shuffle) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            // Recency is refreshed opportunistically; a busy lock only
            // costs eviction order.
            if let Some(mut entries) = self.entries.try_write() {
                entries.promote(seed);
            }
            return Ok(shuffle);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let computed = Arc::new(compute()?);

        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(seed) {
            helpers_telemetry::log_event!(
                trace,
                "shuffle_cache",
                "Concurrent shuffle already stored"
            );
            return Ok(Arc::clone(existing));
        }
        entries.put(*seed, Arc::clone(&computed));
        helpers_telemetry::log_event!(
            debug,
            "shuffle_cache",
            "Stored shuffle",
            size = computed.len(),
            entries = entries.len()
        );
        Ok(computed)
    }
}

/// Cache that never stores: every lookup recomputes.
#[derive(Clone, Copy, Debug, Default)]
pub struct UncachedShuffle;

impl CommitteeShuffleCache for UncachedShuffle {
    fn get_or_compute(
        &self,
        _seed: &Seed,
        compute: &dyn Fn() -> Result<Vec<ValidatorIndex>, HelperError>,
    ) -> Result<Arc<Vec<ValidatorIndex>>, HelperError> {
        compute().map(Arc::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    type ShuffleResult = Result<Vec<ValidatorIndex>, HelperError>;

    #[test]
    fn test_hit_after_miss() {
        let cache = LruShuffleCache::new(2);
        let calls = AtomicUsize::new(0);
        let compute = || -> ShuffleResult {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![3, 1, 2])
        };
        let first = cache.get_or_compute(&[1; 32], &compute).unwrap();
        let second = cache.get_or_compute(&[1; 32], &compute).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            cache.stats(),
            ShuffleCacheStats {
                entries: 1,
                capacity: 2,
                hits: 1,
                misses: 1
            }
        );
    }

    #[test]
    fn test_least_recent_seed_evicted() {
        let cache = LruShuffleCache::new(2);
        let compute = || -> ShuffleResult { Ok(vec![0]) };
        cache.get_or_compute(&[1; 32], &compute).unwrap();
        cache.get_or_compute(&[2; 32], &compute).unwrap();
        // Touch seed 1 so seed 2 becomes the eviction candidate.
        cache.get_or_compute(&[1; 32], &compute).unwrap();
        cache.get_or_compute(&[3; 32], &compute).unwrap();
        assert!(cache.contains(&[1; 32]));
        assert!(!cache.contains(&[2; 32]));
        assert!(cache.contains(&[3; 32]));
    }

    #[test]
    fn test_compute_error_not_stored() {
        let cache = LruShuffleCache::new(2);
        let failing = || -> ShuffleResult { Err(HelperError::invalid("boom")) };
        assert!(cache.get_or_compute(&[1; 32], &failing).is_err());
        assert!(!cache.contains(&[1; 32]));
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut cache = LruShuffleCache::new(0);
        assert_eq!(cache.stats().capacity, 1);
        cache
            .get_or_compute(&[1; 32], &|| -> ShuffleResult { Ok(vec![1]) })
            .unwrap();
        cache.clear();
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_concurrent_callers_share_one_shuffle() {
        let cache = Arc::new(LruShuffleCache::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    cache
                        .get_or_compute(&[9; 32], &|| -> ShuffleResult {
                            Ok((0..1000).rev().collect())
                        })
                        .unwrap()
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results {
            assert_eq!(result.as_slice(), results[0].as_slice());
        }
        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hits + stats.misses, 8);
    }

    #[test]
    fn test_uncached_always_computes() {
        let calls = AtomicUsize::new(0);
        let compute = || -> ShuffleResult {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1])
        };
        UncachedShuffle.get_or_compute(&[0; 32], &compute).unwrap();
        UncachedShuffle.get_or_compute(&[0; 32], &compute).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
