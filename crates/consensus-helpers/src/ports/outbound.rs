//! # Outbound Ports
//!
//! Collaborators the helpers consume but never own: the validator registry
//! (effective balances), hash-rooted objects to sign, the caller's shuffle
//! cache and the KZG backend.

use crate::domain::HelperError;
use shared_types::{Gwei, KzgCommitment, KzgProof, Root, Seed, ValidatorIndex};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Effective balance lookup - outbound port.
///
/// `None` means the index is unknown to the registry.
pub trait EffectiveBalances {
    /// Effective balance of `index`.
    fn effective_balance(&self, index: ValidatorIndex) -> Option<Gwei>;
}

impl EffectiveBalances for [Gwei] {
    fn effective_balance(&self, index: ValidatorIndex) -> Option<Gwei> {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.get(position))
            .copied()
    }
}

impl EffectiveBalances for Vec<Gwei> {
    fn effective_balance(&self, index: ValidatorIndex) -> Option<Gwei> {
        self.as_slice().effective_balance(index)
    }
}

/// Hash-tree root of a signed object - outbound port.
///
/// Object-safe view of [`tree_hash::TreeHash`]; every type deriving it
/// gets this for free.
pub trait HashTreeRoot {
    /// Root of the object's merkle tree.
    fn hash_tree_root(&self) -> Root;
}

impl<T: tree_hash::TreeHash> HashTreeRoot for T {
    fn hash_tree_root(&self) -> Root {
        self.tree_hash_root().0
    }
}

/// Per-seed memo of full shuffles - outbound port.
///
/// Contract: compute-if-absent keyed by seed. Readers may run concurrently.
/// On a miss `compute` may run on several threads at once; the result is
/// deterministic, so whichever write lands first is kept and returned to
/// every racer.
pub trait CommitteeShuffleCache: Send + Sync {
    /// Shuffle stored under `seed`, computing and storing it on a miss.
    fn get_or_compute(
        &self,
        seed: &Seed,
        compute: &dyn Fn() -> Result<Vec<ValidatorIndex>, HelperError>,
    ) -> Result<Arc<Vec<ValidatorIndex>>, HelperError>;
}

/// KZG proof math - outbound port.
pub trait KzgVerifier: Send + Sync {
    /// Verify every `(blob, commitment, proof)` triple in one batch.
    fn verify_blob_kzg_proof_batch(
        &self,
        blobs: &[&[u8]],
        commitments: &[KzgCommitment],
        proofs: &[KzgProof],
    ) -> Result<bool, HelperError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock KZG backend returning a fixed verdict.
#[derive(Debug, Default)]
pub struct MockKzgVerifier {
    /// Verdict for every batch.
    pub accept: bool,
    batches: AtomicU64,
}

impl MockKzgVerifier {
    /// Mock that accepts every batch.
    pub fn accepting() -> Self {
        Self {
            accept: true,
            batches: AtomicU64::new(0),
        }
    }

    /// Mock that rejects every batch.
    pub fn rejecting() -> Self {
        Self::default()
    }

    /// Number of batches verified so far.
    pub fn batches(&self) -> u64 {
        self.batches.load(Ordering::Relaxed)
    }
}

impl KzgVerifier for MockKzgVerifier {
    fn verify_blob_kzg_proof_batch(
        &self,
        blobs: &[&[u8]],
        commitments: &[KzgCommitment],
        proofs: &[KzgProof],
    ) -> Result<bool, HelperError> {
        if blobs.len() != commitments.len() || blobs.len() != proofs.len() {
            return Err(HelperError::invalid(format!(
                "batch lengths differ: {} blobs, {} commitments, {} proofs",
                blobs.len(),
                commitments.len(),
                proofs.len()
            )));
        }
        self.batches.fetch_add(1, Ordering::Relaxed);
        Ok(self.accept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_balances() {
        let balances: Vec<Gwei> = vec![32, 16, 0];
        assert_eq!(balances.effective_balance(1), Some(16));
        assert_eq!(balances.effective_balance(2), Some(0));
        assert_eq!(balances.effective_balance(3), None);
        assert_eq!(balances[..].effective_balance(u64::MAX), None);
    }

    #[test]
    fn test_mock_kzg_counts_batches() {
        let kzg = MockKzgVerifier::accepting();
        let blob = [0u8; 8];
        assert!(kzg
            .verify_blob_kzg_proof_batch(&[&blob], &[[0; 48]], &[[0; 48]])
            .unwrap());
        assert_eq!(kzg.batches(), 1);
    }

    #[test]
    fn test_mock_kzg_rejects_ragged_batch() {
        let kzg = MockKzgVerifier::rejecting();
        let result = kzg.verify_blob_kzg_proof_batch(&[], &[[0; 48]], &[]);
        assert!(result.unwrap_err().is_invalid_argument());
        assert_eq!(kzg.batches(), 0);
        assert!(!kzg.verify_blob_kzg_proof_batch(&[], &[], &[]).unwrap());
    }
}
