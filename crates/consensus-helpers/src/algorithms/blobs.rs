//! # Blob Sidecar Checks
//!
//! Structural checks tying blob sidecars to the commitments listed in their
//! block. Proof math is delegated to a [`KzgVerifier`].

use crate::domain::{BlobSidecarRef, HelperError};
use crate::ports::KzgVerifier;
use shared_crypto::sha256;
use shared_types::{KzgCommitment, KzgProof, VersionedHash};

/// Version byte of a KZG versioned hash.
pub const VERSIONED_HASH_VERSION_KZG: u8 = 0x01;

/// `VERSIONED_HASH_VERSION_KZG || sha256(commitment)[1..]`.
pub fn kzg_commitment_to_versioned_hash(commitment: &KzgCommitment) -> VersionedHash {
    let mut hash = sha256(commitment);
    hash[0] = VERSIONED_HASH_VERSION_KZG;
    hash
}

/// Check that `sidecars` are exactly the blobs of a block carrying
/// `block_commitments`: same count, indices `0..n` in order, matching
/// commitments.
pub fn verify_blob_sidecar_completeness(
    sidecars: &[BlobSidecarRef<'_>],
    block_commitments: &[KzgCommitment],
) -> Result<(), HelperError> {
    if sidecars.len() != block_commitments.len() {
        return Err(HelperError::invalid(format!(
            "expected {} blob sidecars, got {}",
            block_commitments.len(),
            sidecars.len()
        )));
    }

    for (position, (sidecar, commitment)) in sidecars.iter().zip(block_commitments).enumerate() {
        if sidecar.index != position as u64 {
            return Err(HelperError::invalid(format!(
                "blob sidecar at position {} has index {}",
                position, sidecar.index
            )));
        }
        if sidecar.kzg_commitment != *commitment {
            return Err(HelperError::invalid(format!(
                "blob sidecar {} commitment does not match the block",
                sidecar.index
            )));
        }
    }
    Ok(())
}

/// Check that every sidecar addresses a commitment of the block and
/// carries that commitment. A subset of the block's blobs is accepted.
pub fn validate_blob_sidecars_against_block(
    sidecars: &[BlobSidecarRef<'_>],
    block_commitments: &[KzgCommitment],
) -> Result<(), HelperError> {
    for sidecar in sidecars {
        let expected = usize::try_from(sidecar.index)
            .ok()
            .and_then(|position| block_commitments.get(position))
            .ok_or(HelperError::IndexOutOfRange {
                index: sidecar.index,
                count: block_commitments.len() as u64,
            })?;
        if sidecar.kzg_commitment != *expected {
            return Err(HelperError::invalid(format!(
                "blob sidecar {} commitment does not match the block",
                sidecar.index
            )));
        }
    }
    Ok(())
}

/// Verify the KZG proofs of all `sidecars` in one batch.
pub fn verify_blob_kzg_proof_batch(
    kzg: &dyn KzgVerifier,
    sidecars: &[BlobSidecarRef<'_>],
) -> Result<bool, HelperError> {
    let blobs: Vec<&[u8]> = sidecars.iter().map(|sidecar| sidecar.blob).collect();
    let commitments: Vec<KzgCommitment> = sidecars.iter().map(|s| s.kzg_commitment).collect();
    let proofs: Vec<KzgProof> = sidecars.iter().map(|s| s.kzg_proof).collect();

    let verified = kzg.verify_blob_kzg_proof_batch(&blobs, &commitments, &proofs)?;
    helpers_telemetry::log_event!(
        debug,
        "blobs",
        "Verified blob KZG proof batch",
        sidecars = sidecars.len(),
        verified
    );
    Ok(verified)
}

/// Verify the KZG proof of a single sidecar.
pub fn verify_blob_kzg_proof(
    kzg: &dyn KzgVerifier,
    sidecar: &BlobSidecarRef<'_>,
) -> Result<bool, HelperError> {
    verify_blob_kzg_proof_batch(kzg, std::slice::from_ref(sidecar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockKzgVerifier;

    fn commitment(tag: u8) -> KzgCommitment {
        let mut bytes = [0u8; 48];
        bytes[0] = 0xc0;
        bytes[47] = tag;
        bytes
    }

    fn sidecar(index: u64, blob: &[u8], tag: u8) -> BlobSidecarRef<'_> {
        BlobSidecarRef {
            index,
            blob,
            kzg_commitment: commitment(tag),
            kzg_proof: [0; 48],
        }
    }

    #[test]
    fn test_versioned_hash_vector() {
        let mut point_at_infinity = [0u8; 48];
        point_at_infinity[0] = 0xc0;
        assert_eq!(
            hex::encode(kzg_commitment_to_versioned_hash(&point_at_infinity)),
            "010657f37554c781402a22917dee2f75def7ab966d7b770905398eba3c444014"
        );
    }

    #[test]
    fn test_completeness_accepts_exact_set() {
        let blob = [1u8; 16];
        let sidecars = [sidecar(0, &blob, 1), sidecar(1, &blob, 2)];
        assert!(verify_blob_sidecar_completeness(&sidecars, &[commitment(1), commitment(2)]).is_ok());
        assert!(verify_blob_sidecar_completeness(&[], &[]).is_ok());
    }

    #[test]
    fn test_completeness_rejects_missing_or_reordered() {
        let blob = [1u8; 16];
        let block = [commitment(1), commitment(2)];
        assert!(verify_blob_sidecar_completeness(&[sidecar(0, &blob, 1)], &block).is_err());
        let swapped = [sidecar(1, &blob, 2), sidecar(0, &blob, 1)];
        assert!(verify_blob_sidecar_completeness(&swapped, &block).is_err());
        let wrong = [sidecar(0, &blob, 1), sidecar(1, &blob, 3)];
        assert!(verify_blob_sidecar_completeness(&wrong, &block).is_err());
    }

    #[test]
    fn test_validate_against_block_accepts_subset() {
        let blob = [2u8; 16];
        let block = [commitment(1), commitment(2), commitment(3)];
        assert!(validate_blob_sidecars_against_block(&[sidecar(2, &blob, 3)], &block).is_ok());
    }

    #[test]
    fn test_validate_against_block_rejects_foreign_sidecar() {
        let blob = [2u8; 16];
        let block = [commitment(1)];
        assert_eq!(
            validate_blob_sidecars_against_block(&[sidecar(1, &blob, 1)], &block),
            Err(HelperError::IndexOutOfRange { index: 1, count: 1 })
        );
        assert!(validate_blob_sidecars_against_block(&[sidecar(0, &blob, 9)], &block).is_err());
    }

    #[test]
    fn test_kzg_batch_delegates() {
        let blob = [3u8; 16];
        let sidecars = [sidecar(0, &blob, 1), sidecar(1, &blob, 2)];
        let kzg = MockKzgVerifier::accepting();
        assert!(verify_blob_kzg_proof_batch(&kzg, &sidecars).unwrap());
        assert!(verify_blob_kzg_proof(&kzg, &sidecars[0]).unwrap());
        assert_eq!(kzg.batches(), 2);
        assert!(!verify_blob_kzg_proof_batch(&MockKzgVerifier::rejecting(), &sidecars).unwrap());
    }
}
