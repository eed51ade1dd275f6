//! Helpers for Deneb: base behaviour plus blob sidecar checks and the
//! smaller by-range request limit.

use super::base::BaseHelpers;
use crate::algorithms::{self, EpochMath};
use crate::domain::{BlobSidecarRef, HelperError};
use crate::ports::{ForkHelpers, KzgVerifier};
use shared_types::{KzgCommitment, SpecConfig, SpecMilestone, VersionedHash};
use std::sync::Arc;

/// Helpers for forks carrying blobs.
#[derive(Clone, Debug)]
pub struct DenebHelpers {
    base: BaseHelpers,
}

impl DenebHelpers {
    /// Deneb helpers.
    pub fn new(config: Arc<SpecConfig>) -> Result<Self, HelperError> {
        Self::for_milestone(SpecMilestone::Deneb, config)
    }

    /// Blob-capable helpers reporting `milestone`.
    pub(crate) fn for_milestone(
        milestone: SpecMilestone,
        config: Arc<SpecConfig>,
    ) -> Result<Self, HelperError> {
        Ok(Self {
            base: BaseHelpers::for_milestone_unchecked(milestone, config)?,
        })
    }
}

impl ForkHelpers for DenebHelpers {
    fn milestone(&self) -> SpecMilestone {
        self.base.milestone()
    }

    fn config(&self) -> &SpecConfig {
        self.base.config()
    }

    fn epochs(&self) -> &EpochMath {
        self.base.epochs()
    }

    fn max_request_blocks(&self) -> u64 {
        self.config().networking.max_request_blocks_deneb
    }

    fn kzg_commitment_to_versioned_hash(
        &self,
        commitment: &KzgCommitment,
    ) -> Result<VersionedHash, HelperError> {
        Ok(algorithms::kzg_commitment_to_versioned_hash(commitment))
    }

    fn verify_blob_sidecar_completeness(
        &self,
        sidecars: &[BlobSidecarRef<'_>],
        block_commitments: &[KzgCommitment],
    ) -> Result<(), HelperError> {
        algorithms::verify_blob_sidecar_completeness(sidecars, block_commitments)
    }

    fn validate_blob_sidecars_against_block(
        &self,
        sidecars: &[BlobSidecarRef<'_>],
        block_commitments: &[KzgCommitment],
    ) -> Result<(), HelperError> {
        algorithms::validate_blob_sidecars_against_block(sidecars, block_commitments)
    }

    fn verify_blob_kzg_proof(
        &self,
        kzg: &dyn KzgVerifier,
        sidecar: &BlobSidecarRef<'_>,
    ) -> Result<bool, HelperError> {
        algorithms::verify_blob_kzg_proof(kzg, sidecar)
    }

    fn verify_blob_kzg_proof_batch(
        &self,
        kzg: &dyn KzgVerifier,
        sidecars: &[BlobSidecarRef<'_>],
    ) -> Result<bool, HelperError> {
        algorithms::verify_blob_kzg_proof_batch(kzg, sidecars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockKzgVerifier;

    fn deneb() -> DenebHelpers {
        DenebHelpers::new(Arc::new(SpecConfig::mainnet())).unwrap()
    }

    #[test]
    fn test_reports_deneb() {
        assert_eq!(deneb().milestone(), SpecMilestone::Deneb);
    }

    #[test]
    fn test_versioned_hash_prefix() {
        let hash = deneb().kzg_commitment_to_versioned_hash(&[7; 48]).unwrap();
        assert_eq!(hash[0], 0x01);
        assert_eq!(&hash[1..], &shared_crypto::sha256(&[7u8; 48])[1..]);
    }

    #[test]
    fn test_max_request_blocks_deneb() {
        assert_eq!(deneb().max_request_blocks(), 128);
    }

    #[test]
    fn test_blob_checks_run() {
        let helpers = deneb();
        let blob = [0u8; 32];
        let sidecar = BlobSidecarRef {
            index: 0,
            blob: &blob,
            kzg_commitment: [1; 48],
            kzg_proof: [2; 48],
        };
        assert!(helpers.verify_blob_sidecar_completeness(&[sidecar], &[[1; 48]]).is_ok());
        assert!(helpers.validate_blob_sidecars_against_block(&[sidecar], &[[1; 48]]).is_ok());
        let kzg = MockKzgVerifier::accepting();
        assert!(helpers.verify_blob_kzg_proof(&kzg, &sidecar).unwrap());
        assert!(helpers.verify_blob_kzg_proof_batch(&kzg, &[sidecar]).unwrap());
    }
}
