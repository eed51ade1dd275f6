//! Helpers for Electra: Deneb behaviour with two-byte proposer draws
//! against the Electra effective balance ceiling.

use super::deneb::DenebHelpers;
use crate::algorithms::{self, EpochMath};
use crate::domain::{BlobSidecarRef, HelperError};
use crate::ports::{EffectiveBalances, ForkHelpers, KzgVerifier};
use shared_types::{
    KzgCommitment, Seed, SpecConfig, SpecMilestone, ValidatorIndex, VersionedHash,
};
use std::sync::Arc;

/// Electra helpers.
#[derive(Clone, Debug)]
pub struct ElectraHelpers {
    deneb: DenebHelpers,
}

impl ElectraHelpers {
    /// Electra helpers.
    pub fn new(config: Arc<SpecConfig>) -> Result<Self, HelperError> {
        Ok(Self {
            deneb: DenebHelpers::for_milestone(SpecMilestone::Electra, config)?,
        })
    }
}

impl ForkHelpers for ElectraHelpers {
    fn milestone(&self) -> SpecMilestone {
        self.deneb.milestone()
    }

    fn config(&self) -> &SpecConfig {
        self.deneb.config()
    }

    fn epochs(&self) -> &EpochMath {
        self.deneb.epochs()
    }

    fn compute_proposer_index(
        &self,
        candidates: &[ValidatorIndex],
        seed: &Seed,
        balances: &dyn EffectiveBalances,
    ) -> Result<ValidatorIndex, HelperError> {
        let config = self.config();
        algorithms::compute_proposer_index_electra(
            candidates,
            seed,
            balances,
            config.max_effective_balance_electra,
            config.shuffle_round_count,
        )
    }

    fn max_request_blocks(&self) -> u64 {
        self.deneb.max_request_blocks()
    }

    fn kzg_commitment_to_versioned_hash(
        &self,
        commitment: &KzgCommitment,
    ) -> Result<VersionedHash, HelperError> {
        self.deneb.kzg_commitment_to_versioned_hash(commitment)
    }

    fn verify_blob_sidecar_completeness(
        &self,
        sidecars: &[BlobSidecarRef<'_>],
        block_commitments: &[KzgCommitment],
    ) -> Result<(), HelperError> {
        self.deneb
            .verify_blob_sidecar_completeness(sidecars, block_commitments)
    }

    fn validate_blob_sidecars_against_block(
        &self,
        sidecars: &[BlobSidecarRef<'_>],
        block_commitments: &[KzgCommitment],
    ) -> Result<(), HelperError> {
        self.deneb
            .validate_blob_sidecars_against_block(sidecars, block_commitments)
    }

    fn verify_blob_kzg_proof(
        &self,
        kzg: &dyn KzgVerifier,
        sidecar: &BlobSidecarRef<'_>,
    ) -> Result<bool, HelperError> {
        self.deneb.verify_blob_kzg_proof(kzg, sidecar)
    }

    fn verify_blob_kzg_proof_batch(
        &self,
        kzg: &dyn KzgVerifier,
        sidecars: &[BlobSidecarRef<'_>],
    ) -> Result<bool, HelperError> {
        self.deneb.verify_blob_kzg_proof_batch(kzg, sidecars)
    }
}
