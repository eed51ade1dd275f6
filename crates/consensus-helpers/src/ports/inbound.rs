//! # Inbound Ports
//!
//! [`ForkHelpers`] is the helper API for one fork. Operations shared by
//! every fork are provided methods; operations introduced later (blob and
//! KZG checks) decline with [`HelperError::UnsupportedForFork`] until a
//! fork's implementation overrides them.

use crate::algorithms::{self, EpochMath};
use crate::domain::{BlobSidecarRef, HelperError};
use crate::ports::outbound::{CommitteeShuffleCache, EffectiveBalances, HashTreeRoot, KzgVerifier};
use shared_types::{
    CommitteeIndex, Domain, DomainType, Epoch, ForkDigest, KzgCommitment, NodeId, Root, Seed,
    Slot, SpecConfig, SpecMilestone, SubnetId, ValidatorIndex, Version, VersionedHash,
};

/// Error for an operation first provided at `required`.
pub fn unsupported(
    operation: &'static str,
    milestone: SpecMilestone,
    required: SpecMilestone,
) -> HelperError {
    helpers_telemetry::log_event!(
        debug,
        "fork_helpers",
        "Operation declined for fork",
        operation,
        %milestone,
        %required
    );
    HelperError::UnsupportedForFork {
        operation,
        milestone,
        required,
    }
}

/// Helper API for one fork - inbound port.
pub trait ForkHelpers: Send + Sync {
    /// Fork these helpers implement.
    fn milestone(&self) -> SpecMilestone;

    /// Network configuration.
    fn config(&self) -> &SpecConfig;

    /// Epoch arithmetic for the configured constants.
    fn epochs(&self) -> &EpochMath;

    // -------------------------------------------------------------------------
    // Shuffling and selection
    // -------------------------------------------------------------------------

    /// Position of `index` after shuffling `0..index_count`.
    fn compute_shuffled_index(
        &self,
        index: usize,
        index_count: usize,
        seed: &Seed,
    ) -> Result<usize, HelperError> {
        algorithms::compute_shuffled_index(index, index_count, seed, self.config().shuffle_round_count)
    }

    /// Shuffle `indices` in place.
    fn shuffle_list(&self, indices: &mut [ValidatorIndex], seed: &Seed) -> Result<(), HelperError> {
        algorithms::shuffle_list(indices, seed, self.config().shuffle_round_count)
    }

    /// Committee `committee_index` of `committee_count` for `seed`.
    fn compute_committee(
        &self,
        indices: &[ValidatorIndex],
        seed: &Seed,
        committee_index: CommitteeIndex,
        committee_count: u64,
        cache: &dyn CommitteeShuffleCache,
    ) -> Result<Vec<ValidatorIndex>, HelperError> {
        algorithms::compute_committee(
            indices,
            seed,
            committee_index,
            committee_count,
            self.config().shuffle_round_count,
            cache,
        )
    }

    /// Stake-weighted proposer among `candidates`.
    fn compute_proposer_index(
        &self,
        candidates: &[ValidatorIndex],
        seed: &Seed,
        balances: &dyn EffectiveBalances,
    ) -> Result<ValidatorIndex, HelperError> {
        let config = self.config();
        algorithms::compute_proposer_index(
            candidates,
            seed,
            balances,
            config.max_effective_balance,
            config.shuffle_round_count,
        )
    }

    // -------------------------------------------------------------------------
    // Epoch and slot arithmetic
    // -------------------------------------------------------------------------

    /// Epoch containing `slot`.
    fn compute_epoch_at_slot(&self, slot: Slot) -> Epoch {
        self.epochs().compute_epoch_at_slot(slot)
    }

    /// First slot of `epoch`.
    fn compute_start_slot_at_epoch(&self, epoch: Epoch) -> Slot {
        self.epochs().compute_start_slot_at_epoch(epoch)
    }

    /// Last slot of `epoch`.
    fn compute_end_slot_at_epoch(&self, epoch: Epoch) -> Slot {
        self.epochs().compute_end_slot_at_epoch(epoch)
    }

    /// Slot in progress at unix `time`.
    fn compute_slot_at_time(&self, genesis_time: u64, time: u64) -> Slot {
        self.epochs().compute_slot_at_time(genesis_time, time)
    }

    /// Unix time at which `slot` starts.
    fn compute_time_at_slot(&self, genesis_time: u64, slot: Slot) -> u64 {
        self.epochs().compute_time_at_slot(genesis_time, slot)
    }

    /// Whether `block_slot` opens a new `n`-epoch period after `parent_slot`.
    fn is_slot_at_nth_epoch_boundary(
        &self,
        block_slot: Slot,
        parent_slot: Slot,
        n: u64,
    ) -> Result<bool, HelperError> {
        self.epochs().is_slot_at_nth_epoch_boundary(block_slot, parent_slot, n)
    }

    /// Epoch at which an activation or exit from `epoch` takes effect.
    fn compute_activation_exit_epoch(&self, epoch: Epoch) -> Epoch {
        self.epochs().compute_activation_exit_epoch(epoch)
    }

    /// Earliest slot able to answer committee queries for `slot`'s epoch.
    fn earliest_queryable_slot_for_beacon_committee_at_target_slot(&self, slot: Slot) -> Slot {
        self.epochs()
            .earliest_queryable_slot_for_beacon_committee_at_target_slot(slot)
    }

    /// Earliest slot able to answer committee queries for `epoch`.
    fn earliest_queryable_slot_for_beacon_committee_in_target_epoch(&self, epoch: Epoch) -> Slot {
        self.epochs()
            .earliest_queryable_slot_for_beacon_committee_in_target_epoch(epoch)
    }

    // -------------------------------------------------------------------------
    // Domain separation
    // -------------------------------------------------------------------------

    /// Fork data root of `(version, genesis_validators_root)`.
    fn compute_fork_data_root(&self, version: &Version, genesis_validators_root: &Root) -> Root {
        algorithms::compute_fork_data_root(version, genesis_validators_root)
    }

    /// Four-byte fork digest.
    fn compute_fork_digest(&self, version: &Version, genesis_validators_root: &Root) -> ForkDigest {
        algorithms::compute_fork_digest(version, genesis_validators_root)
    }

    /// Signature domain for an explicit fork version and genesis root.
    fn compute_domain(
        &self,
        domain_type: &DomainType,
        fork_version: &Version,
        genesis_validators_root: &Root,
    ) -> Domain {
        algorithms::compute_domain(domain_type, fork_version, genesis_validators_root)
    }

    /// Domain under the genesis fork version with a zero genesis root, for
    /// messages signed before genesis.
    fn compute_genesis_domain(&self, domain_type: &DomainType) -> Domain {
        self.compute_domain_at_genesis_version(domain_type, &[0u8; 32])
    }

    /// Domain under the genesis fork version.
    fn compute_domain_at_genesis_version(
        &self,
        domain_type: &DomainType,
        genesis_validators_root: &Root,
    ) -> Domain {
        algorithms::compute_domain(
            domain_type,
            &self.config().genesis_fork_version,
            genesis_validators_root,
        )
    }

    /// Signing root of a hash-rooted object.
    fn compute_signing_root(&self, object: &dyn HashTreeRoot, domain: &Domain) -> Root {
        algorithms::compute_signing_root(object, domain)
    }

    /// Signing root of a fixed-length byte vector.
    fn compute_signing_root_for_bytes(&self, bytes: &[u8], domain: &Domain) -> Root {
        algorithms::compute_signing_root_for_bytes(bytes, domain)
    }

    /// Signing root of a `u64`.
    fn compute_signing_root_for_u64(&self, value: u64, domain: &Domain) -> Root {
        algorithms::compute_signing_root_for_u64(value, domain)
    }

    // -------------------------------------------------------------------------
    // Networking
    // -------------------------------------------------------------------------

    /// Long-lived attestation subnets of `node_id` during `epoch`.
    fn compute_subscribed_subnets(
        &self,
        node_id: &NodeId,
        epoch: Epoch,
    ) -> Result<Vec<SubnetId>, HelperError> {
        let config = self.config();
        algorithms::compute_subscribed_subnets(
            node_id,
            epoch,
            &config.networking,
            config.shuffle_round_count,
        )
    }

    /// Slot at which `node_id` next rotates its subnets.
    fn calculate_node_subnet_unsubscription_slot(
        &self,
        node_id: &NodeId,
        current_slot: Slot,
    ) -> Result<Slot, HelperError> {
        algorithms::calculate_node_subnet_unsubscription_slot(
            node_id,
            current_slot,
            &self.config().networking,
            self.epochs(),
        )
    }

    /// Most blocks one by-range request may ask for.
    fn max_request_blocks(&self) -> u64 {
        self.config().networking.max_request_blocks
    }

    // -------------------------------------------------------------------------
    // Blobs (Deneb and later)
    // -------------------------------------------------------------------------

    /// Versioned hash of a KZG commitment.
    fn kzg_commitment_to_versioned_hash(
        &self,
        _commitment: &KzgCommitment,
    ) -> Result<VersionedHash, HelperError> {
        Err(unsupported(
            "kzg_commitment_to_versioned_hash",
            self.milestone(),
            SpecMilestone::Deneb,
        ))
    }

    /// Check that `sidecars` are exactly the blobs of the block.
    fn verify_blob_sidecar_completeness(
        &self,
        _sidecars: &[BlobSidecarRef<'_>],
        _block_commitments: &[KzgCommitment],
    ) -> Result<(), HelperError> {
        Err(unsupported(
            "verify_blob_sidecar_completeness",
            self.milestone(),
            SpecMilestone::Deneb,
        ))
    }

    /// Check that each sidecar matches a commitment of the block.
    fn validate_blob_sidecars_against_block(
        &self,
        _sidecars: &[BlobSidecarRef<'_>],
        _block_commitments: &[KzgCommitment],
    ) -> Result<(), HelperError> {
        Err(unsupported(
            "validate_blob_sidecars_against_block",
            self.milestone(),
            SpecMilestone::Deneb,
        ))
    }

    /// Verify one sidecar's KZG proof.
    fn verify_blob_kzg_proof(
        &self,
        _kzg: &dyn KzgVerifier,
        _sidecar: &BlobSidecarRef<'_>,
    ) -> Result<bool, HelperError> {
        Err(unsupported(
            "verify_blob_kzg_proof",
            self.milestone(),
            SpecMilestone::Deneb,
        ))
    }

    /// Verify the KZG proofs of `sidecars` in one batch.
    fn verify_blob_kzg_proof_batch(
        &self,
        _kzg: &dyn KzgVerifier,
        _sidecars: &[BlobSidecarRef<'_>],
    ) -> Result<bool, HelperError> {
        Err(unsupported(
            "verify_blob_kzg_proof_batch",
            self.milestone(),
            SpecMilestone::Deneb,
        ))
    }
}
