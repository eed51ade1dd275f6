//! # Domain Value Objects
//!
//! Immutable containers hashed during domain separation, plus the result
//! types returned by selection algorithms.

use serde::{Deserialize, Serialize};
use shared_types::{Domain, KzgCommitment, KzgProof, Root, ValidatorIndex, Version};
use tree_hash_derive::TreeHash;

/// Fork version paired with the genesis validators root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, TreeHash)]
pub struct ForkData {
    /// Fork version in effect.
    pub current_version: Version,
    /// Root fixed at genesis.
    pub genesis_validators_root: Root,
}

impl ForkData {
    /// Create fork data.
    pub fn new(current_version: Version, genesis_validators_root: Root) -> Self {
        Self {
            current_version,
            genesis_validators_root,
        }
    }
}

/// Object root bound to a signature domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, TreeHash)]
pub struct SigningData {
    /// Hash-root of the signed object.
    pub object_root: Root,
    /// Signature domain.
    pub domain: Domain,
}

impl SigningData {
    /// Create signing data.
    pub fn new(object_root: Root, domain: Domain) -> Self {
        Self {
            object_root,
            domain,
        }
    }
}

/// The parts of a blob sidecar the helpers inspect.
///
/// The full sidecar (block header, inclusion proof, signature) belongs to
/// the caller; only index, blob and KZG fields are borrowed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlobSidecarRef<'a> {
    /// Position of the blob within its block.
    pub index: u64,
    /// Raw blob bytes.
    pub blob: &'a [u8],
    /// Commitment to the blob polynomial.
    pub kzg_commitment: KzgCommitment,
    /// Proof of the commitment opening.
    pub kzg_proof: KzgProof,
}

/// Outcome of a proposer sampling loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposerDraw {
    /// Selected validator.
    pub index: ValidatorIndex,
    /// Iteration of the sampling loop that accepted it.
    pub iteration: u64,
    /// Random value drawn at that iteration.
    pub random_value: u64,
    /// Largest value the random draw can take (255 or 65535).
    pub max_random_value: u64,
}
