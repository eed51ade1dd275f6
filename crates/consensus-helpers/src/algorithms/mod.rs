//! # Algorithms Module
//!
//! Pure helper computations. Nothing here holds state; the only shared
//! mutable collaborator is the caller's shuffle cache, passed in by
//! reference.

pub mod blobs;
pub mod committee;
pub mod domain_separation;
pub mod epoch;
pub mod proposer;
pub mod shuffling;
pub mod subnets;

pub use blobs::{
    kzg_commitment_to_versioned_hash, validate_blob_sidecars_against_block, verify_blob_kzg_proof,
    verify_blob_kzg_proof_batch, verify_blob_sidecar_completeness, VERSIONED_HASH_VERSION_KZG,
};
pub use committee::{committee_bounds, compute_committee};
pub use domain_separation::{
    compute_domain, compute_fork_data_root, compute_fork_digest, compute_signing_root,
    compute_signing_root_for_bytes, compute_signing_root_for_u64,
};
pub use epoch::EpochMath;
pub use proposer::{
    compute_proposer_draw, compute_proposer_index, compute_proposer_index_electra, RandomDraw,
    MAX_RANDOM_BYTE, MAX_RANDOM_VALUE,
};
pub use shuffling::{compute_shuffled_index, shuffle_indices, shuffle_list, MAX_SHUFFLE_LIST_SIZE};
pub use subnets::{
    calculate_node_subnet_unsubscription_slot, compute_subscribed_subnet,
    compute_subscribed_subnets,
};
