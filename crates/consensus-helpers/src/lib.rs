//! # Consensus Helpers
//!
//! Deterministic pseudorandom selection and domain separation for a
//! proof-of-stake beacon chain.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Swap-or-not shuffling (single index and whole list)
//! - Committee slicing over a seed-keyed shuffle cache
//! - Stake-weighted proposer selection
//! - Epoch and slot arithmetic
//! - Fork digests, signature domains and signing roots
//! - Attestation subnet assignment and rotation
//! - Blob sidecar checks from Deneb onward
//!
//! ## Fork Dispatch
//!
//! | Milestones | Helpers | Differences |
//! |------------|---------|-------------|
//! | Phase0 to Capella | [`BaseHelpers`] | Blob operations decline |
//! | Deneb | [`DenebHelpers`] | Blob checks, smaller request limit |
//! | Electra | [`ElectraHelpers`] | Two-byte proposer draws |
//!
//! ## Module Structure
//!
//! ```text
//! consensus-helpers/
//! ├── domain/          # Errors, ForkData/SigningData, invariants
//! ├── algorithms/      # Shuffling, committees, proposers, domains, subnets
//! ├── ports/           # ForkHelpers API + outbound traits
//! ├── adapters/        # Shuffle caches, balance registry
//! └── service/         # Per-fork helpers and the registry
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryBalances, LruShuffleCache, ShuffleCacheStats, UncachedShuffle};
pub use algorithms::{
    calculate_node_subnet_unsubscription_slot, committee_bounds, compute_committee,
    compute_domain, compute_fork_data_root, compute_fork_digest, compute_proposer_index,
    compute_proposer_index_electra, compute_shuffled_index, compute_signing_root,
    compute_signing_root_for_bytes, compute_signing_root_for_u64, compute_subscribed_subnets,
    kzg_commitment_to_versioned_hash, shuffle_list, EpochMath,
};
pub use domain::{
    invariant_committees_partition, invariant_is_permutation, invariant_proposer_acceptance,
    BlobSidecarRef, ForkData, HelperError, ProposerDraw, SigningData,
};
pub use ports::{CommitteeShuffleCache, EffectiveBalances, ForkHelpers, HashTreeRoot, KzgVerifier};
pub use service::{BaseHelpers, DenebHelpers, ElectraHelpers, HelpersRegistry};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
