//! # Core Primitives
//!
//! Fixed-width aliases for the values the helpers exchange with the rest of
//! a beacon node. Byte arrays stay plain arrays so they can be hashed and
//! compared without conversion.

// Re-export U256 from primitive-types for node identifiers.
pub use primitive_types::U256;

/// A 32-byte value (hash output, root, seed).
pub type Bytes32 = [u8; 32];

/// A 4-byte value (fork version, domain type, fork digest).
pub type Bytes4 = [u8; 4];

/// Slot number.
pub type Slot = u64;

/// Epoch number.
pub type Epoch = u64;

/// Balance amount in Gwei.
pub type Gwei = u64;

/// Index of a validator in the registry.
pub type ValidatorIndex = u64;

/// Index of a committee within a slot.
pub type CommitteeIndex = u64;

/// Pseudorandom key for one shuffle or selection.
pub type Seed = Bytes32;

/// Merkle root of a structured value.
pub type Root = Bytes32;

/// Fork version identifying a protocol upgrade.
pub type Version = Bytes4;

/// Signature domain type (first 4 bytes of a [`Domain`]).
pub type DomainType = Bytes4;

/// Signature domain: domain type followed by 28 bytes of fork-data root.
pub type Domain = Bytes32;

/// First 4 bytes of a fork-data root, used in gossip topic names.
pub type ForkDigest = Bytes4;

/// 256-bit network node identifier.
pub type NodeId = U256;

/// Attestation gossip subnet identifier.
pub type SubnetId = u64;

/// Compressed KZG commitment.
pub type KzgCommitment = [u8; 48];

/// Compressed KZG proof.
pub type KzgProof = [u8; 48];

/// Versioned hash of a KZG commitment.
pub type VersionedHash = Bytes32;

/// Slot of the genesis block.
pub const GENESIS_SLOT: Slot = 0;

/// Well-known signature domain types.
pub mod domain_types {
    use super::DomainType;

    /// Block proposals.
    pub const BEACON_PROPOSER: DomainType = [0x00, 0x00, 0x00, 0x00];
    /// Attestations.
    pub const BEACON_ATTESTER: DomainType = [0x01, 0x00, 0x00, 0x00];
    /// RANDAO reveals.
    pub const RANDAO: DomainType = [0x02, 0x00, 0x00, 0x00];
    /// Deposits (always signed against the genesis fork version).
    pub const DEPOSIT: DomainType = [0x03, 0x00, 0x00, 0x00];
    /// Voluntary exits.
    pub const VOLUNTARY_EXIT: DomainType = [0x04, 0x00, 0x00, 0x00];
    /// Aggregator selection proofs.
    pub const SELECTION_PROOF: DomainType = [0x05, 0x00, 0x00, 0x00];
    /// Aggregate-and-proof messages.
    pub const AGGREGATE_AND_PROOF: DomainType = [0x06, 0x00, 0x00, 0x00];
    /// Sync committee messages.
    pub const SYNC_COMMITTEE: DomainType = [0x07, 0x00, 0x00, 0x00];
    /// Builder / application-specific signing.
    pub const APPLICATION_BUILDER: DomainType = [0x00, 0x00, 0x00, 0x01];
}
