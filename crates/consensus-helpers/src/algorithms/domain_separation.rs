//! # Domain Separation
//!
//! Fork-bound signature domains:
//!
//! ```text
//! fork_data_root = root(ForkData { version, genesis_validators_root })
//! fork_digest    = fork_data_root[0..4]
//! domain         = domain_type || fork_data_root[0..28]
//! signing_root   = root(SigningData { object_root, domain })
//! ```

use crate::domain::{ForkData, SigningData};
use crate::ports::HashTreeRoot;
use shared_types::{Domain, DomainType, ForkDigest, Root, Version};

/// Hash-root of `(current_version, genesis_validators_root)`.
pub fn compute_fork_data_root(current_version: &Version, genesis_validators_root: &Root) -> Root {
    ForkData::new(*current_version, *genesis_validators_root).hash_tree_root()
}

/// First four bytes of the fork data root.
pub fn compute_fork_digest(current_version: &Version, genesis_validators_root: &Root) -> ForkDigest {
    let root = compute_fork_data_root(current_version, genesis_validators_root);
    let mut digest = [0u8; 4];
    digest.copy_from_slice(&root[..4]);
    digest
}

/// `domain_type || fork_data_root[0..28]`.
pub fn compute_domain(
    domain_type: &DomainType,
    fork_version: &Version,
    genesis_validators_root: &Root,
) -> Domain {
    let root = compute_fork_data_root(fork_version, genesis_validators_root);
    let mut domain = [0u8; 32];
    domain[..4].copy_from_slice(domain_type);
    domain[4..].copy_from_slice(&root[..28]);
    domain
}

/// Signing root of any hash-rooted value.
pub fn compute_signing_root<T>(object: &T, domain: &Domain) -> Root
where
    T: HashTreeRoot + ?Sized,
{
    SigningData::new(object.hash_tree_root(), *domain).hash_tree_root()
}

/// Signing root of a fixed-length byte vector.
///
/// The bytes are packed into 32-byte chunks, the last one zero-padded, and
/// merkleized.
pub fn compute_signing_root_for_bytes(bytes: &[u8], domain: &Domain) -> Root {
    let object_root = tree_hash::merkle_root(bytes, 0).0;
    SigningData::new(object_root, *domain).hash_tree_root()
}

/// Signing root of a `u64`.
pub fn compute_signing_root_for_u64(value: u64, domain: &Domain) -> Root {
    compute_signing_root(&value, domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::domain_types;

    const ZERO_DOMAIN: &str = "00000000f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a9";

    #[test]
    fn test_zero_domain_vector() {
        let domain = compute_domain(&[0; 4], &[0; 4], &[0; 32]);
        assert_eq!(hex::encode(domain), ZERO_DOMAIN);
    }

    #[test]
    fn test_fork_digest_vector() {
        let digest = compute_fork_digest(&[0, 0, 0, 1], &[0x11; 32]);
        assert_eq!(hex::encode(digest), "4e5926ca");
    }

    #[test]
    fn test_domain_prefix_is_type() {
        let domain = compute_domain(&domain_types::BEACON_ATTESTER, &[1, 0, 0, 0], &[5; 32]);
        assert_eq!(&domain[..4], &domain_types::BEACON_ATTESTER);
        let root = compute_fork_data_root(&[1, 0, 0, 0], &[5; 32]);
        assert_eq!(&domain[4..], &root[..28]);
    }

    #[test]
    fn test_domains_differ_per_fork() {
        let a = compute_domain(&domain_types::BEACON_PROPOSER, &[0, 0, 0, 0], &[0; 32]);
        let b = compute_domain(&domain_types::BEACON_PROPOSER, &[1, 0, 0, 0], &[0; 32]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_signing_root_of_u64() {
        let domain: Domain = hex::decode(ZERO_DOMAIN).unwrap().try_into().unwrap();
        assert_eq!(
            hex::encode(compute_signing_root_for_u64(7, &domain)),
            "036294a688a333f25778f9d22c4b0ab33fb324e325d5bb0886e6f03ef701ea67"
        );
    }

    #[test]
    fn test_signing_root_of_bytes_uses_vector_rule() {
        let domain: Domain = hex::decode(ZERO_DOMAIN).unwrap().try_into().unwrap();
        let bytes = [0xffu8; 48];
        let root = compute_signing_root_for_bytes(&bytes, &domain);
        assert_eq!(
            hex::encode(root),
            "e7d0adfec954210c7d305d4acd03006eaa43492122a2a0312245127c58757c15"
        );
        assert_ne!(root, compute_signing_root(&shared_crypto::sha256(&bytes), &domain));
    }

    #[test]
    fn test_short_byte_vector_is_single_chunk() {
        let domain = [3u8; 32];
        let mut chunk = [0u8; 32];
        chunk[..2].copy_from_slice(&[0xab, 0xcd]);
        assert_eq!(
            compute_signing_root_for_bytes(&[0xab, 0xcd], &domain),
            compute_signing_root(&chunk, &domain)
        );
    }

    #[test]
    fn test_signing_root_through_trait_object() {
        let domain = compute_domain(&domain_types::BEACON_PROPOSER, &[0; 4], &[0; 32]);
        let fork = ForkData::new([0, 0, 0, 1], [0x11; 32]);
        let object: &dyn HashTreeRoot = &fork;
        assert_eq!(
            compute_signing_root(object, &domain),
            compute_signing_root(&fork, &domain)
        );
        assert_eq!(
            compute_signing_root(&fork, &domain),
            SigningData::new(compute_fork_data_root(&[0, 0, 0, 1], &[0x11; 32]), domain)
                .hash_tree_root()
        );
    }
}
