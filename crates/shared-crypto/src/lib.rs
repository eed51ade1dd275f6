//! # Shared Crypto - Hash Primitive
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Shuffling, proposer sampling, subnet seeds |
//!
//! Every deployment must use the same hash function byte-for-byte; any
//! deviation changes committee assignments and subnet seeds. Hash-tree
//! roots come from the `tree_hash` crate, which hashes with SHA-256 too.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;

// Re-exports
pub use hashing::{sha256, sha256_many, Hash, ZERO_HASH};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
