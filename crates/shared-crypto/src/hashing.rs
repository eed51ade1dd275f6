//! # SHA-256 Hashing
//!
//! The single digest function behind every pseudorandom choice in the
//! helpers. Inputs are fed as a sequence of byte slices so callers never
//! have to concatenate buffers on the hot path.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// All-zero hash, the starting value of every lazily filled hash block.
pub const ZERO_HASH: Hash = [0u8; 32];

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    let result = Sha256::digest(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash the concatenation of multiple inputs.
pub fn sha256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}
