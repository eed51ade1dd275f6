//! # Swap-or-Not Shuffle
//!
//! The pseudorandom permutation behind committee assignment, proposer
//! sampling and subnet rotation.
//!
//! Two views of the same permutation:
//! - [`compute_shuffled_index`] follows one position through the rounds in
//!   ascending order. Cost: two hashes per round.
//! - [`shuffle_list`] permutes a whole list with rounds in descending order,
//!   walking mirror pairs and reusing one hash per 256 positions.
//!
//! They agree: `shuffle_list(xs)[i] == xs[compute_shuffled_index(i)]`.
//!
//! Byte layout is fixed by the protocol: the round is one byte, the position
//! window (`position / 256`) is a little-endian `u32`.

use crate::domain::HelperError;
use shared_crypto::{sha256_many, Hash, ZERO_HASH};
use shared_types::{Seed, ValidatorIndex};

/// Largest list the 4-byte position window can address (`2^32 * 256`).
pub const MAX_SHUFFLE_LIST_SIZE: u64 = 1 << 40;

/// Reject lists whose positions cannot be encoded.
fn check_list_size(list_size: usize) -> Result<(), HelperError> {
    if list_size as u64 > MAX_SHUFFLE_LIST_SIZE {
        return Err(HelperError::invalid(format!(
            "list size {} exceeds {}",
            list_size, MAX_SHUFFLE_LIST_SIZE
        )));
    }
    Ok(())
}

/// `u64_le(hash(seed || round)[0..8]) mod list_size`.
fn pivot(seed: &Seed, round: u8, list_size: usize) -> usize {
    let digest = sha256_many(&[&seed[..], &[round]]);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    (u64::from_le_bytes(bytes) % list_size as u64) as usize
}

/// `hash(seed || round || u32_le(window))`.
fn source(seed: &Seed, round: u8, window: usize) -> Hash {
    // Window fits in u32: list sizes are capped at MAX_SHUFFLE_LIST_SIZE.
    sha256_many(&[&seed[..], &[round], &(window as u32).to_le_bytes()])
}

/// Bit `bit_index` (0..256) of a source block.
fn source_bit(source: &Hash, bit_index: usize) -> bool {
    (source[bit_index / 8] >> (bit_index & 0x07)) & 1 == 1
}

/// Position of `index` after shuffling `0..index_count` with `seed`.
///
/// Fails with [`HelperError::IndexOutOfRange`] when `index >= index_count`
/// (which includes an empty list).
pub fn compute_shuffled_index(
    index: usize,
    index_count: usize,
    seed: &Seed,
    rounds: u8,
) -> Result<usize, HelperError> {
    if index >= index_count {
        return Err(HelperError::IndexOutOfRange {
            index: index as u64,
            count: index_count as u64,
        });
    }
    check_list_size(index_count)?;

    let mut current = index;
    for round in 0..rounds {
        let pivot = pivot(seed, round, index_count);
        let flip = (pivot + index_count - current) % index_count;
        let position = current.max(flip);
        let source = source(seed, round, position / 256);
        if source_bit(&source, position % 256) {
            current = flip;
        }
    }
    Ok(current)
}

/// Shuffle `input` in place.
///
/// An empty list is left untouched.
pub fn shuffle_list<T>(input: &mut [T], seed: &Seed, rounds: u8) -> Result<(), HelperError> {
    let list_size = input.len();
    if list_size == 0 {
        return Ok(());
    }
    check_list_size(list_size)?;

    for round in (0..rounds).rev() {
        let pivot = pivot(seed, round, list_size);
        let mirror_start = (pivot + 2) / 2;
        let mirror_end = (pivot + list_size) / 2;

        let mut block = ZERO_HASH;
        for i in mirror_start..=mirror_end {
            let (flip, bit_index) = if i <= pivot {
                let flip = pivot - i;
                let bit_index = i & 0xff;
                if bit_index == 0 || i == mirror_start {
                    block = source(seed, round, i / 256);
                }
                (flip, bit_index)
            } else {
                // Position is `flip` here; its window changes when the low
                // byte wraps from 0x00 down to 0xff.
                let flip = pivot + list_size - i;
                let bit_index = flip & 0xff;
                if bit_index == 0xff || i == pivot + 1 {
                    block = source(seed, round, flip / 256);
                }
                (flip, bit_index)
            };

            if source_bit(&block, bit_index) {
                input.swap(i, flip);
            }
        }
    }

    helpers_telemetry::log_event!(
        trace,
        "shuffling",
        "Shuffled list",
        list_size = list_size,
        rounds = rounds
    );
    Ok(())
}

/// Shuffled copy of a validator index list.
pub fn shuffle_indices(
    indices: &[ValidatorIndex],
    seed: &Seed,
    rounds: u8,
) -> Result<Vec<ValidatorIndex>, HelperError> {
    let mut shuffled = indices.to_vec();
    shuffle_list(&mut shuffled, seed, rounds)?;
    Ok(shuffled)
}
