//! # Committee Slicing
//!
//! One shuffle per seed, cut into `committee_count` contiguous slices.
//! Boundaries are `len * k / count` and `len * (k + 1) / count`, multiplied
//! before dividing in 128 bits so adjacent committees differ in size by at
//! most one and never overlap.

use super::shuffling::shuffle_indices;
use crate::domain::HelperError;
use crate::ports::CommitteeShuffleCache;
use shared_types::{CommitteeIndex, Seed, ValidatorIndex};

/// `[start, end)` of committee `committee_index` within a list of
/// `list_len` entries.
pub fn committee_bounds(
    list_len: usize,
    committee_index: CommitteeIndex,
    committee_count: u64,
) -> Result<(usize, usize), HelperError> {
    if committee_count == 0 {
        return Err(HelperError::invalid("committee count must be greater than 0"));
    }

    let len = list_len as u128;
    let count = u128::from(committee_count);
    let index = u128::from(committee_index);
    let start = len * index / count;
    let end = len * (index + 1) / count;

    if end > len {
        return Err(HelperError::CommitteeOutOfBounds {
            start,
            end,
            count: list_len as u64,
        });
    }
    // end <= len, and len came from a usize.
    Ok((start as usize, end as usize))
}

/// Members of committee `committee_index` out of `committee_count` for
/// `seed`.
///
/// The full shuffle of `indices` is fetched from `cache`, computed there on
/// first use of the seed.
pub fn compute_committee(
    indices: &[ValidatorIndex],
    seed: &Seed,
    committee_index: CommitteeIndex,
    committee_count: u64,
    rounds: u8,
    cache: &dyn CommitteeShuffleCache,
) -> Result<Vec<ValidatorIndex>, HelperError> {
    let (start, end) = committee_bounds(indices.len(), committee_index, committee_count)?;

    let shuffled = cache.get_or_compute(seed, &|| shuffle_indices(indices, seed, rounds))?;
    let committee = shuffled
        .get(start..end)
        .ok_or(HelperError::CommitteeOutOfBounds {
            start: start as u128,
            end: end as u128,
            count: shuffled.len() as u64,
        })?
        .to_vec();

    helpers_telemetry::log_event!(
        debug,
        "committee",
        "Computed committee",
        committee_index,
        committee_count,
        size = committee.len()
    );
    Ok(committee)
}
