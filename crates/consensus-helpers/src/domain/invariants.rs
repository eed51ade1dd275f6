//! # Domain Invariants
//!
//! Properties every honest node relies on. Tests and callers that want to
//! double-check a result can assert these directly.

use super::errors::HelperError;
use super::value_objects::ProposerDraw;
use shared_types::{Gwei, ValidatorIndex};
use std::collections::HashSet;

/// Invariant: a shuffle is a bijection on `0..mapping.len()`.
pub fn invariant_is_permutation(mapping: &[usize]) -> bool {
    let mut seen = vec![false; mapping.len()];
    for &target in mapping {
        match seen.get_mut(target) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Invariant: committees of one shuffle cover every index exactly once.
pub fn invariant_committees_partition(
    committees: &[Vec<ValidatorIndex>],
    indices: &[ValidatorIndex],
) -> Result<(), HelperError> {
    let total: usize = committees.iter().map(Vec::len).sum();
    if total != indices.len() {
        return Err(HelperError::invalid(format!(
            "committees hold {} members for {} indices",
            total,
            indices.len()
        )));
    }

    let expected: HashSet<ValidatorIndex> = indices.iter().copied().collect();
    let mut seen = HashSet::with_capacity(total);
    for member in committees.iter().flatten() {
        if !expected.contains(member) {
            return Err(HelperError::invalid(format!(
                "validator {} is not in the index list",
                member
            )));
        }
        if !seen.insert(*member) {
            return Err(HelperError::invalid(format!(
                "validator {} assigned twice",
                member
            )));
        }
    }
    Ok(())
}

/// Stake-weighted acceptance test: `balance * max_random >= cap * random`,
/// evaluated in 128 bits.
pub fn is_proposer_accepted(
    effective_balance: Gwei,
    max_effective_balance: Gwei,
    random_value: u64,
    max_random_value: u64,
) -> bool {
    u128::from(effective_balance) * u128::from(max_random_value)
        >= u128::from(max_effective_balance) * u128::from(random_value)
}

/// Invariant: a returned proposer passed the acceptance test for the value
/// drawn at its accepting iteration.
pub fn invariant_proposer_acceptance(
    draw: &ProposerDraw,
    effective_balance: Gwei,
    max_effective_balance: Gwei,
) -> bool {
    draw.random_value <= draw.max_random_value
        && is_proposer_accepted(
            effective_balance,
            max_effective_balance,
            draw.random_value,
            draw.max_random_value,
        )
}
