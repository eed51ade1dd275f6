//! # Proposer Selection
//!
//! Stake-weighted rejection sampling over a shuffled candidate list.
//!
//! Iteration `i` looks at candidate `shuffled_index(i mod n)` and draws a
//! random value from `hash(seed || u64_le(i / values_per_block))`. The
//! candidate is accepted iff
//! `balance * max_random_value >= max_effective_balance * random_value`.
//!
//! The loop has no iteration cap. A candidate at the maximum balance is
//! always accepted, and a zero draw accepts anyone, so in practice it ends
//! within a handful of iterations.

use super::shuffling::compute_shuffled_index;
use crate::domain::{is_proposer_accepted, HelperError, ProposerDraw};
use crate::ports::EffectiveBalances;
use shared_crypto::{sha256_many, Hash, ZERO_HASH};
use shared_types::{Gwei, Seed, ValidatorIndex};

/// Largest single-byte draw.
pub const MAX_RANDOM_BYTE: u64 = 255;

/// Largest two-byte draw.
pub const MAX_RANDOM_VALUE: u64 = 65535;

/// Width of the random value drawn per iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomDraw {
    /// One byte per iteration, 32 per hash block (phase0 through Deneb).
    Byte,
    /// One little-endian `u16` per iteration, 16 per hash block (Electra).
    TwoBytes,
}

impl RandomDraw {
    /// Draws taken from one hash block.
    pub fn values_per_block(self) -> u64 {
        match self {
            Self::Byte => 32,
            Self::TwoBytes => 16,
        }
    }

    /// Upper bound of a draw.
    pub fn max_value(self) -> u64 {
        match self {
            Self::Byte => MAX_RANDOM_BYTE,
            Self::TwoBytes => MAX_RANDOM_VALUE,
        }
    }

    /// Draw for iteration `iteration` from its hash block.
    fn value_at(self, block: &Hash, iteration: u64) -> u64 {
        // Offsets stay below 32: iteration mod values_per_block, scaled by width.
        let slot = (iteration % self.values_per_block()) as usize;
        match self {
            Self::Byte => u64::from(block[slot]),
            Self::TwoBytes => {
                let offset = slot * 2;
                u64::from(u16::from_le_bytes([block[offset], block[offset + 1]]))
            }
        }
    }
}

/// Run the sampling loop and report which draw accepted the proposer.
pub fn compute_proposer_draw<B>(
    candidates: &[ValidatorIndex],
    seed: &Seed,
    balances: &B,
    max_effective_balance: Gwei,
    rounds: u8,
    draw: RandomDraw,
) -> Result<ProposerDraw, HelperError>
where
    B: EffectiveBalances + ?Sized,
{
    if candidates.is_empty() {
        return Err(HelperError::EmptyCandidates);
    }

    let total = candidates.len();
    let per_block = draw.values_per_block();
    let mut block = ZERO_HASH;
    let mut iteration: u64 = 0;

    loop {
        let position = compute_shuffled_index((iteration % total as u64) as usize, total, seed, rounds)?;
        let candidate = candidates[position];

        if iteration % per_block == 0 {
            block = sha256_many(&[&seed[..], &(iteration / per_block).to_le_bytes()]);
        }
        let random_value = draw.value_at(&block, iteration);

        let balance = balances
            .effective_balance(candidate)
            .ok_or(HelperError::UnknownValidator(candidate))?;

        if is_proposer_accepted(balance, max_effective_balance, random_value, draw.max_value()) {
            helpers_telemetry::log_event!(
                debug,
                "proposer",
                "Selected proposer",
                proposer = candidate,
                iterations = iteration + 1
            );
            return Ok(ProposerDraw {
                index: candidate,
                iteration,
                random_value,
                max_random_value: draw.max_value(),
            });
        }

        iteration += 1;
    }
}

/// Proposer among `candidates` using one-byte draws.
pub fn compute_proposer_index<B>(
    candidates: &[ValidatorIndex],
    seed: &Seed,
    balances: &B,
    max_effective_balance: Gwei,
    rounds: u8,
) -> Result<ValidatorIndex, HelperError>
where
    B: EffectiveBalances + ?Sized,
{
    compute_proposer_draw(
        candidates,
        seed,
        balances,
        max_effective_balance,
        rounds,
        RandomDraw::Byte,
    )
    .map(|draw| draw.index)
}

/// Proposer among `candidates` using two-byte draws against the Electra
/// balance ceiling.
pub fn compute_proposer_index_electra<B>(
    candidates: &[ValidatorIndex],
    seed: &Seed,
    balances: &B,
    max_effective_balance_electra: Gwei,
    rounds: u8,
) -> Result<ValidatorIndex, HelperError>
where
    B: EffectiveBalances + ?Sized,
{
    compute_proposer_draw(
        candidates,
        seed,
        balances,
        max_effective_balance_electra,
        rounds,
        RandomDraw::TwoBytes,
    )
    .map(|draw| draw.index)
}
