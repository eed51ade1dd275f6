//! # Epoch and Slot Arithmetic
//!
//! Floor division everywhere. Subtractions saturate at zero and
//! multiplications saturate at `u64::MAX`, so no input can wrap.

use crate::domain::HelperError;
use shared_types::{Epoch, Slot, SpecConfig, GENESIS_SLOT};
use std::num::NonZeroU64;

/// Epoch/slot/time conversions for one network's constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpochMath {
    slots_per_epoch: NonZeroU64,
    seconds_per_slot: NonZeroU64,
    max_seed_lookahead: Epoch,
}

impl EpochMath {
    /// Build from raw constants; zero divisors are rejected.
    pub fn new(
        slots_per_epoch: u64,
        seconds_per_slot: u64,
        max_seed_lookahead: Epoch,
    ) -> Result<Self, HelperError> {
        let slots_per_epoch = NonZeroU64::new(slots_per_epoch)
            .ok_or_else(|| HelperError::invalid("slots per epoch must be greater than 0"))?;
        let seconds_per_slot = NonZeroU64::new(seconds_per_slot)
            .ok_or_else(|| HelperError::invalid("seconds per slot must be greater than 0"))?;
        Ok(Self {
            slots_per_epoch,
            seconds_per_slot,
            max_seed_lookahead,
        })
    }

    /// Build from a network configuration.
    pub fn from_config(config: &SpecConfig) -> Result<Self, HelperError> {
        Self::new(
            config.slots_per_epoch,
            config.seconds_per_slot,
            config.max_seed_lookahead,
        )
    }

    /// Slots in one epoch.
    pub fn slots_per_epoch(&self) -> u64 {
        self.slots_per_epoch.get()
    }

    /// Seconds in one slot.
    pub fn seconds_per_slot(&self) -> u64 {
        self.seconds_per_slot.get()
    }

    /// Epoch containing `slot`.
    pub fn compute_epoch_at_slot(&self, slot: Slot) -> Epoch {
        slot / self.slots_per_epoch
    }

    /// First slot of `epoch`.
    pub fn compute_start_slot_at_epoch(&self, epoch: Epoch) -> Slot {
        epoch.saturating_mul(self.slots_per_epoch.get())
    }

    /// Last slot of `epoch`.
    pub fn compute_end_slot_at_epoch(&self, epoch: Epoch) -> Slot {
        self.compute_start_slot_at_epoch(epoch)
            .saturating_add(self.slots_per_epoch.get() - 1)
    }

    /// Slot in progress at unix `time`; times before genesis map to slot 0.
    pub fn compute_slot_at_time(&self, genesis_time: u64, time: u64) -> Slot {
        time.saturating_sub(genesis_time) / self.seconds_per_slot
    }

    /// Unix time at which `slot` starts.
    pub fn compute_time_at_slot(&self, genesis_time: u64, slot: Slot) -> u64 {
        let slots_since_genesis = slot.saturating_sub(GENESIS_SLOT);
        genesis_time.saturating_add(slots_since_genesis.saturating_mul(self.seconds_per_slot.get()))
    }

    /// Whether `block_slot` starts a new `n`-epoch period relative to
    /// `parent_slot`.
    pub fn is_slot_at_nth_epoch_boundary(
        &self,
        block_slot: Slot,
        parent_slot: Slot,
        n: u64,
    ) -> Result<bool, HelperError> {
        if n == 0 {
            return Err(HelperError::invalid("n must be greater than 0"));
        }
        let block_period = self.compute_epoch_at_slot(block_slot) / n;
        let parent_period = self.compute_epoch_at_slot(parent_slot) / n;
        Ok(block_period > parent_period)
    }

    /// Epoch at which an activation or exit initiated in `epoch` takes
    /// effect.
    pub fn compute_activation_exit_epoch(&self, epoch: Epoch) -> Epoch {
        epoch
            .saturating_add(1)
            .saturating_add(self.max_seed_lookahead)
    }

    /// First slot whose state can answer beacon committee queries for the
    /// epoch containing `slot`.
    pub fn earliest_queryable_slot_for_beacon_committee_at_target_slot(&self, slot: Slot) -> Slot {
        self.earliest_queryable_slot_for_beacon_committee_in_target_epoch(
            self.compute_epoch_at_slot(slot),
        )
    }

    /// First slot whose state can answer beacon committee queries for
    /// `epoch`: the start of the previous epoch, or of epoch 0 itself.
    pub fn earliest_queryable_slot_for_beacon_committee_in_target_epoch(
        &self,
        epoch: Epoch,
    ) -> Slot {
        let previous_epoch = if epoch > 0 { epoch - 1 } else { epoch };
        self.compute_start_slot_at_epoch(previous_epoch)
    }
}
