//! # Attestation Subnet Scheduling
//!
//! A node's long-lived subnets are a pure function of its id and the epoch:
//!
//! - the top `attestation_subnet_prefix_bits` bits of the node id are
//!   permuted with a seed that changes every `epochs_per_subnet_subscription`
//!   epochs;
//! - `node_id mod epochs_per_subnet_subscription` shifts each node's
//!   rotation boundary so the network never re-subscribes all at once.

use super::epoch::EpochMath;
use super::shuffling::compute_shuffled_index;
use crate::domain::HelperError;
use shared_crypto::sha256;
use shared_types::{Epoch, NetworkingConfig, NodeId, Slot, SubnetId, NODE_ID_BITS};

/// Checked copy of the networking constants the scheduler reads.
#[derive(Clone, Copy, Debug)]
struct SubnetParams {
    subnet_count: u64,
    prefix_bits: u32,
    rotation_epochs: u64,
}

impl SubnetParams {
    fn from_config(networking: &NetworkingConfig) -> Result<Self, HelperError> {
        if networking.attestation_subnet_count == 0 {
            return Err(HelperError::invalid("attestation subnet count must be greater than 0"));
        }
        if networking.epochs_per_subnet_subscription == 0 {
            return Err(HelperError::invalid(
                "epochs per subnet subscription must be greater than 0",
            ));
        }
        let prefix_bits = u32::from(networking.attestation_subnet_prefix_bits);
        if prefix_bits == 0 || prefix_bits > 32 {
            return Err(HelperError::invalid(format!(
                "attestation subnet prefix bits must be in 1..=32, got {}",
                prefix_bits
            )));
        }
        Ok(Self {
            subnet_count: networking.attestation_subnet_count,
            prefix_bits,
            rotation_epochs: networking.epochs_per_subnet_subscription,
        })
    }

    /// `node_id mod rotation_epochs`.
    fn node_offset(&self, node_id: &NodeId) -> u64 {
        (*node_id % NodeId::from(self.rotation_epochs)).low_u64()
    }
}

/// Subnet held in per-node slot `index` during `epoch`.
pub fn compute_subscribed_subnet(
    node_id: &NodeId,
    epoch: Epoch,
    index: u64,
    networking: &NetworkingConfig,
    rounds: u8,
) -> Result<SubnetId, HelperError> {
    let params = SubnetParams::from_config(networking)?;

    let prefix_shift = (NODE_ID_BITS - params.prefix_bits) as usize;
    let node_id_prefix = (*node_id >> prefix_shift).low_u64();
    let prefix_space = 1u64 << params.prefix_bits;

    let period = epoch.saturating_add(params.node_offset(node_id)) / params.rotation_epochs;
    let permutation_seed = sha256(&period.to_le_bytes());

    let to_usize = |value: u64| {
        usize::try_from(value)
            .map_err(|_| HelperError::invalid(format!("{} does not fit the platform word", value)))
    };
    let permuted_prefix = compute_shuffled_index(
        to_usize(node_id_prefix)?,
        to_usize(prefix_space)?,
        &permutation_seed,
        rounds,
    )? as u64;

    Ok(permuted_prefix.wrapping_add(index) % params.subnet_count)
}

/// All `subnets_per_node` subnets of `node_id` during `epoch`, in slot order.
pub fn compute_subscribed_subnets(
    node_id: &NodeId,
    epoch: Epoch,
    networking: &NetworkingConfig,
    rounds: u8,
) -> Result<Vec<SubnetId>, HelperError> {
    let subnets = (0..networking.subnets_per_node)
        .map(|index| compute_subscribed_subnet(node_id, epoch, index, networking, rounds))
        .collect::<Result<Vec<_>, _>>()?;

    helpers_telemetry::log_event!(trace, "subnets", "Computed subscribed subnets", epoch, ?subnets);
    Ok(subnets)
}

/// First slot at which `node_id` rotates away from the subnets it holds at
/// `current_slot`.
///
/// Always the start of an epoch strictly after the current one.
pub fn calculate_node_subnet_unsubscription_slot(
    node_id: &NodeId,
    current_slot: Slot,
    networking: &NetworkingConfig,
    epochs: &EpochMath,
) -> Result<Slot, HelperError> {
    let params = SubnetParams::from_config(networking)?;
    let node_offset = params.node_offset(node_id);
    let current_epoch = epochs.compute_epoch_at_slot(current_slot);
    let remainder = current_epoch % params.rotation_epochs;

    // remainder < rotation_epochs and node_offset < rotation_epochs, so the
    // subtractions cannot underflow.
    let mut next_period_epoch = current_epoch
        .saturating_add(params.rotation_epochs - remainder)
        .saturating_sub(node_offset);
    if next_period_epoch <= current_epoch {
        next_period_epoch = next_period_epoch.saturating_add(params.rotation_epochs);
    }

    Ok(epochs.compute_start_slot_at_epoch(next_period_epoch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mainnet_epochs() -> EpochMath {
        EpochMath::new(32, 12, 4).unwrap()
    }

    #[test]
    fn test_subscribed_subnet_vectors() {
        let networking = NetworkingConfig::default();
        let high_bit = NodeId::one() << 255usize;
        assert_eq!(
            compute_subscribed_subnets(&high_bit, 0, &networking, 90).unwrap(),
            vec![27, 28]
        );
        assert_eq!(
            compute_subscribed_subnets(&NodeId::zero(), 0, &networking, 90).unwrap(),
            vec![49, 50]
        );
    }

    #[test]
    fn test_subnets_wrap_around_count() {
        let networking = NetworkingConfig {
            subnets_per_node: 64,
            ..NetworkingConfig::default()
        };
        let subnets = compute_subscribed_subnets(&NodeId::from(12345u64), 3, &networking, 90).unwrap();
        let mut sorted = subnets.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_subnets_stable_within_period() {
        let networking = NetworkingConfig::default();
        // Node 0 has offset 0: epochs 0..256 share one period.
        let at_start = compute_subscribed_subnets(&NodeId::zero(), 0, &networking, 90).unwrap();
        let at_end = compute_subscribed_subnets(&NodeId::zero(), 255, &networking, 90).unwrap();
        assert_eq!(at_start, at_end);
    }

    #[test]
    fn test_invalid_networking_rejected() {
        let zero_rotation = NetworkingConfig {
            epochs_per_subnet_subscription: 0,
            ..NetworkingConfig::default()
        };
        assert!(compute_subscribed_subnets(&NodeId::zero(), 0, &zero_rotation, 90).is_err());

        let wide_prefix = NetworkingConfig {
            attestation_subnet_prefix_bits: 33,
            ..NetworkingConfig::default()
        };
        assert!(compute_subscribed_subnet(&NodeId::zero(), 0, 0, &wide_prefix, 90)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_unsubscription_slot_vectors() {
        let networking = NetworkingConfig::default();
        let epochs = mainnet_epochs();
        let slot = |node: u64, current: Slot| {
            calculate_node_subnet_unsubscription_slot(&NodeId::from(node), current, &networking, &epochs)
                .unwrap()
        };
        assert_eq!(slot(0, 0), 8192);
        assert_eq!(slot(1, 0), 8160);
        assert_eq!(slot(255, 0), 32);
        assert_eq!(slot(10, 3200), 7872);
        assert_eq!(slot(0, 8192), 16384);
    }

    #[test]
    fn test_unsubscription_staggered_and_in_future() {
        let networking = NetworkingConfig::default();
        let epochs = mainnet_epochs();
        let current_slot = 5_000;
        let current_epoch_start =
            epochs.compute_start_slot_at_epoch(epochs.compute_epoch_at_slot(current_slot));

        let a = calculate_node_subnet_unsubscription_slot(&NodeId::from(3u64), current_slot, &networking, &epochs)
            .unwrap();
        let b = calculate_node_subnet_unsubscription_slot(&NodeId::from(4u64), current_slot, &networking, &epochs)
            .unwrap();
        assert_ne!(a, b);
        assert!(a > current_epoch_start);
        assert!(b > current_epoch_start);
        assert_eq!(a % 32, 0);
    }

    #[test]
    fn test_unsubscription_matches_rotation() {
        // Subnets change exactly at the returned slot.
        let networking = NetworkingConfig::default();
        let epochs = mainnet_epochs();
        let node = NodeId::from(77u64);
        let slot = calculate_node_subnet_unsubscription_slot(&node, 0, &networking, &epochs).unwrap();
        let rotation_epoch = epochs.compute_epoch_at_slot(slot);
        let period = |epoch: Epoch| (epoch + 77) / 256;
        assert_eq!(period(rotation_epoch - 1) + 1, period(rotation_epoch));
    }
}
