//! Protocol configuration.
//!
//! One [`SpecConfig`] describes a network instance: epoch geometry, shuffle
//! round count, balance caps, the fork schedule and the gossip-subnet
//! parameters. It is validated on construction and immutable afterwards.
//!
//! # Example
//!
//! ```ignore
//! use shared_types::SpecConfig;
//!
//! let config = SpecConfig::minimal().with_shuffle_round_count(90);
//! config.validate()?;
//! ```

use crate::entities::{Epoch, Gwei, Version};
use crate::errors::ConfigError;
use crate::milestone::SpecMilestone;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, DeserializeAs, SerializeAs};

/// Sentinel for a fork that is not scheduled.
pub const FAR_FUTURE_EPOCH: Epoch = u64::MAX;

/// Width of a network node identifier in bits.
pub const NODE_ID_BITS: u32 = 256;

/// `0x`-prefixed hex for fixed-size byte arrays. The prefix is optional
/// when parsing.
pub struct PrefixedHex;

impl<const N: usize> SerializeAs<[u8; N]> for PrefixedHex {
    fn serialize_as<S: Serializer>(source: &[u8; N], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(source)))
    }
}

impl<'de, const N: usize> DeserializeAs<'de, [u8; N]> for PrefixedHex {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<[u8; N], D::Error> {
        let text = String::deserialize(deserializer)?;
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(&text);
        let mut bytes = [0u8; N];
        hex::decode_to_slice(digits, &mut bytes).map_err(serde::de::Error::custom)?;
        Ok(bytes)
    }
}

/// Epochs at which each upgrade activates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkSchedule {
    /// Altair activation epoch.
    pub altair_fork_epoch: Epoch,
    /// Bellatrix activation epoch.
    pub bellatrix_fork_epoch: Epoch,
    /// Capella activation epoch.
    pub capella_fork_epoch: Epoch,
    /// Deneb activation epoch.
    pub deneb_fork_epoch: Epoch,
    /// Electra activation epoch.
    pub electra_fork_epoch: Epoch,
}

impl Default for ForkSchedule {
    fn default() -> Self {
        Self {
            altair_fork_epoch: FAR_FUTURE_EPOCH,
            bellatrix_fork_epoch: FAR_FUTURE_EPOCH,
            capella_fork_epoch: FAR_FUTURE_EPOCH,
            deneb_fork_epoch: FAR_FUTURE_EPOCH,
            electra_fork_epoch: FAR_FUTURE_EPOCH,
        }
    }
}

impl ForkSchedule {
    /// Every milestone active from genesis.
    pub fn all_at_genesis() -> Self {
        Self {
            altair_fork_epoch: 0,
            bellatrix_fork_epoch: 0,
            capella_fork_epoch: 0,
            deneb_fork_epoch: 0,
            electra_fork_epoch: 0,
        }
    }

    /// Activation epoch of a milestone (`Phase0` is always 0).
    pub fn fork_epoch(&self, milestone: SpecMilestone) -> Epoch {
        match milestone {
            SpecMilestone::Phase0 => 0,
            SpecMilestone::Altair => self.altair_fork_epoch,
            SpecMilestone::Bellatrix => self.bellatrix_fork_epoch,
            SpecMilestone::Capella => self.capella_fork_epoch,
            SpecMilestone::Deneb => self.deneb_fork_epoch,
            SpecMilestone::Electra => self.electra_fork_epoch,
        }
    }

    /// Latest milestone whose activation epoch is `<= epoch`.
    pub fn milestone_at_epoch(&self, epoch: Epoch) -> SpecMilestone {
        SpecMilestone::ALL
            .iter()
            .rev()
            .copied()
            .find(|milestone| self.fork_epoch(*milestone) <= epoch)
            .unwrap_or(SpecMilestone::Phase0)
    }

    /// Fork epochs must not decrease along the upgrade order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pair in SpecMilestone::ALL.windows(2) {
            if self.fork_epoch(pair[1]) < self.fork_epoch(pair[0]) {
                return Err(ConfigError::ForkOrder {
                    earlier: pair[0].name(),
                    later: pair[1].name(),
                });
            }
        }
        Ok(())
    }
}

/// Gossip-subnet parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkingConfig {
    /// Number of attestation subnets.
    pub attestation_subnet_count: u64,
    /// Subnets each node subscribes to.
    pub subnets_per_node: u64,
    /// Node-id bits used to pick the subnet permutation input.
    pub attestation_subnet_prefix_bits: u8,
    /// Length of a subscription period in epochs.
    pub epochs_per_subnet_subscription: u64,
    /// Max blocks per by-range request before Deneb.
    pub max_request_blocks: u64,
    /// Max blocks per by-range request from Deneb onward.
    pub max_request_blocks_deneb: u64,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            attestation_subnet_count: 64,
            subnets_per_node: 2,
            attestation_subnet_prefix_bits: 6,
            epochs_per_subnet_subscription: 256,
            max_request_blocks: 1024,
            max_request_blocks_deneb: 128,
        }
    }
}

impl NetworkingConfig {
    /// Validate subnet geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attestation_subnet_count == 0 {
            return Err(invalid("attestation_subnet_count", "must be greater than 0"));
        }
        if self.subnets_per_node > self.attestation_subnet_count {
            return Err(invalid(
                "subnets_per_node",
                format!(
                    "{} exceeds attestation_subnet_count {}",
                    self.subnets_per_node, self.attestation_subnet_count
                ),
            ));
        }
        if self.attestation_subnet_prefix_bits == 0 || self.attestation_subnet_prefix_bits > 32 {
            return Err(invalid(
                "attestation_subnet_prefix_bits",
                format!("{} not in 1..=32", self.attestation_subnet_prefix_bits),
            ));
        }
        if self.epochs_per_subnet_subscription == 0 {
            return Err(invalid("epochs_per_subnet_subscription", "must be greater than 0"));
        }
        Ok(())
    }
}

/// Protocol constants for one network instance.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecConfig {
    /// Preset name (`mainnet`, `minimal`, ...).
    pub config_name: String,
    /// Fork version at genesis, `0x`-hex encoded in serialized form.
    #[serde_as(as = "PrefixedHex")]
    pub genesis_fork_version: Version,
    /// Slots in one epoch.
    pub slots_per_epoch: u64,
    /// Seconds in one slot.
    pub seconds_per_slot: u64,
    /// Swap-or-not rounds per shuffle.
    pub shuffle_round_count: u8,
    /// Effective balance cap before Electra.
    pub max_effective_balance: Gwei,
    /// Effective balance cap from Electra onward.
    pub max_effective_balance_electra: Gwei,
    /// Epochs between seed derivation and use.
    pub max_seed_lookahead: Epoch,
    /// Upgrade activation epochs.
    pub fork_schedule: ForkSchedule,
    /// Gossip-subnet parameters.
    pub networking: NetworkingConfig,
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl SpecConfig {
    /// Mainnet preset.
    pub fn mainnet() -> Self {
        Self {
            config_name: "mainnet".to_string(),
            genesis_fork_version: [0x00, 0x00, 0x00, 0x00],
            slots_per_epoch: 32,
            seconds_per_slot: 12,
            shuffle_round_count: 90,
            max_effective_balance: 32_000_000_000,
            max_effective_balance_electra: 2_048_000_000_000,
            max_seed_lookahead: 4,
            fork_schedule: ForkSchedule {
                altair_fork_epoch: 74_240,
                bellatrix_fork_epoch: 144_896,
                capella_fork_epoch: 194_048,
                deneb_fork_epoch: 269_568,
                electra_fork_epoch: 364_032,
            },
            networking: NetworkingConfig::default(),
        }
    }

    /// Minimal preset used by tests and local devnets.
    pub fn minimal() -> Self {
        Self {
            config_name: "minimal".to_string(),
            genesis_fork_version: [0x00, 0x00, 0x00, 0x01],
            slots_per_epoch: 8,
            seconds_per_slot: 6,
            shuffle_round_count: 10,
            max_effective_balance: 32_000_000_000,
            max_effective_balance_electra: 2_048_000_000_000,
            max_seed_lookahead: 4,
            fork_schedule: ForkSchedule::default(),
            networking: NetworkingConfig::default(),
        }
    }

    /// Parse a JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate every field the helpers divide by or shift with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.validate_inner();
        if let Err(ref e) = result {
            tracing::warn!(config = %self.config_name, error = %e, "Rejected network config");
        }
        result
    }

    fn validate_inner(&self) -> Result<(), ConfigError> {
        if self.slots_per_epoch == 0 {
            return Err(invalid("slots_per_epoch", "must be greater than 0"));
        }
        if self.seconds_per_slot == 0 {
            return Err(invalid("seconds_per_slot", "must be greater than 0"));
        }
        if self.shuffle_round_count == 0 {
            return Err(invalid("shuffle_round_count", "must be greater than 0"));
        }
        if self.max_effective_balance == 0 {
            return Err(invalid("max_effective_balance", "must be greater than 0"));
        }
        if self.max_effective_balance_electra < self.max_effective_balance {
            return Err(invalid(
                "max_effective_balance_electra",
                "must not be below max_effective_balance",
            ));
        }
        self.fork_schedule.validate()?;
        self.networking.validate()
    }

    /// Milestone active at `epoch`.
    pub fn milestone_at_epoch(&self, epoch: Epoch) -> SpecMilestone {
        self.fork_schedule.milestone_at_epoch(epoch)
    }

    /// Builder-style method to set the shuffle round count
    pub fn with_shuffle_round_count(mut self, rounds: u8) -> Self {
        self.shuffle_round_count = rounds;
        self
    }

    /// Builder-style method to set slots per epoch
    pub fn with_slots_per_epoch(mut self, slots: u64) -> Self {
        self.slots_per_epoch = slots;
        self
    }

    /// Builder-style method to set the genesis fork version
    pub fn with_genesis_fork_version(mut self, version: Version) -> Self {
        self.genesis_fork_version = version;
        self
    }

    /// Builder-style method to replace the fork schedule
    pub fn with_fork_schedule(mut self, schedule: ForkSchedule) -> Self {
        self.fork_schedule = schedule;
        self
    }

    /// Builder-style method to replace the networking parameters
    pub fn with_networking(mut self, networking: NetworkingConfig) -> Self {
        self.networking = networking;
        self
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
}
