//! Milestone-keyed helper registry.
//!
//! Holds one helper set per milestone, built once from a validated
//! configuration. Callers pick the set for the fork they are processing
//! instead of sharing one object that degrades silently.

use super::{BaseHelpers, DenebHelpers, ElectraHelpers};
use crate::domain::HelperError;
use crate::ports::ForkHelpers;
use shared_types::{Epoch, Slot, SpecConfig, SpecMilestone};
use std::sync::Arc;

/// Helper sets for every milestone of one network.
pub struct HelpersRegistry {
    config: Arc<SpecConfig>,
    /// Indexed by milestone, in `SpecMilestone::ALL` order.
    helpers: Vec<Arc<dyn ForkHelpers>>,
}

impl HelpersRegistry {
    /// Validate `config` and build helpers for every milestone.
    pub fn new(config: SpecConfig) -> Result<Self, HelperError> {
        config.validate()?;
        let config = Arc::new(config);

        let helpers = SpecMilestone::ALL
            .iter()
            .map(|milestone| Self::build(*milestone, Arc::clone(&config)))
            .collect::<Result<Vec<_>, _>>()?;

        helpers_telemetry::log_event!(
            info,
            "registry",
            "Helpers registry initialized",
            config = %config.config_name,
            milestones = helpers.len()
        );
        Ok(Self { config, helpers })
    }

    fn build(
        milestone: SpecMilestone,
        config: Arc<SpecConfig>,
    ) -> Result<Arc<dyn ForkHelpers>, HelperError> {
        Ok(match milestone {
            SpecMilestone::Phase0
            | SpecMilestone::Altair
            | SpecMilestone::Bellatrix
            | SpecMilestone::Capella => Arc::new(BaseHelpers::new(milestone, config)?),
            SpecMilestone::Deneb => Arc::new(DenebHelpers::new(config)?),
            SpecMilestone::Electra => Arc::new(ElectraHelpers::new(config)?),
        })
    }

    /// Network configuration.
    pub fn config(&self) -> &SpecConfig {
        &self.config
    }

    /// Helpers for `milestone`.
    pub fn for_milestone(&self, milestone: SpecMilestone) -> Arc<dyn ForkHelpers> {
        Arc::clone(&self.helpers[milestone as usize])
    }

    /// Helpers for the milestone active at `epoch`.
    pub fn at_epoch(&self, epoch: Epoch) -> Arc<dyn ForkHelpers> {
        self.for_milestone(self.config.milestone_at_epoch(epoch))
    }

    /// Helpers for the milestone active at `slot`.
    pub fn at_slot(&self, slot: Slot) -> Arc<dyn ForkHelpers> {
        // Every helper set shares the same epoch constants.
        let epoch = self.helpers[0].compute_epoch_at_slot(slot);
        self.at_epoch(epoch)
    }
}
