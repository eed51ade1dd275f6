//! Helpers for phase0 through Capella.
//!
//! Every shared operation comes from the provided methods of
//! [`ForkHelpers`]; blob operations decline.

use crate::algorithms::EpochMath;
use crate::domain::HelperError;
use crate::ports::ForkHelpers;
use shared_types::{SpecConfig, SpecMilestone};
use std::sync::Arc;

/// Helpers for forks without blobs.
#[derive(Clone, Debug)]
pub struct BaseHelpers {
    milestone: SpecMilestone,
    config: Arc<SpecConfig>,
    epochs: EpochMath,
}

impl BaseHelpers {
    /// Helpers for `milestone`, which must predate Deneb.
    pub fn new(milestone: SpecMilestone, config: Arc<SpecConfig>) -> Result<Self, HelperError> {
        if milestone.is_at_least(SpecMilestone::Deneb) {
            return Err(HelperError::invalid(format!(
                "{} requires dedicated helpers",
                milestone
            )));
        }
        Self::for_milestone_unchecked(milestone, config)
    }

    /// Shared construction for later forks wrapping the base helpers.
    pub(crate) fn for_milestone_unchecked(
        milestone: SpecMilestone,
        config: Arc<SpecConfig>,
    ) -> Result<Self, HelperError> {
        let epochs = EpochMath::from_config(&config)?;
        Ok(Self {
            milestone,
            config,
            epochs,
        })
    }
}

impl ForkHelpers for BaseHelpers {
    fn milestone(&self) -> SpecMilestone {
        self.milestone
    }

    fn config(&self) -> &SpecConfig {
        &self.config
    }

    fn epochs(&self) -> &EpochMath {
        &self.epochs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockKzgVerifier;

    fn phase0() -> BaseHelpers {
        BaseHelpers::new(SpecMilestone::Phase0, Arc::new(SpecConfig::mainnet())).unwrap()
    }

    #[test]
    fn test_rejects_blob_forks() {
        let config = Arc::new(SpecConfig::mainnet());
        assert!(BaseHelpers::new(SpecMilestone::Deneb, Arc::clone(&config)).is_err());
        assert!(BaseHelpers::new(SpecMilestone::Capella, config).is_ok());
    }

    #[test]
    fn test_epoch_vectors() {
        let helpers = phase0();
        assert_eq!(helpers.compute_epoch_at_slot(63), 1);
        assert_eq!(helpers.compute_start_slot_at_epoch(2), 64);
        assert_eq!(helpers.compute_activation_exit_epoch(0), 5);
    }

    #[test]
    fn test_blob_operations_decline() {
        let helpers = phase0();
        let err = helpers.kzg_commitment_to_versioned_hash(&[0; 48]).unwrap_err();
        assert_eq!(
            err,
            HelperError::UnsupportedForFork {
                operation: "kzg_commitment_to_versioned_hash",
                milestone: SpecMilestone::Phase0,
                required: SpecMilestone::Deneb,
            }
        );
        assert!(helpers.verify_blob_sidecar_completeness(&[], &[]).is_err());
        assert!(helpers.validate_blob_sidecars_against_block(&[], &[]).is_err());
        let kzg = MockKzgVerifier::accepting();
        assert!(helpers.verify_blob_kzg_proof_batch(&kzg, &[]).is_err());
        assert_eq!(kzg.batches(), 0);
    }

    #[test]
    fn test_max_request_blocks() {
        assert_eq!(phase0().max_request_blocks(), 1024);
    }

    #[test]
    fn test_genesis_domain_uses_configured_version() {
        let config = SpecConfig::minimal();
        let version = config.genesis_fork_version;
        let helpers = BaseHelpers::new(SpecMilestone::Altair, Arc::new(config)).unwrap();
        assert_eq!(
            helpers.compute_genesis_domain(&[1, 0, 0, 0]),
            helpers.compute_domain(&[1, 0, 0, 0], &version, &[0; 32])
        );
    }
}
