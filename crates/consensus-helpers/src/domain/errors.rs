//! # Domain Errors
//!
//! Every failure is synchronous and deterministic: the same inputs always
//! produce the same error. Nothing here is retried.

use shared_types::{ConfigError, SpecMilestone, ValidatorIndex};
use thiserror::Error;

/// Helper error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelperError {
    /// A documented precondition does not hold.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Shuffle position outside the list.
    #[error("Index {index} out of range for {count} entries")]
    IndexOutOfRange {
        /// Requested position
        index: u64,
        /// Number of entries
        count: u64,
    },

    /// Proposer selection needs at least one candidate.
    #[error("Candidate list is empty")]
    EmptyCandidates,

    /// No effective balance is known for a candidate.
    #[error("Unknown validator: {0}")]
    UnknownValidator(ValidatorIndex),

    /// Committee slice does not fit the index list.
    #[error("Committee slice [{start}, {end}) exceeds {count} indices")]
    CommitteeOutOfBounds {
        /// Slice start
        start: u128,
        /// Slice end (exclusive)
        end: u128,
        /// Number of indices
        count: u64,
    },

    /// Network configuration failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Operation introduced by a later fork.
    #[error("{operation} is not supported at {milestone} (requires {required})")]
    UnsupportedForFork {
        /// Operation name
        operation: &'static str,
        /// Milestone of the helpers that declined
        milestone: SpecMilestone,
        /// First milestone providing the operation
        required: SpecMilestone,
    },
}

impl HelperError {
    /// True for every malformed-input error; false for fork-gating.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::UnsupportedForFork { .. })
    }

    /// Shorthand for [`HelperError::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}
