//! # Error Types
//!
//! Errors raised while building or loading protocol configuration.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A field holds a value the helpers cannot work with.
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Offending field name.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// Fork epochs are not in upgrade order.
    #[error("Fork schedule out of order: {later} activates before {earlier}")]
    ForkOrder {
        /// Milestone that should come first.
        earlier: &'static str,
        /// Milestone scheduled too early.
        later: &'static str,
    },

    /// Serialized configuration could not be parsed.
    #[error("Config parse error: {0}")]
    Parse(String),
}
