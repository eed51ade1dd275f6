//! # Shared Types Crate
//!
//! Primitive aliases, fork milestones and protocol configuration used by the
//! consensus helpers.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: network constants live in [`SpecConfig`] and
//!   nowhere else.
//! - **Immutable per network**: a configuration is validated once and then
//!   only read.

pub mod config;
pub mod entities;
pub mod errors;
pub mod milestone;

pub use config::{ForkSchedule, NetworkingConfig, SpecConfig, FAR_FUTURE_EPOCH, NODE_ID_BITS};
pub use entities::*;
pub use errors::ConfigError;
pub use milestone::SpecMilestone;
