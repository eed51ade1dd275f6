//! Service Layer
//!
//! One [`ForkHelpers`](crate::ports::ForkHelpers) implementation per group
//! of forks, and a registry selecting the right one for a milestone, epoch
//! or slot.

pub mod base;
pub mod deneb;
pub mod electra;
pub mod registry;

pub use base::BaseHelpers;
pub use deneb::DenebHelpers;
pub use electra::ElectraHelpers;
pub use registry::HelpersRegistry;
