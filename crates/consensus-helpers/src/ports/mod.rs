//! # Ports Layer (Hexagonal Architecture)
//!
//! - `inbound`: the per-fork helper API callers program against.
//! - `outbound`: what the helpers need from the outside world.

pub mod inbound;
pub mod outbound;

pub use inbound::ForkHelpers;
pub use outbound::{
    CommitteeShuffleCache, EffectiveBalances, HashTreeRoot, KzgVerifier, MockKzgVerifier,
};
