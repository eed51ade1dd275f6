//! # Domain Module
//!
//! Errors, value objects and invariants shared by every helper algorithm.

pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use errors::*;
pub use invariants::*;
pub use value_objects::*;
