//! # In-Memory Balance Registry
//!
//! Sparse validator-index to effective-balance map for callers (and tests)
//! that do not hold a dense balance list.

use crate::ports::EffectiveBalances;
use shared_types::{Gwei, ValidatorIndex};
use std::collections::HashMap;

/// Sparse effective balance registry.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBalances {
    balances: HashMap<ValidatorIndex, Gwei>,
}

impl InMemoryBalances {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the effective balance of `index`.
    pub fn set(&mut self, index: ValidatorIndex, balance: Gwei) {
        self.balances.insert(index, balance);
    }

    /// Number of known validators.
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Whether no validator is known.
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl FromIterator<(ValidatorIndex, Gwei)> for InMemoryBalances {
    fn from_iter<I: IntoIterator<Item = (ValidatorIndex, Gwei)>>(iter: I) -> Self {
        Self {
            balances: iter.into_iter().collect(),
        }
    }
}

impl EffectiveBalances for InMemoryBalances {
    fn effective_balance(&self, index: ValidatorIndex) -> Option<Gwei> {
        self.balances.get(&index).copied()
    }
}
