//! # Fork Milestones
//!
//! Protocol upgrades in activation order. Helpers dispatch on the milestone
//! active for the epoch being processed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A protocol upgrade boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpecMilestone {
    /// Genesis rules.
    #[default]
    Phase0,
    /// Sync committees.
    Altair,
    /// The merge.
    Bellatrix,
    /// Withdrawals.
    Capella,
    /// Blob sidecars.
    Deneb,
    /// Consolidations and larger effective balances.
    Electra,
}

impl SpecMilestone {
    /// All milestones in activation order.
    pub const ALL: [SpecMilestone; 6] = [
        Self::Phase0,
        Self::Altair,
        Self::Bellatrix,
        Self::Capella,
        Self::Deneb,
        Self::Electra,
    ];

    /// Lower-case protocol name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Phase0 => "phase0",
            Self::Altair => "altair",
            Self::Bellatrix => "bellatrix",
            Self::Capella => "capella",
            Self::Deneb => "deneb",
            Self::Electra => "electra",
        }
    }

    /// Whether this milestone includes everything `other` introduced.
    pub fn is_at_least(&self, other: SpecMilestone) -> bool {
        *self >= other
    }
}

impl fmt::Display for SpecMilestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_are_ordered() {
        for pair in SpecMilestone::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_is_at_least() {
        assert!(SpecMilestone::Electra.is_at_least(SpecMilestone::Deneb));
        assert!(SpecMilestone::Deneb.is_at_least(SpecMilestone::Deneb));
        assert!(!SpecMilestone::Capella.is_at_least(SpecMilestone::Deneb));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SpecMilestone::Bellatrix).unwrap();
        assert_eq!(json, "\"bellatrix\"");
        assert_eq!(SpecMilestone::Deneb.to_string(), "deneb");
    }
}
