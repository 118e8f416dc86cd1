//! Owners, event kinds, and priority tiers.
//!
//! # Priority
//! Priorities totally order conflicting claims on the same date: higher
//! wins. The tiers used by the generator are:
//!
//! | Tier | Value | Written by |
//! |------|-------|-----------|
//! | [`priority::WEEKEND`] | 1 | Weekend allocator |
//! | [`priority::HOLIDAY`] | 3 | Holiday bridges |
//! | [`priority::FIXED`] | 4 | Recess blocks, fixed specials |
//! | [`priority::OVERRIDE`] | 10 | Manual override entries |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Claim strength of a schedule entry (higher wins).
pub type Priority = i32;

/// Named priority tiers.
pub mod priority {
    use super::Priority;

    /// Alternating weekends.
    pub const WEEKEND: Priority = 1;
    /// Holiday bridge ranges.
    pub const HOLIDAY: Priority = 3;
    /// Recess blocks and fixed single-day specials.
    pub const FIXED: Priority = 4;
    /// Manual adjustments from the override map.
    pub const OVERRIDE: Priority = 10;
}

/// One of the two custodial parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    /// First party. Owns the reference weekend.
    PartyA,
    /// Second party.
    PartyB,
}

impl Owner {
    /// The other party.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Owner::PartyA => Owner::PartyB,
            Owner::PartyB => Owner::PartyA,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::PartyA => write!(f, "party_a"),
            Owner::PartyB => write!(f, "party_b"),
        }
    }
}

/// What kind of rule produced an entry.
///
/// Descriptive only: resolution is driven by [`Priority`], never by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Holiday bridge day.
    Holiday,
    /// Alternating weekend day.
    Weekend,
    /// Fixed single-day special.
    Special,
    /// Extended recess block.
    Recess,
    /// Synthesized from an override with no underlying entry.
    Manual,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Owner::PartyA.opposite(), Owner::PartyB);
        assert_eq!(Owner::PartyB.opposite(), Owner::PartyA);
        assert_eq!(Owner::PartyA.opposite().opposite(), Owner::PartyA);
    }

    #[test]
    fn test_owner_serde() {
        assert_eq!(serde_json::to_string(&Owner::PartyA).unwrap(), "\"party_a\"");
        let o: Owner = serde_json::from_str("\"party_b\"").unwrap();
        assert_eq!(o, Owner::PartyB);
        assert_eq!(Owner::PartyB.to_string(), "party_b");
    }

    #[test]
    fn test_priority_tiers_ordered() {
        assert!(priority::WEEKEND < priority::HOLIDAY);
        assert!(priority::HOLIDAY < priority::FIXED);
        assert!(priority::FIXED < priority::OVERRIDE);
    }
}
