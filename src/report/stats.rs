//! Per-owner day counts.
//!
//! Counts schedule entries whose key falls in the reporting year, grouped
//! by owner. Days of the window that spill into the next year are not
//! counted. Days with no entry are not counted for either party.

use serde::{Deserialize, Serialize};

use crate::models::{Owner, Schedule};

/// Day tally for the reporting year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Days owned by [`Owner::PartyA`].
    pub party_a: u32,
    /// Days owned by [`Owner::PartyB`].
    pub party_b: u32,
}

impl ScheduleStats {
    /// Tallies `schedule` for `year`.
    pub fn calculate(schedule: &Schedule, year: i32) -> Self {
        let mut stats = Self::default();
        for entry in schedule.iter().filter(|e| e.date.in_year(year)) {
            match entry.owner {
                Owner::PartyA => stats.party_a += 1,
                Owner::PartyB => stats.party_b += 1,
            }
        }
        stats
    }

    /// Days counted for one owner.
    pub fn count(&self, owner: Owner) -> u32 {
        match owner {
            Owner::PartyA => self.party_a,
            Owner::PartyB => self.party_b,
        }
    }

    /// Total assigned days in the year.
    pub fn total(&self) -> u32 {
        self.party_a + self.party_b
    }

    /// `party_a - party_b`; positive means `PartyA` has more days.
    pub fn balance(&self) -> i64 {
        i64::from(self.party_a) - i64::from(self.party_b)
    }
}
