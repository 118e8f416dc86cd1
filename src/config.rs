//! Generator configuration.
//!
//! Everything the engine needs besides the catalog and the override
//! snapshot: the target year, the generation window, the reference
//! Friday anchoring the weekend alternation, the reporting year for
//! statistics, and the owner shown when a day has no entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{CalendarDay, Owner};

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Target year. Fixed specials resolve in this year.
    pub year: i32,
    /// First day of the generation window (inclusive).
    pub window_start: NaiveDate,
    /// Last day of the generation window. Fridays on this day are not
    /// enumerated.
    pub window_end: NaiveDate,
    /// Friday whose weekend always belongs to [`Owner::PartyA`].
    pub reference_friday: NaiveDate,
    /// Year counted by the statistics.
    pub reporting_year: i32,
    /// Owner reported for days without an entry.
    pub fallback_owner: Owner,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_year(2026, date(2026, 1, 23))
    }
}

impl GeneratorConfig {
    /// Standard window for `year`: Jan 1 through Jan 10 of the next year.
    pub fn for_year(year: i32, reference_friday: NaiveDate) -> Self {
        Self {
            year,
            window_start: date(year, 1, 1),
            window_end: date(year + 1, 1, 10),
            reference_friday,
            reporting_year: year,
            fallback_owner: Owner::PartyB,
        }
    }

    /// Sets the reference Friday.
    pub fn with_reference_friday(mut self, friday: NaiveDate) -> Self {
        self.reference_friday = friday;
        self
    }

    /// Sets the generation window.
    pub fn with_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.window_start = start;
        self.window_end = end;
        self
    }

    /// Sets the reporting year.
    pub fn with_reporting_year(mut self, year: i32) -> Self {
        self.reporting_year = year;
        self
    }

    /// Sets the fallback owner.
    pub fn with_fallback_owner(mut self, owner: Owner) -> Self {
        self.fallback_owner = owner;
        self
    }

    /// Canonical key of the reference Friday.
    pub fn reference_day(&self) -> CalendarDay {
        CalendarDay::from_date(self.reference_friday)
    }

    /// Whether a date falls inside `[window_start, window_end]`.
    pub fn in_window(&self, date: NaiveDate) -> bool {
        date >= self.window_start && date <= self.window_end
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.window_start > config.window_end {
            return Err(Error::Config(format!(
                "window start {} is after window end {}",
                config.window_start, config.window_end
            )));
        }
        Ok(config)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}
