//! Event catalog: the static priority rules.
//!
//! The catalog describes everything that outranks a plain weekend:
//!
//! - [`Holiday`]: a single date expanded into a bridge range around the
//!   nearest weekend.
//! - [`RecessBlock`]: an inclusive multi-day range (year-end recess).
//! - [`FixedSpecial`]: a recurring month/day resolved in the configured year.
//! - [`Commemorative`]: a single fully dated special day.
//!
//! [`EventCatalog::builtin`] is the compiled-in table. Catalogs can also be
//! loaded from JSON for tools and tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Owner;
use crate::error::Result;

/// Label used for fixed specials that should read as ordinary weekends.
pub const WEEKEND_LABEL: &str = "Weekend";

/// A holiday rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Display label.
    pub label: String,
    /// The holiday itself.
    pub date: NaiveDate,
    /// Party receiving the whole bridge range.
    pub owner: Owner,
}

/// An inclusive fixed date range owned by one party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecessBlock {
    /// Display label.
    pub label: String,
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
    /// Owning party.
    pub owner: Owner,
    /// Date shown for this block in event listings.
    pub reference: NaiveDate,
}

/// A recurring single-day special, resolved against the configured year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSpecial {
    /// Display label.
    pub label: String,
    /// Owning party.
    pub owner: Owner,
    /// Month (1-12).
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

impl FixedSpecial {
    /// The concrete date in `year`, or `None` if month/day is invalid there.
    pub fn resolve(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// A fully dated single-day special.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commemorative {
    /// Display label.
    pub label: String,
    /// The day.
    pub date: NaiveDate,
    /// Owning party.
    pub owner: Owner,
}

/// The complete static rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCatalog {
    /// Holiday rules, placed in order.
    pub holidays: Vec<Holiday>,
    /// Recess blocks, placed in order after holidays.
    pub recess_blocks: Vec<RecessBlock>,
    /// Recurring specials, placed after recess blocks.
    pub fixed_specials: Vec<FixedSpecial>,
    /// Dated specials, placed last.
    pub commemoratives: Vec<Commemorative>,
}

impl EventCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday.
    pub fn with_holiday(mut self, label: impl Into<String>, date: NaiveDate, owner: Owner) -> Self {
        self.holidays.push(Holiday {
            label: label.into(),
            date,
            owner,
        });
        self
    }

    /// Adds a recess block. Its listing reference date defaults to `start`.
    pub fn with_recess(
        mut self,
        label: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        owner: Owner,
    ) -> Self {
        self.recess_blocks.push(RecessBlock {
            label: label.into(),
            start,
            end,
            owner,
            reference: start,
        });
        self
    }

    /// Adds a recurring special.
    pub fn with_fixed_special(
        mut self,
        label: impl Into<String>,
        owner: Owner,
        month: u32,
        day: u32,
    ) -> Self {
        self.fixed_specials.push(FixedSpecial {
            label: label.into(),
            owner,
            month,
            day,
        });
        self
    }

    /// Adds a dated special.
    pub fn with_commemorative(
        mut self,
        label: impl Into<String>,
        date: NaiveDate,
        owner: Owner,
    ) -> Self {
        self.commemoratives.push(Commemorative {
            label: label.into(),
            date,
            owner,
        });
        self
    }

    /// Parses a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The compiled-in 2026 catalog.
    ///
    /// Holidays are split between the parties so that days off balance
    /// out across the year.
    pub fn builtin() -> Self {
        use Owner::{PartyA, PartyB};

        let holidays = [
            ("Carnival (5 days)", (2026, 2, 17), PartyA),
            ("Good Friday", (2026, 4, 3), PartyB),
            ("Tiradentes (4 days)", (2026, 4, 21), PartyB),
            ("Labour Day (3 days)", (2026, 5, 1), PartyA),
            ("Corpus Christi (4 days)", (2026, 6, 4), PartyB),
            ("Independence Day (3 days)", (2026, 9, 7), PartyA),
            ("Our Lady of Aparecida (3 days)", (2026, 10, 12), PartyB),
            ("All Souls' Day (3 days)", (2026, 11, 2), PartyA),
        ];

        let mut catalog = Self::new();
        for (label, (y, m, d), owner) in holidays {
            catalog = catalog.with_holiday(label, ymd(y, m, d), owner);
        }

        catalog.recess_blocks = vec![
            RecessBlock {
                label: "Christmas (week)".into(),
                start: ymd(2026, 12, 21),
                end: ymd(2026, 12, 27),
                owner: PartyB,
                reference: ymd(2026, 12, 25),
            },
            RecessBlock {
                label: "New Year (week)".into(),
                start: ymd(2026, 12, 28),
                end: ymd(2027, 1, 3),
                owner: PartyA,
                reference: ymd(2027, 1, 1),
            },
        ];

        catalog
            .with_fixed_special(WEEKEND_LABEL, PartyB, 7, 18)
            .with_fixed_special(WEEKEND_LABEL, PartyA, 8, 7)
            .with_fixed_special(WEEKEND_LABEL, PartyB, 11, 27)
            .with_commemorative("Mother's Day", ymd(2026, 5, 10), PartyB)
            .with_commemorative("Father's Day", ymd(2026, 8, 9), PartyA)
    }
}

// Builtin table dates are compile-time constants known to be valid.
fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}
