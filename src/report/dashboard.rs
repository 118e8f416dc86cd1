//! Dashboard queries over a finished schedule.
//!
//! Everything here is read-only and relative to a caller-supplied
//! "today", so results are reproducible in tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{priority, CalendarDay, EventCatalog, Owner, Schedule, ScheduleEntry};

/// Who has custody today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayStatus {
    /// Today's key.
    pub date: CalendarDay,
    /// Owner of today (fallback owner if unassigned).
    pub owner: Owner,
    /// Whether `owner` came from an entry rather than the fallback.
    pub assigned: bool,
}

/// One row of the upcoming-events list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEvent {
    /// Date shown for the event.
    pub date: NaiveDate,
    /// Display label.
    pub label: String,
    /// Owning party.
    pub owner: Owner,
    /// Whether the event is before today.
    pub is_past: bool,
}

/// The entry for `today`, if any.
pub fn entry_for<'a>(schedule: &'a Schedule, today: NaiveDate) -> Option<&'a ScheduleEntry> {
    schedule.get(CalendarDay::from_date(today).as_str())
}

/// Today's owner, falling back to `fallback` when the day is unassigned.
pub fn today_status(schedule: &Schedule, today: NaiveDate, fallback: Owner) -> TodayStatus {
    let date = CalendarDay::from_date(today);
    match schedule.get(date.as_str()) {
        Some(entry) => TodayStatus {
            owner: entry.owner,
            assigned: true,
            date,
        },
        None => TodayStatus {
            owner: fallback,
            assigned: false,
            date,
        },
    }
}

/// Earliest entry at or after `today` owned by `owner`.
pub fn next_day_for(schedule: &Schedule, owner: Owner, today: NaiveDate) -> Option<&ScheduleEntry> {
    let from = CalendarDay::from_date(today);
    schedule
        .entries
        .range::<CalendarDay, _>(from..)
        .map(|(_, entry)| entry)
        .find(|entry| entry.owner == owner && entry.priority >= priority::WEEKEND)
}

/// Whole days from `today` until `day`; zero or negative means today or past.
pub fn days_until(today: NaiveDate, day: NaiveDate) -> i64 {
    (day - today).num_days()
}

/// Holidays plus one reference date per recess block, sorted by date.
///
/// Fixed specials and commemoratives are not listed.
pub fn upcoming_events(catalog: &EventCatalog, today: NaiveDate) -> Vec<UpcomingEvent> {
    let holidays = catalog
        .holidays
        .iter()
        .map(|h| (h.date, &h.label, h.owner));
    let recesses = catalog
        .recess_blocks
        .iter()
        .map(|r| (r.reference, &r.label, r.owner));

    let mut events: Vec<UpcomingEvent> = holidays
        .chain(recesses)
        .map(|(date, label, owner)| UpcomingEvent {
            date,
            label: label.clone(),
            owner,
            is_past: date < today,
        })
        .collect();
    events.sort_by_key(|e| e.date);
    events
}
