//! Reporting over generated schedules.
//!
//! - [`ScheduleStats`]: per-owner day counts for the reporting year.
//! - [`dashboard`]: today's status, next day for an owner, event listing.

pub mod dashboard;
mod stats;

pub use dashboard::{
    days_until, entry_for, next_day_for, today_status, upcoming_events, TodayStatus, UpcomingEvent,
};
pub use stats::ScheduleStats;
