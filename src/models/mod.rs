//! Custody calendar domain models.
//!
//! Provides the core data types shared by the generator and the
//! reporting layer.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Owner`] | One of the two custodial parties |
//! | [`CalendarDay`] | Canonical `YYYY-MM-DD` key |
//! | [`ScheduleEntry`] | One day's owner, kind, label, priority |
//! | [`Schedule`] | Day → entry map plus diagnostics |
//! | [`EventCatalog`] | Static holidays, recess blocks, specials |
//! | [`OverrideMap`] | Snapshot of manual corrections |

mod catalog;
mod day;
mod overrides;
mod owner;
mod schedule;

pub use catalog::{Commemorative, EventCatalog, FixedSpecial, Holiday, RecessBlock, WEEKEND_LABEL};
pub use day::CalendarDay;
pub use overrides::OverrideMap;
pub use owner::{priority, EventKind, Owner, Priority};
pub use schedule::{Diagnostic, DiagnosticKind, Schedule, ScheduleEntry};
