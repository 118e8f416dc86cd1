//! Override layer: manual corrections win over every rule.

use tracing::trace;

use crate::models::{priority, EventKind, OverrideMap, Schedule, ScheduleEntry};

/// Label of entries synthesized for override days with no prior entry.
pub const MANUAL_LABEL: &str = "Manual Adjustment";

/// Merges an override snapshot into the schedule.
///
/// For every key with an owner: an existing entry keeps its kind, label,
/// and priority and only takes the new owner; otherwise a
/// [`EventKind::Manual`] entry is inserted at [`priority::OVERRIDE`].
/// Cleared keys (`None`) are ignored. Keys are not validated.
///
/// Returns the number of overrides applied.
pub fn apply_overrides(schedule: &mut Schedule, overrides: &OverrideMap) -> usize {
    let mut applied = 0;
    for (day, owner) in overrides.active() {
        if !schedule.set_owner(day.as_str(), owner) {
            schedule.set_or_overwrite(ScheduleEntry::new(
                day.clone(),
                owner,
                EventKind::Manual,
                MANUAL_LABEL,
                priority::OVERRIDE,
            ));
        }
        trace!(%day, %owner, "applied override");
        applied += 1;
    }
    applied
}
