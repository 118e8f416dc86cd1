//! Priority placer: holidays, recess blocks, and specials.
//!
//! # Holiday bridges
//!
//! Each holiday expands into a contiguous range that absorbs the adjacent
//! weekend. Offsets come from a table indexed by day of week (0 = Sunday):
//!
//! | Holiday on | Start | End |
//! |-----------|-------|-----|
//! | Sunday | −2 | 0 |
//! | Monday | −2 | 0 |
//! | Tuesday | −3 | 0 |
//! | Wednesday | 0 | 0 |
//! | Thursday | 0 | +3 |
//! | Friday | 0 | +2 |
//! | Saturday | 0 | 0 |
//!
//! The range is then snapped so it never begins or ends mid-weekend: a
//! start on Saturday moves back one day, a start on Sunday moves back two;
//! an end on Saturday moves forward one, an end on Friday moves forward two.

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::{add_days, day_of_week, iterate_days, FRIDAY, SATURDAY, SUNDAY};
use crate::config::GeneratorConfig;
use crate::models::{
    priority, CalendarDay, EventCatalog, EventKind, Holiday, Schedule, ScheduleEntry,
};

/// (start offset, end offset) per day of week, Sunday first.
const BRIDGE_OFFSETS: [(i64, i64); 7] = [
    (-2, 0), // Sunday
    (-2, 0), // Monday
    (-3, 0), // Tuesday
    (0, 0),  // Wednesday
    (0, 3),  // Thursday
    (0, 2),  // Friday
    (0, 0),  // Saturday
];

/// Computes the inclusive bridge range for a holiday date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use custody_calendar::generator::bridge_range;
///
/// // Thursday holiday runs through Sunday
/// let thu = NaiveDate::from_ymd_opt(2026, 6, 4).unwrap();
/// let (start, end) = bridge_range(thu);
/// assert_eq!(start, thu);
/// assert_eq!(end, NaiveDate::from_ymd_opt(2026, 6, 7).unwrap());
/// ```
pub fn bridge_range(holiday: NaiveDate) -> (NaiveDate, NaiveDate) {
    let (start_offset, end_offset) = BRIDGE_OFFSETS[day_of_week(holiday) as usize];
    let start = add_days(holiday, start_offset);
    let end = add_days(holiday, end_offset);
    snap_to_weekend(start, end)
}

/// Moves range edges off partial weekends.
///
/// Checks run in sequence on the moving value, so a Saturday start ends
/// on Friday and is not adjusted again.
fn snap_to_weekend(mut start: NaiveDate, mut end: NaiveDate) -> (NaiveDate, NaiveDate) {
    if day_of_week(start) == SATURDAY {
        start = add_days(start, -1);
    }
    if day_of_week(start) == SUNDAY {
        start = add_days(start, -2);
    }
    if day_of_week(end) == SATURDAY {
        end = add_days(end, 1);
    }
    if day_of_week(end) == FRIDAY {
        end = add_days(end, 2);
    }
    (start, end)
}

/// Writes every catalog rule into the schedule.
///
/// Holidays go in at [`priority::HOLIDAY`], then recess blocks, fixed
/// specials, and commemoratives at [`priority::FIXED`]. All writes use
/// [`Schedule::set_or_overwrite`], so among equal tiers the later rule wins.
pub fn place_priority_events(
    schedule: &mut Schedule,
    catalog: &EventCatalog,
    config: &GeneratorConfig,
) {
    for holiday in &catalog.holidays {
        place_holiday(schedule, holiday);
    }

    for block in &catalog.recess_blocks {
        fill_range(
            schedule,
            block.start,
            block.end,
            |day| ScheduleEntry::new(day, block.owner, EventKind::Recess, &block.label, priority::FIXED),
        );
    }

    for special in &catalog.fixed_specials {
        // Invalid month/day combinations are rejected by validation.
        if let Some(date) = special.resolve(config.year) {
            schedule.set_or_overwrite(ScheduleEntry::new(
                date,
                special.owner,
                EventKind::Special,
                &special.label,
                priority::FIXED,
            ));
        }
    }

    for special in &catalog.commemoratives {
        schedule.set_or_overwrite(ScheduleEntry::new(
            special.date,
            special.owner,
            EventKind::Special,
            &special.label,
            priority::FIXED,
        ));
    }

    debug!(
        holidays = catalog.holidays.len(),
        recess_blocks = catalog.recess_blocks.len(),
        specials = catalog.fixed_specials.len() + catalog.commemoratives.len(),
        placed_days = schedule.len(),
        "placed priority events"
    );
}

fn place_holiday(schedule: &mut Schedule, holiday: &Holiday) {
    let (start, end) = bridge_range(holiday.date);
    fill_range(schedule, start, end, |day| {
        ScheduleEntry::new(day, holiday.owner, EventKind::Holiday, &holiday.label, priority::HOLIDAY)
    });
}

fn fill_range<F>(schedule: &mut Schedule, start: NaiveDate, end: NaiveDate, make: F)
where
    F: Fn(CalendarDay) -> ScheduleEntry,
{
    for day in iterate_days(start, end) {
        schedule.set_or_overwrite(make(day));
    }
}
