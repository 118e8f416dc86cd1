//! Calendar utilities.
//!
//! Pure date helpers shared by every other module: canonical formatting,
//! day arithmetic, day-of-week queries, and inclusive day iteration.
//!
//! # Day-of-week convention
//! [`day_of_week`] numbers days 0..=6 starting at Sunday. The bridge table
//! in the placer is indexed by this number.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::CalendarDay;

/// Sunday.
pub const SUNDAY: u32 = 0;
/// Monday.
pub const MONDAY: u32 = 1;
/// Tuesday.
pub const TUESDAY: u32 = 2;
/// Wednesday.
pub const WEDNESDAY: u32 = 3;
/// Thursday.
pub const THURSDAY: u32 = 4;
/// Friday.
pub const FRIDAY: u32 = 5;
/// Saturday.
pub const SATURDAY: u32 = 6;

/// Formats a date as its canonical zero-padded `YYYY-MM-DD` key.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use custody_calendar::calendar::format;
///
/// let d = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// assert_eq!(format(d).as_str(), "2026-03-01");
/// ```
pub fn format(date: NaiveDate) -> CalendarDay {
    CalendarDay::from_date(date)
}

/// Parses a canonical `YYYY-MM-DD` string.
///
/// Returns `None` for anything that is not a valid calendar date in
/// canonical form (`2026-1-1` is rejected).
pub fn parse(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .filter(|d| format(*d).as_str() == s)
}

/// Shifts a date by `n` days (negative moves backward).
#[inline]
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

/// Day of week, 0 = Sunday … 6 = Saturday.
#[inline]
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Iterates every day in `[start, end]`, ascending.
///
/// The returned range is `Clone`, so it can be restarted from the
/// beginning. Yields nothing when `start > end`.
pub fn iterate_days(start: NaiveDate, end: NaiveDate) -> DayRange {
    DayRange {
        next: Some(start),
        end,
    }
}

/// First date on or after `from` falling on the given weekday.
pub fn next_weekday_on_or_after(from: NaiveDate, weekday: u32) -> NaiveDate {
    let offset = (7 + weekday - day_of_week(from)) % 7;
    add_days(from, i64::from(offset))
}

/// Inclusive, restartable iterator over consecutive days.
#[derive(Debug, Clone)]
pub struct DayRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DayRange {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.succ_opt();
        Some(format(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(d) if d <= self.end => {
                let n = (self.end - d).num_days() as usize + 1;
                (n, Some(n))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DayRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_zero_pads() {
        assert_eq!(format(d(2026, 1, 5)).as_str(), "2026-01-05");
        assert_eq!(format(d(2027, 12, 31)).as_str(), "2027-12-31");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("2026-06-04"), Some(d(2026, 6, 4)));
        assert_eq!(parse("2026-02-30"), None);
        assert_eq!(parse("2026-6-4"), None);
        assert_eq!(parse("garbage"), None);
    }

    #[test]
    fn test_add_days_crosses_year() {
        assert_eq!(add_days(d(2026, 12, 30), 3), d(2027, 1, 2));
        assert_eq!(add_days(d(2026, 3, 1), -1), d(2026, 2, 28));
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(day_of_week(d(2026, 1, 23)), FRIDAY);
        assert_eq!(day_of_week(d(2026, 1, 25)), SUNDAY);
        assert_eq!(day_of_week(d(2026, 6, 4)), THURSDAY);
        assert_eq!(day_of_week(d(2026, 2, 17)), TUESDAY);
    }

    #[test]
    fn test_iterate_days_inclusive() {
        let days: Vec<String> = iterate_days(d(2026, 12, 30), d(2027, 1, 2))
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            days,
            vec!["2026-12-30", "2026-12-31", "2027-01-01", "2027-01-02"]
        );
    }

    #[test]
    fn test_iterate_days_restartable() {
        let range = iterate_days(d(2026, 1, 1), d(2026, 1, 7));
        assert_eq!(range.len(), 7);
        let first: Vec<_> = range.clone().collect();
        let second: Vec<_> = range.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterate_days_empty_when_reversed() {
        assert_eq!(iterate_days(d(2026, 1, 2), d(2026, 1, 1)).count(), 0);
    }

    #[test]
    fn test_next_weekday_on_or_after() {
        // 2026-01-01 is a Thursday
        assert_eq!(next_weekday_on_or_after(d(2026, 1, 1), FRIDAY), d(2026, 1, 2));
        assert_eq!(next_weekday_on_or_after(d(2026, 1, 2), FRIDAY), d(2026, 1, 2));
        assert_eq!(next_weekday_on_or_after(d(2026, 1, 3), FRIDAY), d(2026, 1, 9));
    }
}
