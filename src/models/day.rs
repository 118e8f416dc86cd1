//! Canonical calendar day keys.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::{Error, Result};

/// A day keyed by its canonical `YYYY-MM-DD` string.
///
/// All schedule keys and comparisons use this string form. For well-formed
/// keys the lexicographic order is chronological. Keys built from
/// [`NaiveDate`] are always well-formed; keys built from raw strings are
/// not checked, so override snapshots may carry malformed keys through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(String);

impl CalendarDay {
    /// Wraps a raw key without validation.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Canonical key for a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// Parses a key, rejecting anything that is not a valid date.
    pub fn parse(key: &str) -> Result<Self> {
        let date = crate::calendar::parse(key).ok_or_else(|| Error::InvalidDate(key.into()))?;
        Ok(Self::from_date(date))
    }

    /// The key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The date this key denotes, if it is well-formed.
    pub fn to_date(&self) -> Option<NaiveDate> {
        crate::calendar::parse(&self.0)
    }

    /// Whether this key lies in the given year (by `YYYY-` prefix).
    pub fn in_year(&self, year: i32) -> bool {
        self.0
            .strip_prefix(year.to_string().as_str())
            .is_some_and(|rest| rest.starts_with('-'))
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CalendarDay {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl From<&str> for CalendarDay {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
