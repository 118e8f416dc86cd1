//! Manual override snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CalendarDay, Owner};
use crate::error::Result;

/// Full snapshot of manual corrections, keyed by day.
///
/// `Some(owner)` forces that owner on the day. `None` means "cleared" and
/// has no effect on generation. Keys are not validated.
///
/// Serialized as a JSON object, e.g. `{"2026-03-01": "party_b"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideMap(BTreeMap<CalendarDay, Option<Owner>>);

impl OverrideMap {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override (builder style).
    pub fn with(mut self, day: impl Into<CalendarDay>, owner: Owner) -> Self {
        self.0.insert(day.into(), Some(owner));
        self
    }

    /// Sets or clears the override for a day.
    pub fn insert(&mut self, day: impl Into<CalendarDay>, owner: Option<Owner>) {
        self.0.insert(day.into(), owner);
    }

    /// Removes a day from the snapshot entirely.
    pub fn remove(&mut self, day: &str) -> Option<Option<Owner>> {
        self.0.remove(day)
    }

    /// The override owner for a day, if one is set.
    pub fn get(&self, day: &str) -> Option<Owner> {
        self.0.get(day).copied().flatten()
    }

    /// All keys with their values, including cleared ones.
    pub fn iter(&self) -> impl Iterator<Item = (&CalendarDay, Option<Owner>)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    /// Only the keys that actually set an owner.
    pub fn active(&self) -> impl Iterator<Item = (&CalendarDay, Owner)> {
        self.0.iter().filter_map(|(k, v)| v.map(|o| (k, o)))
    }

    /// Number of keys (including cleared ones).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a snapshot from its JSON object form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<(CalendarDay, Option<Owner>)> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = (CalendarDay, Option<Owner>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
