//! Schedule (generation output) model.
//!
//! A schedule maps each calendar day to exactly one [`ScheduleEntry`]
//! and carries any [`Diagnostic`]s raised while it was generated.
//!
//! # Write policies
//! Two write primitives exist and deliberately differ on ties:
//!
//! | Primitive | Replaces existing P′ when | Equal priority |
//! |-----------|---------------------------|----------------|
//! | [`Schedule::set_or_overwrite`] | P′ ≤ P | latest write wins |
//! | [`Schedule::set_if_higher`] | P′ < P | earliest write wins |
//!
//! Catalog placement uses the first, so a later catalog rule at the same
//! tier replaces an earlier one. The weekend commit uses the second.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

use super::{CalendarDay, EventKind, Owner, Priority};

/// One day's assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day this entry covers.
    pub date: CalendarDay,
    /// Party with custody on this day.
    pub owner: Owner,
    /// Rule family that produced the entry.
    pub kind: EventKind,
    /// Display label.
    pub label: String,
    /// Claim strength (higher wins).
    pub priority: Priority,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(
        date: impl Into<CalendarDay>,
        owner: Owner,
        kind: EventKind,
        label: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            date: date.into(),
            owner,
            kind,
            label: label.into(),
            priority,
        }
    }
}

/// A complete day → owner assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Entries keyed by day, in chronological key order.
    pub entries: BTreeMap<CalendarDay, ScheduleEntry>,
    /// Recoverable problems detected during generation.
    pub diagnostics: Vec<Diagnostic>,
}

/// A recoverable problem found during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Category.
    pub kind: DiagnosticKind,
    /// Human-readable description.
    pub message: String,
}

/// Classification of diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The reference Friday is not among the enumerated weekends, so no
    /// weekend alternation was performed.
    MissingReferenceWeekend,
    /// Domain-specific diagnostic.
    Custom(String),
}

impl Diagnostic {
    /// Creates a missing-reference-weekend diagnostic.
    pub fn missing_reference_weekend(reference: &CalendarDay) -> Self {
        Self {
            kind: DiagnosticKind::MissingReferenceWeekend,
            message: format!(
                "Reference Friday {reference} is not in the generation window; no weekends were allocated"
            ),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `entry` unless the existing entry has strictly higher priority.
    ///
    /// Returns `true` if the entry was stored.
    pub fn set_or_overwrite(&mut self, entry: ScheduleEntry) -> bool {
        match self.entries.entry(entry.date.clone()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
            btree_map::Entry::Occupied(mut slot) => {
                if slot.get().priority > entry.priority {
                    return false;
                }
                slot.insert(entry);
                true
            }
        }
    }

    /// Writes `entry` only if the day is free or holds a strictly lower
    /// priority.
    ///
    /// Returns `true` if the entry was stored.
    pub fn set_if_higher(&mut self, entry: ScheduleEntry) -> bool {
        match self.entries.entry(entry.date.clone()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
            btree_map::Entry::Occupied(mut slot) => {
                if slot.get().priority >= entry.priority {
                    return false;
                }
                slot.insert(entry);
                true
            }
        }
    }

    /// Replaces only the owner of an existing entry.
    ///
    /// Returns `false` if no entry exists for `date`.
    pub fn set_owner(&mut self, date: &str, owner: Owner) -> bool {
        match self.entries.get_mut(date) {
            Some(entry) => {
                entry.owner = owner;
                true
            }
            None => false,
        }
    }

    /// Adds a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Whether generation finished without diagnostics.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Entry for a day.
    pub fn get(&self, date: &str) -> Option<&ScheduleEntry> {
        self.entries.get(date)
    }

    /// Owner of a day, if assigned.
    pub fn owner_on(&self, date: &str) -> Option<Owner> {
        self.get(date).map(|e| e.owner)
    }

    /// Whether a day has an entry.
    pub fn contains(&self, date: &str) -> bool {
        self.entries.contains_key(date)
    }

    /// Entries in chronological key order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.values()
    }

    /// Entries from `from` (inclusive) onward, in key order.
    pub fn iter_from<'a>(&'a self, from: &'a str) -> impl Iterator<Item = &'a ScheduleEntry> + 'a {
        self.entries.iter().filter(move |(k, _)| k.as_str() >= from).map(|(_, e)| e)
    }

    /// Returns all entries owned by a party.
    pub fn entries_for_owner(&self, owner: Owner) -> Vec<&ScheduleEntry> {
        self.iter().filter(|e| e.owner == owner).collect()
    }

    /// Number of assigned days.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no day is assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::priority;

    fn entry(date: &str, owner: Owner, label: &str, p: Priority) -> ScheduleEntry {
        ScheduleEntry::new(date, owner, EventKind::Special, label, p)
    }

    #[test]
    fn test_set_or_overwrite_inserts() {
        let mut s = Schedule::new();
        assert!(s.set_or_overwrite(entry("2026-05-10", Owner::PartyB, "x", 4)));
        assert_eq!(s.owner_on("2026-05-10"), Some(Owner::PartyB));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_set_or_overwrite_equal_priority_latest_wins() {
        let mut s = Schedule::new();
        s.set_or_overwrite(entry("2026-05-10", Owner::PartyB, "first", 4));
        assert!(s.set_or_overwrite(entry("2026-05-10", Owner::PartyA, "second", 4)));
        let e = s.get("2026-05-10").unwrap();
        assert_eq!(e.owner, Owner::PartyA);
        assert_eq!(e.label, "second");
    }

    #[test]
    fn test_set_or_overwrite_keeps_higher() {
        let mut s = Schedule::new();
        s.set_or_overwrite(entry("2026-05-10", Owner::PartyB, "fixed", 4));
        assert!(!s.set_or_overwrite(entry("2026-05-10", Owner::PartyA, "holiday", 3)));
        assert_eq!(s.get("2026-05-10").unwrap().label, "fixed");
    }

    #[test]
    fn test_set_if_higher_equal_priority_earliest_wins() {
        let mut s = Schedule::new();
        s.set_if_higher(entry("2026-01-23", Owner::PartyA, "first", 1));
        assert!(!s.set_if_higher(entry("2026-01-23", Owner::PartyB, "second", 1)));
        assert_eq!(s.get("2026-01-23").unwrap().label, "first");
    }

    #[test]
    fn test_set_if_higher_replaces_lower() {
        let mut s = Schedule::new();
        s.set_if_higher(entry("2026-01-23", Owner::PartyA, "weekend", priority::WEEKEND));
        assert!(s.set_if_higher(entry("2026-01-23", Owner::PartyB, "holiday", priority::HOLIDAY)));
        assert_eq!(s.owner_on("2026-01-23"), Some(Owner::PartyB));
    }

    #[test]
    fn test_set_owner_only_touches_owner() {
        let mut s = Schedule::new();
        s.set_or_overwrite(ScheduleEntry::new(
            "2026-06-04",
            Owner::PartyB,
            EventKind::Holiday,
            "Corpus Christi",
            priority::HOLIDAY,
        ));
        assert!(s.set_owner("2026-06-04", Owner::PartyA));
        let e = s.get("2026-06-04").unwrap();
        assert_eq!(e.owner, Owner::PartyA);
        assert_eq!(e.kind, EventKind::Holiday);
        assert_eq!(e.label, "Corpus Christi");
        assert_eq!(e.priority, priority::HOLIDAY);

        assert!(!s.set_owner("2026-06-05", Owner::PartyA));
    }

    #[test]
    fn test_iter_from_and_owner_filter() {
        let mut s = Schedule::new();
        s.set_or_overwrite(entry("2026-01-01", Owner::PartyA, "a", 1));
        s.set_or_overwrite(entry("2026-01-02", Owner::PartyB, "b", 1));
        s.set_or_overwrite(entry("2026-01-03", Owner::PartyA, "c", 1));

        let from: Vec<_> = s.iter_from("2026-01-02").map(|e| e.label.as_str()).collect();
        assert_eq!(from, vec!["b", "c"]);
        assert_eq!(s.entries_for_owner(Owner::PartyA).len(), 2);
    }

    #[test]
    fn test_diagnostics() {
        let mut s = Schedule::new();
        assert!(s.is_complete());
        s.add_diagnostic(Diagnostic::missing_reference_weekend(&CalendarDay::from(
            "2030-01-04",
        )));
        assert!(!s.is_complete());
        assert_eq!(s.diagnostics[0].kind, DiagnosticKind::MissingReferenceWeekend);
        assert!(s.diagnostics[0].message.contains("2030-01-04"));
    }
}
