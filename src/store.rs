//! Override store boundary and the regenerating planner.
//!
//! The engine never talks to persistence. This module defines the seam it
//! expects on the other side: an [`OverrideStore`] that hands out full
//! snapshots and pushes a new one on every change. [`Planner`] consumes
//! those snapshots and keeps the latest generated schedule.
//!
//! # Editing cycle
//! Manual edits rotate a day through: no override → `PartyA` → `PartyB`
//! → no override ([`next_override`]).

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::generator::ScheduleGenerator;
use crate::models::{CalendarDay, OverrideMap, Owner, Schedule, ScheduleEntry};
use crate::report::{self, ScheduleStats, TodayStatus};

use chrono::NaiveDate;

/// Callback receiving every new full snapshot.
pub type SnapshotListener = Box<dyn FnMut(&OverrideMap)>;

/// Persistence collaborator holding the override map.
///
/// Implementations store presence as "override set" and absence as "no
/// override"; they never hold cleared keys.
pub trait OverrideStore {
    /// Current full snapshot.
    fn snapshot(&self) -> Result<OverrideMap>;

    /// Sets the override for a day and notifies subscribers.
    fn upsert(&mut self, day: &CalendarDay, owner: Owner) -> Result<()>;

    /// Removes the override for a day and notifies subscribers.
    fn delete(&mut self, day: &CalendarDay) -> Result<()>;

    /// Registers a listener. It immediately receives the current snapshot.
    fn subscribe(&mut self, listener: SnapshotListener) -> Result<()>;
}

/// In-process [`OverrideStore`].
#[derive(Default)]
pub struct MemoryOverrideStore {
    overrides: OverrideMap,
    listeners: Vec<SnapshotListener>,
}

impl fmt::Debug for MemoryOverrideStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryOverrideStore")
            .field("overrides", &self.overrides)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl MemoryOverrideStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with overrides (cleared keys are dropped).
    pub fn with_overrides(overrides: &OverrideMap) -> Self {
        let mut seeded = OverrideMap::new();
        for (day, owner) in overrides.active() {
            seeded.insert(day.clone(), Some(owner));
        }
        Self {
            overrides: seeded,
            listeners: Vec::new(),
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.overrides);
        }
    }
}

impl OverrideStore for MemoryOverrideStore {
    fn snapshot(&self) -> Result<OverrideMap> {
        Ok(self.overrides.clone())
    }

    fn upsert(&mut self, day: &CalendarDay, owner: Owner) -> Result<()> {
        self.overrides.insert(day.clone(), Some(owner));
        self.notify();
        Ok(())
    }

    fn delete(&mut self, day: &CalendarDay) -> Result<()> {
        self.overrides.remove(day.as_str());
        self.notify();
        Ok(())
    }

    fn subscribe(&mut self, mut listener: SnapshotListener) -> Result<()> {
        listener(&self.overrides);
        self.listeners.push(listener);
        Ok(())
    }
}

/// Next value in the editing cycle.
pub fn next_override(current: Option<Owner>) -> Option<Owner> {
    match current {
        None => Some(Owner::PartyA),
        Some(Owner::PartyA) => Some(Owner::PartyB),
        Some(Owner::PartyB) => None,
    }
}

/// Advances a day through the editing cycle in `store`.
///
/// Returns the new override value.
pub fn toggle_day<S: OverrideStore + ?Sized>(store: &mut S, day: &CalendarDay) -> Result<Option<Owner>> {
    let current = store.snapshot()?.get(day.as_str());
    let next = next_override(current);
    match next {
        Some(owner) => store.upsert(day, owner)?,
        None => store.delete(day)?,
    }
    debug!(%day, ?current, ?next, "toggled override");
    Ok(next)
}

/// Holds the latest generated schedule and rebuilds it per snapshot.
#[derive(Debug, Clone)]
pub struct Planner {
    generator: ScheduleGenerator,
    overrides: OverrideMap,
    schedule: Schedule,
    stats: ScheduleStats,
}

impl Planner {
    /// Creates a planner with an empty override snapshot.
    pub fn new(generator: ScheduleGenerator) -> Self {
        let overrides = OverrideMap::new();
        let schedule = generator.generate(&overrides);
        let stats = ScheduleStats::calculate(&schedule, generator.config().reporting_year);
        Self {
            generator,
            overrides,
            schedule,
            stats,
        }
    }

    /// Rebuilds from a full snapshot.
    ///
    /// The new schedule is built completely before it replaces the old
    /// one, so readers only ever see finished schedules.
    pub fn apply_snapshot(&mut self, snapshot: &OverrideMap) -> &Schedule {
        let schedule = self.generator.generate(snapshot);
        let stats = ScheduleStats::calculate(&schedule, self.generator.config().reporting_year);
        self.overrides = snapshot.clone();
        self.schedule = schedule;
        self.stats = stats;
        &self.schedule
    }

    /// Pulls the current snapshot from a store and rebuilds.
    pub fn refresh<S: OverrideStore + ?Sized>(&mut self, store: &S) -> Result<&Schedule> {
        let snapshot = store.snapshot()?;
        Ok(self.apply_snapshot(&snapshot))
    }

    /// Latest schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Stats of the latest schedule.
    pub fn stats(&self) -> ScheduleStats {
        self.stats
    }

    /// Snapshot the latest schedule was built from.
    pub fn overrides(&self) -> &OverrideMap {
        &self.overrides
    }

    /// Today's owner, using the configured fallback.
    pub fn today_status(&self, today: NaiveDate) -> TodayStatus {
        report::today_status(&self.schedule, today, self.generator.config().fallback_owner)
    }

    /// Next day owned by `owner` at or after `today`.
    pub fn next_day_for(&self, owner: Owner, today: NaiveDate) -> Option<&ScheduleEntry> {
        report::next_day_for(&self.schedule, owner, today)
    }
}
