//! Schedule generation engine.
//!
//! Turns a static [`EventCatalog`] plus an [`OverrideMap`] snapshot into a
//! complete day → owner [`Schedule`].
//!
//! # Pipeline
//!
//! 1. **Priority placer** ([`place_priority_events`]): holiday bridges at
//!    priority 3; recess blocks and specials at priority 4.
//! 2. **Weekend allocator** ([`allocate_weekends`]): alternating weekends
//!    anchored at the reference Friday, committed at priority 1 without
//!    displacing anything already placed.
//! 3. **Override layer** ([`apply_overrides`]): manual corrections, always
//!    winning.
//!
//! Generation is a pure function of its inputs: every call builds a fresh
//! schedule, so two runs over the same inputs yield identical output.
//!
//! # Usage
//!
//! ```
//! use custody_calendar::config::GeneratorConfig;
//! use custody_calendar::generator::generate;
//! use custody_calendar::models::{EventCatalog, OverrideMap, Owner};
//!
//! let schedule = generate(
//!     &EventCatalog::builtin(),
//!     &GeneratorConfig::default(),
//!     &OverrideMap::new(),
//! );
//! assert_eq!(schedule.owner_on("2026-01-23"), Some(Owner::PartyA));
//! assert_eq!(schedule.owner_on("2026-01-30"), Some(Owner::PartyB));
//! ```

mod overrides;
mod placer;
mod weekend;

pub use overrides::{apply_overrides, MANUAL_LABEL};
pub use placer::{bridge_range, place_priority_events};
pub use weekend::{allocate_weekends, enumerate_weekends, resolve_weekends, WeekendBlock};

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::models::{EventCatalog, OverrideMap, Schedule};

/// Generates a complete schedule.
///
/// Never fails: a missing reference weekend is reported through
/// [`Schedule::diagnostics`] while placement and overrides still apply.
pub fn generate(
    catalog: &EventCatalog,
    config: &GeneratorConfig,
    overrides: &OverrideMap,
) -> Schedule {
    let mut schedule = Schedule::new();
    place_priority_events(&mut schedule, catalog, config);
    allocate_weekends(&mut schedule, config);
    let applied = apply_overrides(&mut schedule, overrides);
    debug!(
        days = schedule.len(),
        overrides = applied,
        complete = schedule.is_complete(),
        "generated schedule"
    );
    schedule
}

/// A catalog and configuration bound together for repeated generation.
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    catalog: EventCatalog,
    config: GeneratorConfig,
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self::new(EventCatalog::builtin(), GeneratorConfig::default())
    }
}

impl ScheduleGenerator {
    /// Creates a generator.
    pub fn new(catalog: EventCatalog, config: GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    /// The bound catalog.
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// The bound configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a schedule for an override snapshot.
    pub fn generate(&self, overrides: &OverrideMap) -> Schedule {
        generate(&self.catalog, &self.config, overrides)
    }

    /// Resolved weekend blocks, without committing or applying overrides.
    ///
    /// Useful for inspecting forcing and smoothing decisions.
    pub fn weekend_blocks(&self) -> Vec<WeekendBlock> {
        let mut schedule = Schedule::new();
        place_priority_events(&mut schedule, &self.catalog, &self.config);
        let mut blocks = enumerate_weekends(&schedule, &self.config);
        resolve_weekends(&mut blocks, self.config.reference_friday);
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::iterate_days;
    use crate::models::{priority, CalendarDay, EventKind, Owner};
    use chrono::NaiveDate;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn builtin() -> Schedule {
        ScheduleGenerator::default().generate(&OverrideMap::new())
    }

    fn random_overrides(rng: &mut SmallRng, count: usize) -> OverrideMap {
        let start = d(2026, 1, 1);
        (0..count)
            .map(|_| {
                let day = crate::calendar::add_days(start, rng.random_range(0..375));
                let owner = match rng.random_range(0..3) {
                    0 => None,
                    1 => Some(Owner::PartyA),
                    _ => Some(Owner::PartyB),
                };
                (CalendarDay::from_date(day), owner)
            })
            .collect()
    }

    #[test]
    fn test_reference_weekend_and_next() {
        let s = builtin();
        for day in ["2026-01-23", "2026-01-24", "2026-01-25"] {
            assert_eq!(s.owner_on(day), Some(Owner::PartyA));
        }
        for day in ["2026-01-30", "2026-01-31", "2026-02-01"] {
            assert_eq!(s.owner_on(day), Some(Owner::PartyB));
        }
        assert!(s.is_complete());
    }

    #[test]
    fn test_thursday_holiday_bridge() {
        let s = builtin();
        for day in iterate_days(d(2026, 6, 4), d(2026, 6, 7)) {
            let e = s.get(day.as_str()).unwrap();
            assert_eq!(e.owner, Owner::PartyB);
            assert_eq!(e.priority, priority::HOLIDAY);
            assert_eq!(e.kind, EventKind::Holiday);
        }
        // Wednesday before is untouched
        assert!(s.get("2026-06-03").is_none());
    }

    #[test]
    fn test_manual_override_on_free_day() {
        // 2026-03-01 is a Sunday; clear its weekend first by using an
        // empty catalog with a window that has no weekends.
        let config = GeneratorConfig::default().with_window(d(2026, 3, 2), d(2026, 3, 4));
        let s = generate(
            &EventCatalog::new(),
            &config,
            &OverrideMap::new().with("2026-03-01", Owner::PartyB),
        );
        let e = s.get("2026-03-01").unwrap();
        assert_eq!(e.owner, Owner::PartyB);
        assert_eq!(e.kind, EventKind::Manual);
        assert_eq!(e.priority, priority::OVERRIDE);
    }

    #[test]
    fn test_manual_override_on_weekday() {
        // 2026-03-04 is a Wednesday with no rule.
        let s = ScheduleGenerator::default()
            .generate(&OverrideMap::new().with("2026-03-04", Owner::PartyB));
        let e = s.get("2026-03-04").unwrap();
        assert_eq!(e.kind, EventKind::Manual);
        assert_eq!(e.label, MANUAL_LABEL);
        assert_eq!(e.priority, priority::OVERRIDE);
    }

    #[test]
    fn test_recess_overrides_weekend() {
        let s = builtin();
        for day in iterate_days(d(2026, 12, 21), d(2026, 12, 27)) {
            let e = s.get(day.as_str()).unwrap();
            assert_eq!(e.owner, Owner::PartyB);
            assert_eq!(e.kind, EventKind::Recess);
            assert_eq!(e.priority, priority::FIXED);
        }
    }

    #[test]
    fn test_priority_entries_survive_weekend_commit() {
        let generator = ScheduleGenerator::default();
        let mut placed = Schedule::new();
        place_priority_events(&mut placed, generator.catalog(), generator.config());

        let s = generator.generate(&OverrideMap::new());
        for (day, entry) in &placed.entries {
            assert_eq!(s.get(day.as_str()), Some(entry), "changed on {day}");
        }
    }

    #[test]
    fn test_no_unforced_party_a_streaks() {
        let generator = ScheduleGenerator::default();
        let blocks = generator.weekend_blocks();
        let reference = generator.config().reference_friday;

        assert!(blocks.iter().all(|b| b.resolved_owner.is_some()));
        for pair in blocks.windows(2) {
            let both_a = pair[0].resolved_owner == Some(Owner::PartyA)
                && pair[1].resolved_owner == Some(Owner::PartyA);
            if both_a {
                assert!(
                    pair[0].is_forced() || pair[0].friday == reference,
                    "unforced A streak at {}",
                    pair[0].friday
                );
            }
        }
    }

    #[test]
    fn test_reference_resolves_to_a_even_when_forced() {
        let catalog = EventCatalog::new().with_commemorative("x", d(2026, 1, 24), Owner::PartyB);
        let generator = ScheduleGenerator::new(catalog, GeneratorConfig::default());
        let blocks = generator.weekend_blocks();
        let reference = blocks.iter().find(|b| b.friday == d(2026, 1, 23)).unwrap();
        assert_eq!(reference.forced_owner, Some(Owner::PartyB));
        assert_eq!(reference.resolved_owner, Some(Owner::PartyA));

        // The forced day keeps its higher-priority entry; the rest of the
        // weekend goes to PartyA.
        let s = generator.generate(&OverrideMap::new());
        assert_eq!(s.owner_on("2026-01-23"), Some(Owner::PartyA));
        assert_eq!(s.owner_on("2026-01-24"), Some(Owner::PartyB));
        assert_eq!(s.owner_on("2026-01-25"), Some(Owner::PartyA));
    }

    #[test]
    fn test_overrides_always_win() {
        let generator = ScheduleGenerator::default();
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..20 {
            let overrides = random_overrides(&mut rng, 40);
            let s = generator.generate(&overrides);
            for (day, owner) in overrides.active() {
                assert_eq!(s.owner_on(day.as_str()), Some(owner), "override lost on {day}");
            }
        }
    }

    #[test]
    fn test_cleared_overrides_match_baseline() {
        let generator = ScheduleGenerator::default();
        let baseline = generator.generate(&OverrideMap::new());

        let mut overrides = OverrideMap::new();
        overrides.insert("2026-01-23", None);
        overrides.insert("2026-06-04", None);
        assert_eq!(generator.generate(&overrides), baseline);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let generator = ScheduleGenerator::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let overrides = random_overrides(&mut rng, 60);

        let first = generator.generate(&overrides);
        let second = generator.generate(&overrides);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_missing_reference_keeps_rest_of_schedule() {
        let catalog = EventCatalog::builtin();
        let config = GeneratorConfig::default().with_reference_friday(d(2030, 1, 4));
        let overrides = OverrideMap::new().with("2026-03-04", Owner::PartyA);

        let s = generate(&catalog, &config, &overrides);

        assert_eq!(s.diagnostics.len(), 1);
        assert!(!s.is_complete());
        assert!(s.iter().all(|e| e.kind != EventKind::Weekend));

        let mut expected = Schedule::new();
        place_priority_events(&mut expected, &catalog, &config);
        apply_overrides(&mut expected, &overrides);
        assert_eq!(s.entries, expected.entries);
        assert_eq!(s.owner_on("2026-06-05"), Some(Owner::PartyB));
        assert_eq!(s.owner_on("2026-03-04"), Some(Owner::PartyA));
    }

    #[test]
    fn test_every_weekend_day_assigned() {
        let s = builtin();
        let generator = ScheduleGenerator::default();
        for block in generator.weekend_blocks() {
            for day in block.days() {
                assert!(s.contains(day.as_str()), "{day} unassigned");
            }
        }
    }
}
