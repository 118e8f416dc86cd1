//! Shared-custody calendar engine.
//!
//! Assigns every day of a date range to one of two parties by reconciling
//! three layers of rules: alternating weekends, priority calendar events
//! (holidays, fixed special days, recess blocks), and manual overrides.
//!
//! # Modules
//!
//! - **`calendar`**: Date formatting, day arithmetic, day iteration
//! - **`models`**: Domain types — `Owner`, `CalendarDay`, `ScheduleEntry`,
//!   `Schedule`, `EventCatalog`, `OverrideMap`
//! - **`config`**: `GeneratorConfig` (year, window, reference Friday)
//! - **`generator`**: The generation pipeline (placer → weekends → overrides)
//! - **`report`**: Per-owner stats and dashboard queries
//! - **`store`**: Override store seam and the regenerating `Planner`
//! - **`validation`**: Optional input checks for the collaborator boundary
//!
//! # Priority model
//!
//! Every entry carries a priority; higher wins. Weekends are 1, holiday
//! bridges 3, recess blocks and fixed specials 4, manual overrides 10.
//!
//! # Example
//!
//! ```
//! use custody_calendar::generator::ScheduleGenerator;
//! use custody_calendar::models::{OverrideMap, Owner};
//! use custody_calendar::report::ScheduleStats;
//!
//! let generator = ScheduleGenerator::default();
//! let overrides = OverrideMap::new().with("2026-03-04", Owner::PartyB);
//! let schedule = generator.generate(&overrides);
//!
//! assert_eq!(schedule.owner_on("2026-03-04"), Some(Owner::PartyB));
//! let stats = ScheduleStats::calculate(&schedule, 2026);
//! assert!(stats.party_a > 0 && stats.party_b > 0);
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod report;
pub mod store;
pub mod validation;

pub use error::{Error, Result};
