//! Weekend allocator.
//!
//! # Algorithm
//!
//! 1. Enumerate every Friday from the first Friday on/after the window
//!    start up to (not including) the window end.
//! 2. Forcing: the first of Friday, Saturday, Sunday already holding an
//!    entry above [`priority::WEEKEND`] dictates that weekend's owner.
//! 3. The reference weekend is pinned to [`Owner::PartyA`].
//! 4. Forward pass from the reference: forced owner, else the opposite of
//!    the previous weekend.
//! 5. Backward pass from the reference: forced owner, else the opposite of
//!    the following weekend.
//! 6. Smoothing: one forward scan; when two consecutive weekends both
//!    resolve to `PartyA` and the earlier is neither forced nor the
//!    reference, the earlier flips to `PartyB`. `PartyB` streaks are left
//!    alone.
//! 7. Commit Friday/Saturday/Sunday with [`Schedule::set_if_higher`] at
//!    [`priority::WEEKEND`], leaving placed holidays untouched.
//!
//! # Complexity
//! O(w) where w = number of Fridays in the window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar::{add_days, next_weekday_on_or_after, FRIDAY};
use crate::config::GeneratorConfig;
use crate::models::{
    priority, CalendarDay, Diagnostic, EventKind, Owner, Schedule, ScheduleEntry, WEEKEND_LABEL,
};

/// Intermediate per-Friday allocation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendBlock {
    /// The Friday opening this weekend.
    pub friday: NaiveDate,
    /// Owner dictated by an already-placed priority entry.
    pub forced_owner: Option<Owner>,
    /// Final owner after alternation and smoothing.
    pub resolved_owner: Option<Owner>,
}

impl WeekendBlock {
    fn new(friday: NaiveDate) -> Self {
        Self {
            friday,
            forced_owner: None,
            resolved_owner: None,
        }
    }

    /// Friday, Saturday, Sunday keys.
    pub fn days(&self) -> [CalendarDay; 3] {
        [
            CalendarDay::from_date(self.friday),
            CalendarDay::from_date(add_days(self.friday, 1)),
            CalendarDay::from_date(add_days(self.friday, 2)),
        ]
    }

    /// Whether a priority entry forced this weekend's owner.
    pub fn is_forced(&self) -> bool {
        self.forced_owner.is_some()
    }
}

/// Lists every Friday in the window, each with its forcing owner.
pub fn enumerate_weekends(schedule: &Schedule, config: &GeneratorConfig) -> Vec<WeekendBlock> {
    let mut blocks = Vec::new();
    let mut friday = next_weekday_on_or_after(config.window_start, FRIDAY);
    while friday < config.window_end {
        let mut block = WeekendBlock::new(friday);
        block.forced_owner = block
            .days()
            .iter()
            .filter_map(|day| schedule.get(day.as_str()))
            .find(|entry| entry.priority > priority::WEEKEND)
            .map(|entry| entry.owner);
        blocks.push(block);
        friday = add_days(friday, 7);
    }
    blocks
}

/// Resolves owners across the sequence, anchored at `reference`.
///
/// Returns the index of the reference weekend, or `None` if it is absent,
/// in which case every block is left unresolved.
pub fn resolve_weekends(blocks: &mut [WeekendBlock], reference: NaiveDate) -> Option<usize> {
    let ref_idx = blocks.iter().position(|b| b.friday == reference)?;
    blocks[ref_idx].resolved_owner = Some(Owner::PartyA);

    for i in ref_idx + 1..blocks.len() {
        let prev = blocks[i - 1].resolved_owner;
        blocks[i].resolved_owner = blocks[i].forced_owner.or(prev.map(Owner::opposite));
    }

    for i in (0..ref_idx).rev() {
        let next = blocks[i + 1].resolved_owner;
        blocks[i].resolved_owner = blocks[i].forced_owner.or(next.map(Owner::opposite));
    }

    smooth_party_a_streaks(blocks, ref_idx);
    Some(ref_idx)
}

/// Breaks consecutive `PartyA` weekends by handing the earlier one to
/// `PartyB`. Only this direction is smoothed.
fn smooth_party_a_streaks(blocks: &mut [WeekendBlock], ref_idx: usize) {
    for i in 0..blocks.len().saturating_sub(1) {
        let both_a = blocks[i].resolved_owner == Some(Owner::PartyA)
            && blocks[i + 1].resolved_owner == Some(Owner::PartyA);
        if both_a && !blocks[i].is_forced() && i != ref_idx {
            blocks[i].resolved_owner = Some(Owner::PartyB);
        }
    }
}

/// Runs the whole allocator and commits weekend days into `schedule`.
///
/// If the reference Friday is not in the window, nothing is committed
/// and a [`Diagnostic`] is attached to the schedule instead.
pub fn allocate_weekends(schedule: &mut Schedule, config: &GeneratorConfig) -> Vec<WeekendBlock> {
    let mut blocks = enumerate_weekends(schedule, config);

    if resolve_weekends(&mut blocks, config.reference_friday).is_none() {
        let reference = config.reference_day();
        warn!(%reference, weekends = blocks.len(), "reference weekend not found; skipping weekend allocation");
        schedule.add_diagnostic(Diagnostic::missing_reference_weekend(&reference));
        return blocks;
    }

    let mut committed = 0usize;
    for block in &blocks {
        let Some(owner) = block.resolved_owner else {
            continue;
        };
        for day in block.days() {
            if schedule.set_if_higher(ScheduleEntry::new(
                day,
                owner,
                EventKind::Weekend,
                WEEKEND_LABEL,
                priority::WEEKEND,
            )) {
                committed += 1;
            }
        }
    }

    debug!(
        weekends = blocks.len(),
        forced = blocks.iter().filter(|b| b.is_forced()).count(),
        committed_days = committed,
        "allocated weekends"
    );
    blocks
}
