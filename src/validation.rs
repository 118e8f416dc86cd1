//! Input validation for generator configuration and override snapshots.
//!
//! The engine itself assumes well-formed input and never calls these
//! checks. They exist for the collaborator boundary: loading a catalog or
//! configuration, or vetting an override snapshot before storing it.
//!
//! Configuration checks:
//! - Reference date is a Friday inside the window
//! - Window start is not after window end
//! - Recess blocks have start ≤ end
//! - Fixed specials resolve to a real date in the target year
//! - Holidays fall inside the window
//!
//! Override checks:
//! - Keys are canonical `YYYY-MM-DD` dates
//! - Dates fall inside the window

use crate::calendar::{day_of_week, FRIDAY};
use crate::config::GeneratorConfig;
use crate::models::{EventCatalog, OverrideMap};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Reference date is not a Friday.
    ReferenceNotFriday,
    /// A date lies outside the generation window.
    OutsideWindow,
    /// A range ends before it starts.
    InvertedRange,
    /// A month/day pair does not exist in the target year.
    InvalidSpecialDate,
    /// An override key is not a canonical date.
    MalformedKey,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates configuration and catalog together.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_config(config: &GeneratorConfig, catalog: &EventCatalog) -> ValidationResult {
    let mut errors = Vec::new();

    if config.window_start > config.window_end {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedRange,
            format!(
                "Window start {} is after window end {}",
                config.window_start, config.window_end
            ),
        ));
    }

    if day_of_week(config.reference_friday) != FRIDAY {
        errors.push(ValidationError::new(
            ValidationErrorKind::ReferenceNotFriday,
            format!("Reference date {} is not a Friday", config.reference_friday),
        ));
    }

    if !config.in_window(config.reference_friday) {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutsideWindow,
            format!(
                "Reference date {} is outside the window",
                config.reference_friday
            ),
        ));
    }

    for holiday in &catalog.holidays {
        if !config.in_window(holiday.date) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutsideWindow,
                format!("Holiday '{}' on {} is outside the window", holiday.label, holiday.date),
            ));
        }
    }

    for block in &catalog.recess_blocks {
        if block.start > block.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedRange,
                format!(
                    "Recess '{}' ends ({}) before it starts ({})",
                    block.label, block.end, block.start
                ),
            ));
        }
    }

    for special in &catalog.fixed_specials {
        if special.resolve(config.year).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSpecialDate,
                format!(
                    "Special '{}' ({}/{}) does not exist in {}",
                    special.label, special.month, special.day, config.year
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Vets an override snapshot before it is stored.
///
/// Cleared keys are checked like any other key.
pub fn validate_overrides(overrides: &OverrideMap, config: &GeneratorConfig) -> ValidationResult {
    let mut errors = Vec::new();

    for (day, _) in overrides.iter() {
        match day.to_date() {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MalformedKey,
                format!("Override key '{day}' is not a YYYY-MM-DD date"),
            )),
            Some(date) if !config.in_window(date) => errors.push(ValidationError::new(
                ValidationErrorKind::OutsideWindow,
                format!("Override {day} is outside the window"),
            )),
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
