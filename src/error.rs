//! Error types.
//!
//! Generation itself never fails: a missing reference weekend is reported
//! as a [`Diagnostic`](crate::models::Diagnostic) on the schedule. Errors
//! only arise at the edges, when parsing dates or loading configuration,
//! catalogs, and override snapshots from JSON.

use thiserror::Error;

/// The error type used throughout the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A string could not be parsed as a `YYYY-MM-DD` date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Configuration or catalog is structurally invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An override store rejected a read or write.
    #[error("override store error: {0}")]
    Store(String),

    /// JSON (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand `Result` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
