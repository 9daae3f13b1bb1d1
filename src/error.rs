//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, its configuration and its data stores can report.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll engine.
///
/// Calculations, configuration loading and the in-memory stores all return
/// this type so callers can handle failures in one place.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod {
///     year: 2025,
///     month: 13,
///     message: "month must be between 1 and 12".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid reference period 2025-13: month must be between 1 and 12"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested reference period is not a valid calendar month.
    #[error("Invalid reference period {year}-{month:02}: {message}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
        /// Why the period was rejected.
        message: String,
    },

    /// An absence record failed input validation.
    #[error("Invalid absence '{absence_id}': {message}")]
    InvalidAbsence {
        /// The ID of the rejected absence.
        absence_id: String,
        /// A description of what made the absence invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee exists with the given ID.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee ID that was looked up.
        id: String,
    },

    /// The employee is still referenced by absence records.
    #[error("Employee '{id}' is referenced by {absences} absence record(s)")]
    EmployeeInUse {
        /// The employee ID.
        id: String,
        /// Number of absences still pointing at the employee.
        absences: usize,
    },

    /// No report snapshot exists with the given ID.
    #[error("Report not found: {id}")]
    ReportNotFound {
        /// The report ID that was looked up.
        id: Uuid,
    },

    /// An amount grew past what a decimal can hold.
    #[error("Amount out of range in {rule}: {message}")]
    CalculationOverflow {
        /// The rule whose arithmetic overflowed.
        rule: String,
        /// The amount that could not be computed.
        message: String,
    },

    /// The backing store failed to read or write.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
