//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading sources and
//! computing payroll.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// Record-level errors (`MalformedRecord`, `UnknownEmployee`, `InvalidEmployee`)
/// are normally turned into warnings by the caller and processing continues.
/// `InvalidArgument` always propagates to the caller of a deduction calculator.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::UnknownEmployee {
///     employee_number: "99999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown employee: 99999");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
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

    /// A configuration value parsed but is not usable as payroll policy.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// An input source could not be opened or read.
    #[error("Source unavailable '{path}': {message}")]
    SourceUnavailable {
        /// The path of the source.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// An input source has a format the engine cannot read.
    #[error("Unsupported source format '{path}': only .csv and .xlsx files are supported")]
    UnsupportedFormat {
        /// The path of the source.
        path: String,
    },

    /// An attendance row had an unparseable value or a missing field.
    #[error("Malformed record '{record}': {message}")]
    MalformedRecord {
        /// A short description identifying the record.
        record: String,
        /// A description of what was wrong with the record.
        message: String,
    },

    /// An attendance row referenced an employee absent from the directory.
    #[error("Unknown employee: {employee_number}")]
    UnknownEmployee {
        /// The employee number that could not be resolved.
        employee_number: String,
    },

    /// An employee master row was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A calculator received an argument outside its domain.
    #[error("Invalid argument for {calculator}: {message}")]
    InvalidArgument {
        /// The calculator that rejected the argument.
        calculator: String,
        /// A description of the rejected argument.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl PayrollError {
    /// Returns a stable, upper-case code for the error kind.
    ///
    /// The code is used for [`AuditWarning`](crate::models::AuditWarning) records
    /// and for failure summaries.
    pub fn code(&self) -> &'static str {
        match self {
            PayrollError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            PayrollError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            PayrollError::InvalidPolicy { .. } => "INVALID_POLICY",
            PayrollError::SourceUnavailable { .. } => "SOURCE_UNAVAILABLE",
            PayrollError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            PayrollError::MalformedRecord { .. } => "MALFORMED_RECORD",
            PayrollError::UnknownEmployee { .. } => "UNKNOWN_EMPLOYEE",
            PayrollError::InvalidEmployee { .. } => "INVALID_EMPLOYEE",
            PayrollError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            PayrollError::CalculationError { .. } => "CALCULATION_ERROR",
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
