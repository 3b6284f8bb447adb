//! Error types for the payroll engine.
//!
//! Two families live here. [`RecordError`] classifies why a single input line
//! was rejected; it is recovered locally by the pipeline and never aborts a
//! run. [`EngineError`] covers everything that is fatal to a run: unreadable
//! input, unwritable output and bad configuration.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Any operation that can abort a run returns this error type.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::SourceUnavailable {
///     path: "data/payroll.txt".to_string(),
///     message: "No such file or directory".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Payroll input 'data/payroll.txt' could not be opened: No such file or directory"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The payroll input could not be opened.
    #[error("Payroll input '{path}' could not be opened: {message}")]
    SourceUnavailable {
        /// The path of the input.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// The payroll input was opened but a line could not be read.
    #[error("Failed to read payroll input at line {line_number}: {message}")]
    SourceRead {
        /// The 1-based number of the line that failed.
        line_number: usize,
        /// The underlying I/O error.
        message: String,
    },

    /// A report or error log could not be opened or written.
    #[error("Could not write to '{path}': {message}")]
    SinkWrite {
        /// The path (or name) of the sink.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

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

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was refused.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// The fields of an input record, in the order they are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// The numeric employee identifier.
    EmployeeId,
    /// The employee's first name.
    FirstName,
    /// The employee's last name.
    LastName,
    /// Weekly hours worked.
    HoursWorked,
    /// Hourly pay rate.
    HourlyRate,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordField::EmployeeId => "employee ID",
            RecordField::FirstName => "first name",
            RecordField::LastName => "last name",
            RecordField::HoursWorked => "hours worked",
            RecordField::HourlyRate => "hourly rate",
        };
        f.write_str(name)
    }
}

/// Why a single payroll line was rejected.
///
/// The pipeline logs the classification for diagnostics, but only the raw
/// line text reaches the error log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field is missing or is not of the expected type.
    #[error("Invalid {field}: {message}")]
    Format {
        /// The field that failed.
        field: RecordField,
        /// What was wrong with it.
        message: String,
    },

    /// A numeric field parsed but is negative.
    #[error("{field} cannot be negative (got {value})")]
    NegativeValue {
        /// The field that failed.
        field: RecordField,
        /// The parsed value, as written.
        value: String,
    },

    /// The hourly rate is below the configured minimum wage.
    #[error("Hourly rate {rate} is below the minimum wage of {minimum}")]
    MinimumWage {
        /// The rate on the line.
        rate: Decimal,
        /// The configured floor.
        minimum: Decimal,
    },
}

impl RecordError {
    /// Short machine-friendly name for the error class, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            RecordError::Format { .. } => "format",
            RecordError::NegativeValue { .. } => "negative_value",
            RecordError::MinimumWage { .. } => "minimum_wage",
        }
    }
}
