//! Configuration types for a payroll run.
//!
//! These structures are deserialized from YAML. Every field carries a default
//! so a file only needs to mention the values it overrides.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hourly rates below this are rejected unless configured otherwise.
pub const DEFAULT_MINIMUM_WAGE: Decimal = Decimal::from_parts(1575, 0, 0, false, 2);

/// Maximum number of employee records held in one run.
pub const DEFAULT_MAX_RECORDS: usize = 150;

/// Locations of the three streams a file-based run touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    /// The payroll input file.
    pub input: PathBuf,
    /// The fixed-width summary report.
    pub report: PathBuf,
    /// The log of rejected lines.
    pub errors: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/payroll.txt"),
            report: PathBuf::from("data/payrollReport.txt"),
            errors: PathBuf::from("data/payrollError.txt"),
        }
    }
}

/// Settings for one payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default()
///     .with_minimum_wage(Decimal::new(1600, 2))
///     .with_max_records(10);
/// assert_eq!(config.minimum_wage, Decimal::new(1600, 2));
/// assert_eq!(config.max_records, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Hourly rates strictly below this value are rejected.
    pub minimum_wage: Decimal,
    /// Cap on the number of valid records kept in one run.
    pub max_records: usize,
    /// File locations used by [`crate::pipeline::run_files`].
    pub paths: OutputPaths,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            minimum_wage: DEFAULT_MINIMUM_WAGE,
            max_records: DEFAULT_MAX_RECORDS,
            paths: OutputPaths::default(),
        }
    }
}

impl PayrollConfig {
    /// Replaces the minimum wage.
    pub fn with_minimum_wage(mut self, minimum_wage: Decimal) -> Self {
        self.minimum_wage = minimum_wage;
        self
    }

    /// Replaces the record capacity.
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    /// Replaces the input path.
    pub fn with_input(mut self, path: impl AsRef<Path>) -> Self {
        self.paths.input = path.as_ref().to_path_buf();
        self
    }

    /// Replaces the report path.
    pub fn with_report(mut self, path: impl AsRef<Path>) -> Self {
        self.paths.report = path.as_ref().to_path_buf();
        self
    }

    /// Replaces the error log path.
    pub fn with_errors(mut self, path: impl AsRef<Path>) -> Self {
        self.paths.errors = path.as_ref().to_path_buf();
        self
    }
}
