//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod deduction_result;
mod employee;
mod rejected_line;
mod run_summary;

pub use deduction_result::{DeductionResult, ReportRow};
pub use employee::EmployeeRecord;
pub use rejected_line::RejectedLine;
pub use run_summary::RunSummary;
