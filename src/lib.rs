//! Payroll batch processor.
//!
//! This crate reads a line-oriented payroll file, validates each employee
//! line, computes annual gross income and the Quebec/Canada statutory
//! deductions (federal and provincial income tax, employment insurance,
//! parental insurance and pension plan), and writes a fixed-width summary
//! report plus a log of rejected lines.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod validation;
