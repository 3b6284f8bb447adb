//! Summary of a completed payroll run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ReportRow;

/// Counts and totals for one run, reported to the operator.
///
/// The run metadata here never reaches the report or error outputs, so those
/// stay byte-identical across re-runs of the same input.
///
/// # Example
///
/// ```
/// use payroll_engine::models::RunSummary;
///
/// let summary = RunSummary::empty();
/// assert_eq!(summary.records_processed, 0);
/// assert!(!summary.capacity_reached);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Unique identifier for this run, also attached to its log events.
    pub run_id: Uuid,
    /// When the run finished.
    pub completed_at: DateTime<Utc>,
    /// Valid records that made it into the report.
    pub records_processed: usize,
    /// Lines written to the error log.
    pub lines_rejected: usize,
    /// Whitespace-only lines that were skipped.
    pub blank_lines_skipped: usize,
    /// True if reading stopped early because the record cap was hit.
    pub capacity_reached: bool,
    /// Sum of gross income over all reported records.
    pub total_gross_income: Decimal,
    /// Sum of total deductions over all reported records.
    pub total_deductions: Decimal,
    /// Sum of net income over all reported records.
    pub total_net_income: Decimal,
}

impl RunSummary {
    /// A summary with a fresh run id and all counts at zero.
    pub fn empty() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            completed_at: Utc::now(),
            records_processed: 0,
            lines_rejected: 0,
            blank_lines_skipped: 0,
            capacity_reached: false,
            total_gross_income: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            total_net_income: Decimal::ZERO,
        }
    }

    /// Adds one report row to the batch totals.
    ///
    /// Totals saturate at the `Decimal` range instead of overflowing.
    /// Returns false if any total saturated.
    pub fn add_row(&mut self, row: &ReportRow) -> bool {
        let gross = accumulate(&mut self.total_gross_income, row.gross_income);
        let deductions = accumulate(&mut self.total_deductions, row.total_deductions);
        let net = accumulate(&mut self.total_net_income, row.net_income);
        gross && deductions && net
    }
}

fn accumulate(total: &mut Decimal, amount: Decimal) -> bool {
    match total.checked_add(amount) {
        Some(sum) => {
            *total = sum;
            true
        }
        None => {
            *total = if amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            };
            false
        }
    }
}
