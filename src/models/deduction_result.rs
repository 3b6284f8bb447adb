//! Deduction results and report rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeRecord;
use crate::calculation::DeductionKind;

/// The five statutory deductions computed from one gross income.
///
/// Individual amounts are kept unrounded; only `total_deductions` and
/// `net_income` are rounded to the cent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// The gross income the deductions were computed from.
    pub gross_income: Decimal,
    /// Federal income tax.
    pub federal_tax: Decimal,
    /// Quebec provincial income tax.
    pub provincial_tax: Decimal,
    /// Employment insurance premium.
    pub employment_insurance: Decimal,
    /// Quebec parental insurance plan contribution.
    pub parental_plan_contribution: Decimal,
    /// Quebec pension plan contribution.
    pub pension_plan_contribution: Decimal,
    /// Sum of the five deductions, rounded to the cent.
    pub total_deductions: Decimal,
    /// Gross income less total deductions, rounded to the cent. May be negative.
    pub net_income: Decimal,
}

impl DeductionResult {
    /// Returns the amount computed for one deduction kind.
    pub fn amount(&self, kind: DeductionKind) -> Decimal {
        match kind {
            DeductionKind::FederalTax => self.federal_tax,
            DeductionKind::ProvincialTax => self.provincial_tax,
            DeductionKind::EmploymentInsurance => self.employment_insurance,
            DeductionKind::ParentalPlan => self.parental_plan_contribution,
            DeductionKind::PensionPlan => self.pension_plan_contribution,
        }
    }
}

/// One line of the summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Employee identifier.
    pub id: u64,
    /// Employee first name.
    pub first_name: String,
    /// Employee last name.
    pub last_name: String,
    /// Annual gross income.
    pub gross_income: Decimal,
    /// Total deductions.
    pub total_deductions: Decimal,
    /// Net income.
    pub net_income: Decimal,
}

impl ReportRow {
    /// Builds the report row for a record and its computed deductions.
    pub fn new(record: &EmployeeRecord, deductions: &DeductionResult) -> Self {
        Self {
            id: record.id(),
            first_name: record.first_name().to_string(),
            last_name: record.last_name().to_string(),
            gross_income: record.gross_income(),
            total_deductions: deductions.total_deductions,
            net_income: deductions.net_income,
        }
    }
}
