//! The closed set of statutory deductions and the per-employee roll-up.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::contributions::{employment_insurance, parental_plan, pension_plan};
use super::federal_tax::federal_tax;
use super::provincial_tax::provincial_tax;
use super::rounding::round2;
use crate::models::DeductionResult;

/// A statutory deduction computed from gross income.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DeductionKind;
/// use rust_decimal::Decimal;
///
/// let amount = DeductionKind::PensionPlan.calculate(Decimal::from(41600));
/// assert_eq!(amount, Decimal::new(449280, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// Federal income tax (bracket model).
    FederalTax,
    /// Quebec provincial income tax (bracket model).
    ProvincialTax,
    /// Employment insurance (capped rate).
    EmploymentInsurance,
    /// Quebec parental insurance plan (capped rate).
    ParentalPlan,
    /// Quebec pension plan (capped rate).
    PensionPlan,
}

impl DeductionKind {
    /// Every deduction, in the order they are summed.
    pub const ALL: [DeductionKind; 5] = [
        DeductionKind::ProvincialTax,
        DeductionKind::FederalTax,
        DeductionKind::EmploymentInsurance,
        DeductionKind::ParentalPlan,
        DeductionKind::PensionPlan,
    ];

    /// Computes this deduction for a gross income. The result is not rounded.
    pub fn calculate(self, gross_income: Decimal) -> Decimal {
        match self {
            DeductionKind::FederalTax => federal_tax(gross_income),
            DeductionKind::ProvincialTax => provincial_tax(gross_income),
            DeductionKind::EmploymentInsurance => employment_insurance(gross_income),
            DeductionKind::ParentalPlan => parental_plan(gross_income),
            DeductionKind::PensionPlan => pension_plan(gross_income),
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            DeductionKind::FederalTax => "Federal Tax",
            DeductionKind::ProvincialTax => "Provincial Tax",
            DeductionKind::EmploymentInsurance => "Employment Insurance",
            DeductionKind::ParentalPlan => "QC Parental Insurance Plan",
            DeductionKind::PensionPlan => "QC Pension Plan",
        }
    }
}

impl fmt::Display for DeductionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Runs every deduction over a gross income and totals them.
///
/// `total_deductions` is the sum of the five unrounded amounts rounded once to
/// the cent; `net_income` is the gross less that total, rounded to the cent
/// and allowed to go negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use rust_decimal::Decimal;
///
/// let result = calculate_deductions(Decimal::new(4160000, 2));
/// assert_eq!(result.total_deductions, Decimal::new(1744454, 2));
/// assert_eq!(result.net_income, Decimal::new(2415546, 2));
/// ```
pub fn calculate_deductions(gross_income: Decimal) -> DeductionResult {
    let federal = DeductionKind::FederalTax.calculate(gross_income);
    let provincial = DeductionKind::ProvincialTax.calculate(gross_income);
    let insurance = DeductionKind::EmploymentInsurance.calculate(gross_income);
    let parental = DeductionKind::ParentalPlan.calculate(gross_income);
    let pension = DeductionKind::PensionPlan.calculate(gross_income);

    let total_deductions = round2(provincial + federal + insurance + parental + pension);
    let net_income = round2(gross_income - total_deductions);

    DeductionResult {
        gross_income,
        federal_tax: federal,
        provincial_tax: provincial,
        employment_insurance: insurance,
        parental_plan_contribution: parental,
        pension_plan_contribution: pension,
        total_deductions,
        net_income,
    }
}
