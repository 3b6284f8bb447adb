//! Calculation logic for the payroll engine.
//!
//! This module contains cent rounding, gross income, the two rate models
//! (capped flat rate and income brackets), the five statutory deductions built
//! on them, and the roll-up of those deductions into totals and net income.

mod contributions;
mod deductions;
mod federal_tax;
mod provincial_tax;
mod rounding;
mod schedule;

pub use contributions::{
    EMPLOYMENT_INSURANCE, PARENTAL_PLAN, PENSION_PLAN, employment_insurance, parental_plan,
    pension_plan,
};
pub use deductions::{DeductionKind, calculate_deductions};
pub use federal_tax::{FEDERAL_BRACKETS, federal_tax};
pub use provincial_tax::{PROVINCIAL_BRACKETS, provincial_tax};
pub use rounding::{MAX_GROSS_INCOME, WEEKS_PER_YEAR, gross_income, round2};
pub use schedule::{BracketSchedule, CappedRate, TaxBracket};
