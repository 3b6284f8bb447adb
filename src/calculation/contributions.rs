//! Capped-rate payroll contributions: employment insurance, the Quebec
//! parental insurance plan and the Quebec pension plan.
//!
//! Each is a flat percentage of gross income up to a salary ceiling, and a
//! fixed maximum contribution from the ceiling upwards.

use rust_decimal::Decimal;

use super::rounding::decimal;
use super::schedule::CappedRate;

/// Employment insurance: 1.64% up to $65,700, then $1,077.48.
pub const EMPLOYMENT_INSURANCE: CappedRate = CappedRate {
    ceiling: decimal(65700, 0),
    maximum: decimal(107748, 2),
    rate: decimal(164, 4),
};

/// Quebec parental insurance plan: 0.494% up to $98,000, then $494.12.
pub const PARENTAL_PLAN: CappedRate = CappedRate {
    ceiling: decimal(98000, 0),
    maximum: decimal(49412, 2),
    rate: decimal(494, 5),
};

/// Quebec pension plan: 10.8% up to $71,300, then $7,700.40.
pub const PENSION_PLAN: CappedRate = CappedRate {
    ceiling: decimal(71300, 0),
    maximum: decimal(770040, 2),
    rate: decimal(108, 3),
};

/// Employment insurance premium for an annual gross income.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::employment_insurance;
/// use rust_decimal::Decimal;
///
/// assert_eq!(employment_insurance(Decimal::from(41600)), Decimal::new(68224, 2));
/// assert_eq!(employment_insurance(Decimal::from(90000)), Decimal::new(107748, 2));
/// ```
pub fn employment_insurance(gross_income: Decimal) -> Decimal {
    EMPLOYMENT_INSURANCE.apply(gross_income)
}

/// Quebec parental insurance plan contribution for an annual gross income.
pub fn parental_plan(gross_income: Decimal) -> Decimal {
    PARENTAL_PLAN.apply(gross_income)
}

/// Quebec pension plan contribution for an annual gross income.
pub fn pension_plan(gross_income: Decimal) -> Decimal {
    PENSION_PLAN.apply(gross_income)
}
