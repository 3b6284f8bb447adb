//! Rate schedules shared by the deduction calculators.
//!
//! Two models cover all five deductions: a flat rate capped at a salary
//! ceiling, and a table of income brackets each taxed at one rate.

use std::ops::{Bound, RangeBounds};

use rust_decimal::Decimal;

/// A flat percentage below a salary ceiling, a fixed maximum at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CappedRate {
    /// Gross income at which the maximum applies.
    pub ceiling: Decimal,
    /// Deduction charged at or above the ceiling.
    pub maximum: Decimal,
    /// Rate applied below the ceiling.
    pub rate: Decimal,
}

impl CappedRate {
    /// Computes the deduction for a gross income.
    pub fn apply(&self, gross_income: Decimal) -> Decimal {
        if gross_income >= self.ceiling {
            self.maximum
        } else {
            gross_income * self.rate
        }
    }
}

/// One income range and the rate charged on the whole income when it falls
/// inside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Lower boundary of the range.
    pub lower: Bound<Decimal>,
    /// Upper boundary of the range.
    pub upper: Bound<Decimal>,
    /// Rate applied to the full gross income.
    pub rate: Decimal,
}

impl TaxBracket {
    /// True if `gross_income` lies within this bracket's boundaries.
    pub fn contains(&self, gross_income: Decimal) -> bool {
        (self.lower, self.upper).contains(&gross_income)
    }
}

/// An ordered list of brackets. The first bracket containing the income wins.
///
/// Income covered by no bracket is returned unchanged, as if taxed at 100%.
/// The federal and provincial tables both have such uncovered ranges.
#[derive(Debug, Clone, Copy)]
pub struct BracketSchedule {
    /// The brackets, checked in order.
    pub brackets: &'static [TaxBracket],
}

impl BracketSchedule {
    /// Returns the bracket that applies to `gross_income`, if any.
    pub fn bracket_for(&self, gross_income: Decimal) -> Option<&'static TaxBracket> {
        self.brackets.iter().find(|b| b.contains(gross_income))
    }

    /// Computes the tax for a gross income.
    pub fn apply(&self, gross_income: Decimal) -> Decimal {
        match self.bracket_for(gross_income) {
            Some(bracket) => gross_income * bracket.rate,
            None => gross_income,
        }
    }
}
