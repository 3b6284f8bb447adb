//! Quebec provincial income tax.
//!
//! Income at or below $18,571 falls outside every bracket, so the whole gross
//! income comes back as the tax. Kept as published pending review.

use std::ops::Bound::{Excluded, Included, Unbounded};

use rust_decimal::Decimal;

use super::rounding::decimal;
use super::schedule::{BracketSchedule, TaxBracket};

/// Provincial brackets, lowest first.
pub const PROVINCIAL_BRACKETS: BracketSchedule = BracketSchedule {
    brackets: &[
        TaxBracket {
            lower: Excluded(decimal(18571, 0)),
            upper: Included(decimal(53255, 0)),
            rate: decimal(14, 2),
        },
        TaxBracket {
            lower: Excluded(decimal(53255, 0)),
            upper: Included(decimal(106495, 0)),
            rate: decimal(19, 2),
        },
        TaxBracket {
            lower: Excluded(decimal(106495, 0)),
            upper: Included(decimal(129590, 0)),
            rate: decimal(24, 2),
        },
        TaxBracket {
            lower: Excluded(decimal(129590, 0)),
            upper: Unbounded,
            rate: decimal(2575, 4),
        },
    ],
};

/// Provincial income tax for an annual gross income.
pub fn provincial_tax(gross_income: Decimal) -> Decimal {
    PROVINCIAL_BRACKETS.apply(gross_income)
}
