//! Cent rounding and gross income.

use rust_decimal::{Decimal, RoundingStrategy};

/// Weeks in a payroll year.
pub const WEEKS_PER_YEAR: Decimal = decimal(52, 0);

/// Largest annual gross income a record may carry: 10^15.
///
/// Keeps every amount (and the batch totals) well inside the range where
/// two decimal places can always be represented.
pub const MAX_GROSS_INCOME: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Builds a non-negative decimal constant from an integer mantissa and scale.
pub(crate) const fn decimal(mantissa: u32, scale: u32) -> Decimal {
    Decimal::from_parts(mantissa, 0, 0, false, scale)
}

/// Rounds to two decimal places, halves away from zero.
///
/// The result always carries exactly two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("205.505").unwrap()).to_string(), "205.51");
/// assert_eq!(round2(Decimal::from(41600)).to_string(), "41600.00");
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Annual gross income: `round2(52 * hourly_rate * hours_worked)`.
///
/// Returns `None` if the product overflows or exceeds [`MAX_GROSS_INCOME`].
pub fn gross_income(hours_worked: Decimal, hourly_rate: Decimal) -> Option<Decimal> {
    WEEKS_PER_YEAR
        .checked_mul(hourly_rate)
        .and_then(|weekly| weekly.checked_mul(hours_worked))
        .map(round2)
        .filter(|gross| gross.abs() <= MAX_GROSS_INCOME)
}
