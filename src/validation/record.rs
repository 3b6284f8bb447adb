//! Parsing and validation of one payroll line.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{RecordError, RecordField};
use crate::models::EmployeeRecord;

/// True if the line holds nothing but whitespace.
///
/// Blank lines are skipped by the pipeline without being counted as valid or
/// rejected.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parses a non-blank line into an [`EmployeeRecord`].
///
/// Fields are whitespace-separated and read in order: employee ID, first
/// name, last name, hours worked, hourly rate. Validation stops at the first
/// failing field. Tokens after the hourly rate are ignored.
///
/// # Errors
///
/// - [`RecordError::Format`] if a field is missing or not of the right type
/// - [`RecordError::NegativeValue`] if the ID, hours or rate is negative
/// - [`RecordError::MinimumWage`] if the rate is below `minimum_wage`
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::validate_record;
/// use payroll_engine::error::RecordError;
/// use rust_decimal::Decimal;
///
/// let minimum = Decimal::new(1575, 2);
///
/// let record = validate_record("1 John Doe 40 20.00", minimum).unwrap();
/// assert_eq!(record.id(), 1);
/// assert_eq!(record.gross_income(), Decimal::new(4160000, 2));
///
/// let rejected = validate_record("3 Bob Lee 40 10.00", minimum);
/// assert!(matches!(rejected, Err(RecordError::MinimumWage { .. })));
/// ```
pub fn validate_record(line: &str, minimum_wage: Decimal) -> Result<EmployeeRecord, RecordError> {
    let mut tokens = line.split_whitespace();

    let id = parse_id(tokens.next())?;
    let first_name = require_token(tokens.next(), RecordField::FirstName)?;
    let last_name = require_token(tokens.next(), RecordField::LastName)?;
    let hours_worked = parse_amount(tokens.next(), RecordField::HoursWorked)?;
    let hourly_rate = parse_amount(tokens.next(), RecordField::HourlyRate)?;

    if hourly_rate < minimum_wage {
        return Err(RecordError::MinimumWage {
            rate: hourly_rate,
            minimum: minimum_wage,
        });
    }

    EmployeeRecord::new(
        id,
        first_name.to_string(),
        last_name.to_string(),
        hours_worked,
        hourly_rate,
    )
}

fn missing(field: RecordField) -> RecordError {
    RecordError::Format {
        field,
        message: "missing".to_string(),
    }
}

fn require_token(token: Option<&str>, field: RecordField) -> Result<&str, RecordError> {
    token.ok_or_else(|| missing(field))
}

/// IDs must fit a signed 64-bit integer and be non-negative.
fn parse_id(token: Option<&str>) -> Result<u64, RecordError> {
    let token = require_token(token, RecordField::EmployeeId)?;

    let id: i64 = token.parse().map_err(|_| RecordError::Format {
        field: RecordField::EmployeeId,
        message: format!("'{}' is not an integer", token),
    })?;

    if id < 0 {
        return Err(RecordError::NegativeValue {
            field: RecordField::EmployeeId,
            value: token.to_string(),
        });
    }

    Ok(id.unsigned_abs())
}

fn parse_amount(token: Option<&str>, field: RecordField) -> Result<Decimal, RecordError> {
    let token = require_token(token, field)?;

    let not_a_number = || RecordError::Format {
        field,
        message: format!("'{}' is not a number", token),
    };

    let value = if is_plain_decimal(token) {
        Decimal::from_str(token).map_err(|_| not_a_number())?
    } else {
        parse_scientific(token).ok_or_else(not_a_number)?
    };

    if value < Decimal::ZERO {
        return Err(RecordError::NegativeValue {
            field,
            value: token.to_string(),
        });
    }

    Ok(value)
}

/// Optional sign, digits, at most one decimal point, at least one digit.
///
/// `Decimal::from_str` is more lenient than the input format (it accepts
/// `_` separators, for one), so tokens are screened first.
fn is_plain_decimal(token: &str) -> bool {
    let unsigned = token
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(token);
    let mut digits = 0;
    let mut points = 0;

    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }

    digits > 0 && points <= 1
}

/// Largest exponent accepted in scientific notation.
const MAX_EXPONENT: u32 = 28;

/// Parses `[+-]digits[.digits](e|E)[+-]digits`, such as `2e1` or `2.5E-1`.
///
/// Returns `None` for anything else, including exponents beyond
/// [`MAX_EXPONENT`] and results outside the `Decimal` range.
fn parse_scientific(token: &str) -> Option<Decimal> {
    let (mantissa, exponent) = token.split_once(['e', 'E'])?;
    if !is_plain_decimal(mantissa) {
        return None;
    }

    let (negative, digits) = match exponent.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, exponent.strip_prefix('+').unwrap_or(exponent)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let power: u32 = digits.parse().ok()?;
    if power > MAX_EXPONENT {
        return None;
    }

    let value = Decimal::from_str(mantissa).ok()?;
    let factor = Decimal::from_i128_with_scale(10_i128.pow(power), 0);
    if negative {
        value.checked_div(factor)
    } else {
        value.checked_mul(factor)
    }
}
