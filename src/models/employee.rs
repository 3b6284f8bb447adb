//! Employee record model.
//!
//! An [`EmployeeRecord`] is only ever built from a fully validated line and is
//! immutable afterwards; its gross income is derived once, at construction.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::gross_income;
use crate::error::{RecordError, RecordField};

/// A validated employee line from the payroll input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    id: u64,
    first_name: String,
    last_name: String,
    hours_worked: Decimal,
    hourly_rate: Decimal,
    gross_income: Decimal,
}

impl EmployeeRecord {
    /// Builds a record and derives its annual gross income.
    ///
    /// Field-level checks (sign, minimum wage) belong to the validator; the
    /// only failure here is a gross income above
    /// [`MAX_GROSS_INCOME`](crate::calculation::MAX_GROSS_INCOME).
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord::new(
    ///     1,
    ///     "John".to_string(),
    ///     "Doe".to_string(),
    ///     Decimal::new(40, 0),
    ///     Decimal::new(2000, 2),
    /// )
    /// .unwrap();
    /// assert_eq!(record.gross_income(), Decimal::new(4160000, 2));
    /// ```
    pub fn new(
        id: u64,
        first_name: String,
        last_name: String,
        hours_worked: Decimal,
        hourly_rate: Decimal,
    ) -> Result<Self, RecordError> {
        let gross_income =
            gross_income(hours_worked, hourly_rate).ok_or_else(|| RecordError::Format {
                field: RecordField::HourlyRate,
                message: format!(
                    "gross income for {} hours at {} is out of range",
                    hours_worked, hourly_rate
                ),
            })?;

        Ok(Self {
            id,
            first_name,
            last_name,
            hours_worked,
            hourly_rate,
            gross_income,
        })
    }

    /// The employee identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The employee's first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The employee's last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Weekly hours worked.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Hourly pay rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Annual gross income, rounded to the cent.
    pub fn gross_income(&self) -> Decimal {
        self.gross_income
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(hours: &str, rate: &str) -> EmployeeRecord {
        EmployeeRecord::new(7, "Ada".to_string(), "Byron".to_string(), dec(hours), dec(rate))
            .unwrap()
    }

    #[test]
    fn test_gross_income_is_annualised_weekly_pay() {
        assert_eq!(record("40", "20.00").gross_income(), dec("41600.00"));
    }

    #[test]
    fn test_gross_income_rounds_half_up_to_cents() {
        // 52 * 15.75 * 0.01 = 8.19
        assert_eq!(record("0.01", "15.75").gross_income(), dec("8.19"));
        // 52 * 16.0001 * 1 = 832.0052 -> 832.01
        assert_eq!(record("1", "16.0001").gross_income(), dec("832.01"));
        // 52 * 1 * 0.00125 = 0.065, exactly half a cent -> 0.07
        assert_eq!(record("0.00125", "1").gross_income(), dec("0.07"));
    }

    #[test]
    fn test_zero_hours_gives_zero_income() {
        assert_eq!(record("0", "20").gross_income(), Decimal::ZERO);
    }

    #[test]
    fn test_accessors_return_constructed_values() {
        let record = record("37.5", "32.40");
        assert_eq!(record.id(), 7);
        assert_eq!(record.first_name(), "Ada");
        assert_eq!(record.last_name(), "Byron");
        assert_eq!(record.hours_worked(), dec("37.5"));
        assert_eq!(record.hourly_rate(), dec("32.40"));
    }

    #[test]
    fn test_overflowing_gross_income_is_a_format_error() {
        let huge = Decimal::MAX;
        let result = EmployeeRecord::new(1, "A".to_string(), "B".to_string(), huge, huge);

        match result {
            Err(RecordError::Format { field, .. }) => assert_eq!(field, RecordField::HourlyRate),
            other => panic!("Expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_serializes_money_as_strings() {
        let json = serde_json::to_value(record("40", "20.00")).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["gross_income"], "41600.00");
    }
}
