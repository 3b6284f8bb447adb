//! Record validation.
//!
//! Turns one raw payroll line into an [`EmployeeRecord`](crate::models::EmployeeRecord)
//! or a classified [`RecordError`](crate::error::RecordError).

mod record;

pub use record::{is_blank, validate_record};
