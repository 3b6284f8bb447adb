//! Rejected input lines.

use serde::Serialize;

/// A payroll line that failed validation.
///
/// Only the raw text is written to the error log; the line number is kept for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    /// 1-based physical line number in the input.
    pub line_number: usize,
    /// The line exactly as read, without its terminator.
    pub text: String,
}

impl RejectedLine {
    /// Creates a rejected line.
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}
