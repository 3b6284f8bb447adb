//! Report rendering.
//!
//! Fixed-width formatting of the summary report and the text sinks that write
//! the report and the rejected-line log.

mod format;
mod writer;

pub use format::{
    REPORT_RULE, REPORT_TITLE, format_column_header, format_header, format_row, render_report,
};
pub use writer::{ErrorLogWriter, TextReportWriter};
