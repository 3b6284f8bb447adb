//! Fixed-width text layout of the summary report.

use crate::calculation::round2;
use crate::models::ReportRow;

/// First line of the report.
pub const REPORT_TITLE: &str = "                              Final Summary Report";

/// Horizontal rule above and below the column header.
pub const REPORT_RULE: &str =
    "-------------------------------------------------------------------------------------";

/// The column header line.
///
/// # Example
///
/// ```
/// use payroll_engine::report::format_column_header;
///
/// assert_eq!(
///     format_column_header(),
///     "| ID  | First Name | Last Name  | Gross Salary | Deductions |   Net Salary |"
/// );
/// ```
pub fn format_column_header() -> String {
    format!(
        "| {:<3} | {:<10} | {:<10} | {:>12} | {:>10} | {:>12} |",
        "ID", "First Name", "Last Name", "Gross Salary", "Deductions", "Net Salary"
    )
}

/// Title, rule, column header and rule, one per line.
pub fn format_header() -> String {
    format!(
        "{title}\n{rule}\n{columns}\n{rule}\n",
        title = REPORT_TITLE,
        rule = REPORT_RULE,
        columns = format_column_header()
    )
}

/// One report row, without a line terminator.
///
/// Amounts are shown with exactly two decimals.
pub fn format_row(row: &ReportRow) -> String {
    format!(
        "| {:<3} | {:<10} | {:<10} | {:>12} | {:>10} | {:>12} |",
        row.id,
        row.first_name,
        row.last_name,
        round2(row.gross_income).to_string(),
        round2(row.total_deductions).to_string(),
        round2(row.net_income).to_string(),
    )
}

/// Renders a complete report: header, then every row followed by a blank line.
pub fn render_report(rows: &[ReportRow]) -> String {
    let mut out = format_header();
    for row in rows {
        out.push_str(&format_row(row));
        out.push_str("\n\n");
    }
    out
}
