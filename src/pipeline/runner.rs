//! The payroll pipeline: read, validate, accumulate, compute, report.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, info_span, trace, warn};

use super::io::{ErrorSink, LineSource, ReportSink};
use crate::calculation::calculate_deductions;
use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{EmployeeRecord, RejectedLine, ReportRow, RunSummary};
use crate::validation::{is_blank, validate_record};

/// Where the pipeline is in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    /// Waiting for the next input line.
    Reading,
    /// Checking one line.
    Validating,
    /// Storing a valid record or a rejected line.
    Accumulating,
    /// Running the deduction calculators over the records.
    Computing,
    /// Writing the report and the error log.
    Reporting,
    /// The run has finished successfully.
    Done,
}

/// Everything gathered from the input in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// Valid records, in input order, at most `max_records` of them.
    pub records: Vec<EmployeeRecord>,
    /// Lines that failed validation, in input order.
    pub rejected: Vec<RejectedLine>,
    /// Whitespace-only lines skipped.
    pub blank_lines: usize,
    /// True if reading stopped because a valid line arrived at capacity.
    pub capacity_reached: bool,
}

/// Drives one payroll batch from a line source to the report and error sinks.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{RejectedLine, ReportRow};
/// use payroll_engine::pipeline::{PayrollPipeline, ReaderSource};
///
/// let input = "1 John Doe 40 20.00\n2 Jane Smith -5 20.00\n";
/// let mut source = ReaderSource::new(input.as_bytes());
/// let mut rows: Vec<ReportRow> = Vec::new();
/// let mut rejected: Vec<RejectedLine> = Vec::new();
///
/// let summary = PayrollPipeline::new(&PayrollConfig::default())
///     .run(&mut source, &mut rows, &mut rejected)
///     .unwrap();
///
/// assert_eq!(summary.records_processed, 1);
/// assert_eq!(summary.lines_rejected, 1);
/// assert_eq!(rows[0].net_income.to_string(), "24155.46");
/// assert_eq!(rejected[0].text, "2 Jane Smith -5 20.00");
/// ```
#[derive(Debug, Clone)]
pub struct PayrollPipeline {
    minimum_wage: Decimal,
    max_records: usize,
    state: PipelineState,
}

impl PayrollPipeline {
    /// Creates a pipeline using the minimum wage and capacity from `config`.
    pub fn new(config: &PayrollConfig) -> Self {
        Self {
            minimum_wage: config.minimum_wage,
            max_records: config.max_records,
            state: PipelineState::Reading,
        }
    }

    /// The current state.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn transition(&mut self, next: PipelineState) {
        trace!(from = ?self.state, to = ?next, "pipeline state");
        self.state = next;
    }

    /// Reads and validates every line until the input ends or capacity is hit.
    ///
    /// Invalid lines are recovered here: each is recorded as a
    /// [`RejectedLine`] and reading continues. Only source I/O failures
    /// escape.
    pub fn ingest<S: LineSource + ?Sized>(&mut self, source: &mut S) -> EngineResult<Batch> {
        let mut batch = Batch::default();
        let mut line_number = 0usize;

        loop {
            self.transition(PipelineState::Reading);
            let Some(line) = source.next_line()? else {
                break;
            };
            line_number += 1;

            if is_blank(&line) {
                batch.blank_lines += 1;
                continue;
            }

            self.transition(PipelineState::Validating);
            let outcome = validate_record(&line, self.minimum_wage);

            self.transition(PipelineState::Accumulating);
            match outcome {
                Ok(record) => {
                    if batch.records.len() >= self.max_records {
                        warn!(
                            max_records = self.max_records,
                            line_number, "Maximum employees reached; remaining lines ignored"
                        );
                        batch.capacity_reached = true;
                        break;
                    }
                    batch.records.push(record);
                }
                Err(error) => {
                    debug!(
                        line_number,
                        kind = error.kind(),
                        error = %error,
                        "Rejected payroll line"
                    );
                    batch.rejected.push(RejectedLine::new(line_number, line));
                }
            }
        }

        Ok(batch)
    }

    /// Runs the deduction calculators over each record, in order.
    pub fn compute(&mut self, records: &[EmployeeRecord]) -> Vec<ReportRow> {
        self.transition(PipelineState::Computing);
        records
            .iter()
            .map(|record| ReportRow::new(record, &calculate_deductions(record.gross_income())))
            .collect()
    }

    /// Runs a whole batch: ingest, compute, then write the error log and the
    /// report.
    ///
    /// Sinks are flushed before returning. On error the run stops where it
    /// failed and the state is left at the failing phase.
    pub fn run<S, R, E>(
        &mut self,
        source: &mut S,
        report: &mut R,
        errors: &mut E,
    ) -> EngineResult<RunSummary>
    where
        S: LineSource + ?Sized,
        R: ReportSink + ?Sized,
        E: ErrorSink + ?Sized,
    {
        let mut summary = RunSummary::empty();
        let span = info_span!("payroll_run", run_id = %summary.run_id);
        let _guard = span.enter();
        info!(
            minimum_wage = %self.minimum_wage,
            max_records = self.max_records,
            "Starting payroll run"
        );

        let batch = self.ingest(source)?;
        let rows = self.compute(&batch.records);

        self.transition(PipelineState::Reporting);
        for rejected in &batch.rejected {
            errors.write_rejected(rejected)?;
        }
        errors.finish()?;

        report.write_header()?;
        for row in &rows {
            report.write_row(row)?;
        }
        report.finish()?;

        summary.records_processed = rows.len();
        summary.lines_rejected = batch.rejected.len();
        summary.blank_lines_skipped = batch.blank_lines;
        summary.capacity_reached = batch.capacity_reached;
        let mut totals_exact = true;
        for row in &rows {
            totals_exact &= summary.add_row(row);
        }
        if !totals_exact {
            warn!("Batch totals exceed the decimal range and were saturated");
        }
        summary.completed_at = Utc::now();

        self.transition(PipelineState::Done);
        info!(
            records = summary.records_processed,
            rejected = summary.lines_rejected,
            capacity_reached = summary.capacity_reached,
            "Payroll run complete"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ReaderSource;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ingest(input: &str, config: &PayrollConfig) -> Batch {
        let mut source = ReaderSource::new(input.as_bytes());
        PayrollPipeline::new(config).ingest(&mut source).unwrap()
    }

    fn valid_lines(count: usize) -> String {
        (1..=count)
            .map(|i| format!("{} First{} Last{} 40 20.00\n", i, i, i))
            .collect()
    }

    #[test]
    fn test_ingest_splits_valid_and_rejected() {
        let input = "1 John Doe 40 20.00\n2 Jane Smith -5 20.00\n3 Bob Lee 40 10.00\nabc Tom Lee 40 20.00\n";
        let batch = ingest(input, &PayrollConfig::default());

        assert_eq!(batch.records.len(), 1);
        assert_eq!(
            batch.rejected,
            vec![
                RejectedLine::new(2, "2 Jane Smith -5 20.00"),
                RejectedLine::new(3, "3 Bob Lee 40 10.00"),
                RejectedLine::new(4, "abc Tom Lee 40 20.00"),
            ]
        );
        assert!(!batch.capacity_reached);
    }

    #[test]
    fn test_blank_lines_are_neither_valid_nor_rejected() {
        let batch = ingest("\n   \n1 John Doe 40 20.00\n\t\n", &PayrollConfig::default());

        assert_eq!(batch.records.len(), 1);
        assert!(batch.rejected.is_empty());
        assert_eq!(batch.blank_lines, 3);
    }

    #[test]
    fn test_rejected_line_numbers_count_blank_lines() {
        let batch = ingest("\n\nbad line\n", &PayrollConfig::default());
        assert_eq!(batch.rejected, vec![RejectedLine::new(3, "bad line")]);
    }

    #[test]
    fn test_rejected_lines_are_kept_verbatim() {
        let batch = ingest("  7  Tom\t\n", &PayrollConfig::default());
        assert_eq!(batch.rejected[0].text, "  7  Tom\t");
    }

    #[test]
    fn test_capacity_stops_at_next_valid_line() {
        let config = PayrollConfig::default().with_max_records(2);
        let input = format!("{}bad\n{}", valid_lines(2), valid_lines(3));
        let batch = ingest(&input, &config);

        assert_eq!(batch.records.len(), 2);
        // The invalid line before the overflowing record is still logged.
        assert_eq!(batch.rejected, vec![RejectedLine::new(3, "bad")]);
        assert!(batch.capacity_reached);
    }

    #[test]
    fn test_lines_after_capacity_are_not_logged() {
        let config = PayrollConfig::default().with_max_records(1);
        let batch = ingest("1 A B 40 20\n2 C D 40 20\nbad\n", &config);

        assert_eq!(batch.records.len(), 1);
        assert!(batch.rejected.is_empty());
        assert!(batch.capacity_reached);
    }

    #[test]
    fn test_exactly_at_capacity_is_not_flagged() {
        let config = PayrollConfig::default().with_max_records(2);
        let batch = ingest(&valid_lines(2), &config);

        assert_eq!(batch.records.len(), 2);
        assert!(!batch.capacity_reached);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let config = PayrollConfig::default().with_max_records(0);
        let batch = ingest("bad\n1 A B 40 20\n", &config);

        assert!(batch.records.is_empty());
        assert_eq!(batch.rejected.len(), 1);
        assert!(batch.capacity_reached);
    }

    #[test]
    fn test_compute_rows_in_input_order() {
        let batch = ingest("2 B B 40 20\n1 A A 10 16\n", &PayrollConfig::default());
        let rows = PayrollPipeline::new(&PayrollConfig::default()).compute(&batch.records);

        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(rows[0].total_deductions, dec("17444.54"));
        // 52 * 16 * 10 = 8320.00
        assert_eq!(rows[1].gross_income, dec("8320.00"));
    }

    #[test]
    fn test_run_reaches_done_and_totals_rows() {
        let mut pipeline = PayrollPipeline::new(&PayrollConfig::default());
        assert_eq!(pipeline.state(), PipelineState::Reading);

        let mut source = ReaderSource::new("1 John Doe 40 20.00\n2 Jane Doe 40 20.00\n".as_bytes());
        let mut rows: Vec<ReportRow> = Vec::new();
        let mut rejected: Vec<RejectedLine> = Vec::new();
        let summary = pipeline.run(&mut source, &mut rows, &mut rejected).unwrap();

        assert_eq!(pipeline.state(), PipelineState::Done);
        assert_eq!(summary.records_processed, 2);
        assert_eq!(summary.total_gross_income, dec("83200.00"));
        assert_eq!(summary.total_deductions, dec("34889.08"));
        assert_eq!(summary.total_net_income, dec("48310.92"));
    }

    #[test]
    fn test_run_with_oversized_incomes_completes() {
        let input = "1 A B 90000000000000000000000000 15.75\n\
                     2 C D 90000000000000000000000000 15.75\n\
                     3 John Doe 40 20.00\n";
        let mut pipeline = PayrollPipeline::new(&PayrollConfig::default());
        let mut source = ReaderSource::new(input.as_bytes());
        let mut rows: Vec<ReportRow> = Vec::new();
        let mut rejected: Vec<RejectedLine> = Vec::new();

        let summary = pipeline.run(&mut source, &mut rows, &mut rejected).unwrap();

        assert_eq!(pipeline.state(), PipelineState::Done);
        assert_eq!(summary.records_processed, 1);
        assert_eq!(summary.lines_rejected, 2);
        assert_eq!(rejected[0].line_number, 1);
        assert_eq!(rejected[1].line_number, 2);
        assert_eq!(summary.total_gross_income, dec("41600.00"));
    }

    #[test]
    fn test_run_at_maximum_gross_income_totals_exactly() {
        // 52 * 19230769230769.23 = 999999999999999.96
        let line = "1 Top Earner 1 19230769230769.23\n";
        let input = line.repeat(150);
        let mut source = ReaderSource::new(input.as_bytes());
        let mut rows: Vec<ReportRow> = Vec::new();
        let mut rejected: Vec<RejectedLine> = Vec::new();

        let summary = PayrollPipeline::new(&PayrollConfig::default())
            .run(&mut source, &mut rows, &mut rejected)
            .unwrap();

        assert_eq!(summary.records_processed, 150);
        assert_eq!(summary.total_gross_income, dec("149999999999999994.00"));
        assert_eq!(rows[0].gross_income.to_string(), "999999999999999.96");
    }

    #[test]
    fn test_source_error_aborts_before_reporting() {
        let bytes: &[u8] = b"1 John Doe 40 20.00\n\xff\n";
        let mut source = ReaderSource::new(bytes);
        let mut rows: Vec<ReportRow> = Vec::new();
        let mut rejected: Vec<RejectedLine> = Vec::new();

        let mut pipeline = PayrollPipeline::new(&PayrollConfig::default());
        let result = pipeline.run(&mut source, &mut rows, &mut rejected);

        assert!(result.is_err());
        assert!(rows.is_empty());
        assert_ne!(pipeline.state(), PipelineState::Done);
    }
}
