//! File-backed payroll runs.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::info;

use super::io::ReaderSource;
use super::runner::PayrollPipeline;
use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::RunSummary;
use crate::report::{ErrorLogWriter, TextReportWriter};

/// Runs the pipeline over the files named in `config.paths`.
///
/// The input is opened first, so a missing input leaves no output files
/// behind. The report and error log are then created (with any missing parent
/// directories). Every handle is closed when this function returns, whether
/// the run succeeded or not.
///
/// # Errors
///
/// - [`EngineError::SourceUnavailable`] if the input cannot be opened
/// - [`EngineError::SourceRead`] if the input cannot be read
/// - [`EngineError::SinkWrite`] if an output cannot be created or written
pub fn run_files(config: &PayrollConfig) -> EngineResult<RunSummary> {
    let input_path = &config.paths.input;
    let input = File::open(input_path).map_err(|e| EngineError::SourceUnavailable {
        path: input_path.display().to_string(),
        message: e.to_string(),
    })?;
    info!(path = %input_path.display(), "Opened payroll input");

    let report_file = create_output(&config.paths.report)?;
    let error_file = create_output(&config.paths.errors)?;

    let mut source = ReaderSource::new(BufReader::new(input));
    let mut report = TextReportWriter::new(
        BufWriter::new(report_file),
        config.paths.report.display().to_string(),
    );
    let mut errors = ErrorLogWriter::new(
        BufWriter::new(error_file),
        config.paths.errors.display().to_string(),
    );

    let summary = PayrollPipeline::new(config).run(&mut source, &mut report, &mut errors)?;

    info!(
        report = %config.paths.report.display(),
        errors = %config.paths.errors.display(),
        "Payroll files written"
    );
    Ok(summary)
}

fn create_output(path: &Path) -> EngineResult<File> {
    let sink_error = |e: std::io::Error| EngineError::SinkWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(sink_error)?;
    }

    File::create(path).map_err(sink_error)
}
