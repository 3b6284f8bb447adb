//! Text sinks for the summary report and the rejected-line log.

use std::io::Write;

use tracing::debug;

use super::format::{format_header, format_row};
use crate::error::{EngineError, EngineResult};
use crate::models::{RejectedLine, ReportRow};
use crate::pipeline::{ErrorSink, ReportSink};

fn sink_error(name: &str, err: std::io::Error) -> EngineError {
    EngineError::SinkWrite {
        path: name.to_string(),
        message: err.to_string(),
    }
}

/// Writes the fixed-width summary report to any [`Write`].
///
/// # Example
///
/// ```
/// use payroll_engine::pipeline::ReportSink;
/// use payroll_engine::report::TextReportWriter;
///
/// let mut writer = TextReportWriter::new(Vec::new(), "memory");
/// writer.write_header().unwrap();
/// writer.finish().unwrap();
///
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert!(text.contains("Final Summary Report"));
/// ```
#[derive(Debug)]
pub struct TextReportWriter<W: Write> {
    writer: W,
    name: String,
}

impl<W: Write> TextReportWriter<W> {
    /// Wraps a writer; `name` identifies it in error messages.
    pub fn new(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TextReportWriter<W> {
    fn write_header(&mut self) -> EngineResult<()> {
        self.writer
            .write_all(format_header().as_bytes())
            .map_err(|e| sink_error(&self.name, e))
    }

    fn write_row(&mut self, row: &ReportRow) -> EngineResult<()> {
        writeln!(self.writer, "{}\n", format_row(row)).map_err(|e| sink_error(&self.name, e))
    }

    fn finish(&mut self) -> EngineResult<()> {
        self.writer.flush().map_err(|e| sink_error(&self.name, e))?;
        debug!(sink = %self.name, "report flushed");
        Ok(())
    }
}

/// Writes each rejected line verbatim, one per line.
#[derive(Debug)]
pub struct ErrorLogWriter<W: Write> {
    writer: W,
    name: String,
}

impl<W: Write> ErrorLogWriter<W> {
    /// Wraps a writer; `name` identifies it in error messages.
    pub fn new(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ErrorSink for ErrorLogWriter<W> {
    fn write_rejected(&mut self, line: &RejectedLine) -> EngineResult<()> {
        writeln!(self.writer, "{}", line.text).map_err(|e| sink_error(&self.name, e))
    }

    fn finish(&mut self) -> EngineResult<()> {
        self.writer.flush().map_err(|e| sink_error(&self.name, e))?;
        debug!(sink = %self.name, "error log flushed");
        Ok(())
    }
}
