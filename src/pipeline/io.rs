//! Seams between the pipeline and its input and outputs.

use std::io::BufRead;

use crate::error::{EngineError, EngineResult};
use crate::models::{RejectedLine, ReportRow};

/// A finite sequence of raw payroll lines.
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> EngineResult<Option<String>>;
}

/// Consumer of the rendered summary report.
pub trait ReportSink {
    /// Writes the fixed report header. Called once, before any row.
    fn write_header(&mut self) -> EngineResult<()>;

    /// Writes one employee row.
    fn write_row(&mut self, row: &ReportRow) -> EngineResult<()>;

    /// Flushes buffered output.
    fn finish(&mut self) -> EngineResult<()> {
        Ok(())
    }
}

/// Consumer of rejected lines.
pub trait ErrorSink {
    /// Records one rejected line.
    fn write_rejected(&mut self, line: &RejectedLine) -> EngineResult<()>;

    /// Flushes buffered output.
    fn finish(&mut self) -> EngineResult<()> {
        Ok(())
    }
}

/// Collects rows in memory.
impl ReportSink for Vec<ReportRow> {
    fn write_header(&mut self) -> EngineResult<()> {
        Ok(())
    }

    fn write_row(&mut self, row: &ReportRow) -> EngineResult<()> {
        self.push(row.clone());
        Ok(())
    }
}

/// Collects rejected lines in memory.
impl ErrorSink for Vec<RejectedLine> {
    fn write_rejected(&mut self, line: &RejectedLine) -> EngineResult<()> {
        self.push(line.clone());
        Ok(())
    }
}

/// Reads lines from any buffered reader.
///
/// Both `\n` and `\r\n` terminators are stripped.
///
/// # Example
///
/// ```
/// use payroll_engine::pipeline::{LineSource, ReaderSource};
///
/// let mut source = ReaderSource::new("1 John Doe 40 20.00\r\n\n".as_bytes());
/// assert_eq!(source.next_line().unwrap().as_deref(), Some("1 John Doe 40 20.00"));
/// assert_eq!(source.next_line().unwrap().as_deref(), Some(""));
/// assert_eq!(source.next_line().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    lines_read: usize,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lines_read: 0,
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> EngineResult<Option<String>> {
        let mut line = String::new();
        let bytes = self
            .reader
            .read_line(&mut line)
            .map_err(|e| EngineError::SourceRead {
                line_number: self.lines_read + 1,
                message: e.to_string(),
            })?;

        if bytes == 0 {
            return Ok(None);
        }

        self.lines_read += 1;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
