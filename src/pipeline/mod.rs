//! The payroll pipeline.
//!
//! Lines flow from a [`LineSource`] through the validator into a bounded
//! [`Batch`]; the batch's records are run through the deduction calculators and
//! the results go to a [`ReportSink`], while rejected lines go to an
//! [`ErrorSink`]. [`run_files`] wires the pipeline to the configured files.

mod files;
mod io;
mod runner;

pub use files::run_files;
pub use io::{ErrorSink, LineSource, ReaderSource, ReportSink};
pub use runner::{Batch, PayrollPipeline, PipelineState};
