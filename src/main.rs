//! Command-line entry point.
//!
//! Usage:
//!   payroll-engine
//!   payroll-engine --config config/payroll.yaml
//!   payroll-engine --input in.txt --report out/report.txt --errors out/errors.txt
//!
//! Without `--config`, built-in defaults are used. Flags override the config.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

use payroll_engine::config::{ConfigLoader, PayrollConfig};
use payroll_engine::error::EngineResult;
use payroll_engine::models::RunSummary;
use payroll_engine::pipeline::run_files;

/// Validate a payroll file and write the deductions report.
#[derive(Parser, Debug)]
#[command(name = "payroll-engine", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Payroll input file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Summary report output file
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Rejected-line log output file
    #[arg(short, long)]
    errors: Option<PathBuf>,

    /// Reject hourly rates below this amount
    #[arg(long)]
    minimum_wage: Option<Decimal>,

    /// Maximum number of employee records to process
    #[arg(long)]
    max_records: Option<usize>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,
}

impl Cli {
    fn resolve_config(&self) -> EngineResult<PayrollConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => PayrollConfig::default(),
        };

        if let Some(input) = &self.input {
            config = config.with_input(input);
        }
        if let Some(report) = &self.report {
            config = config.with_report(report);
        }
        if let Some(errors) = &self.errors {
            config = config.with_errors(errors);
        }
        if let Some(minimum_wage) = self.minimum_wage {
            config = config.with_minimum_wage(minimum_wage);
        }
        if let Some(max_records) = self.max_records {
            config = config.with_max_records(max_records);
        }

        ConfigLoader::validate(&config)?;
        Ok(config)
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {}", e);
    }
}

fn print_summary(summary: &RunSummary, as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(summary) {
            Ok(json) => println!("{}", json),
            Err(e) => error!(error = %e, "Failed to serialize run summary"),
        }
        return;
    }

    println!(
        "> {} employee information lines read from payroll document",
        summary.records_processed
    );
    println!(
        "> {} lines are logged into the error report",
        summary.lines_rejected
    );
    if summary.capacity_reached {
        println!("> Maximum employees reached; extra lines ignored");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let result = cli.resolve_config().and_then(|config| run_files(&config));

    match result {
        Ok(summary) => {
            print_summary(&summary, cli.json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
