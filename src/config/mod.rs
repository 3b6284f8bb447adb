//! Configuration loading and management for the payroll engine.
//!
//! Minimum wage, record capacity and file locations are carried in an explicit
//! [`PayrollConfig`] that is passed into the pipeline, optionally loaded from
//! YAML.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Capacity: {}", config.max_records);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_MAX_RECORDS, DEFAULT_MINIMUM_WAGE, OutputPaths, PayrollConfig};
