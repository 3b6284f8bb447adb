//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// Loads payroll configuration from YAML.
///
/// # File format
///
/// ```text
/// minimum_wage: "15.75"
/// max_records: 150
/// paths:
///   input: data/payroll.txt
///   report: data/payrollReport.txt
///   errors: data/payrollError.txt
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Minimum wage: {}", config.minimum_wage);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns the parsed [`PayrollConfig`], or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for the config shape (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<PayrollConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration text; `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &str) -> EngineResult<PayrollConfig> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot drive a run.
    pub fn validate(config: &PayrollConfig) -> EngineResult<()> {
        if config.minimum_wage < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "minimum_wage".to_string(),
                message: format!("must not be negative (got {})", config.minimum_wage),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/payroll.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.minimum_wage, dec("15.75"));
        assert_eq!(config.max_records, 150);
        assert_eq!(config.paths.input, PathBuf::from("data/payroll.txt"));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/payroll.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_overrides() {
        let yaml = "minimum_wage: \"16.10\"\nmax_records: 2\npaths:\n  report: out/r.txt\n";
        let config = ConfigLoader::parse(yaml, "inline").unwrap();

        assert_eq!(config.minimum_wage, dec("16.10"));
        assert_eq!(config.max_records, 2);
        assert_eq!(config.paths.report, PathBuf::from("out/r.txt"));
        assert_eq!(config.paths.input, PathBuf::from("data/payroll.txt"));
    }

    #[test]
    fn test_parse_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::parse("max_records: [not, a, number]", "inline");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "inline"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_minimum_wage_is_refused() {
        let result = ConfigLoader::parse("minimum_wage: \"-1\"", "inline");

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "minimum_wage"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
