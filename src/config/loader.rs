//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    CompanyMetadata, EngineConfig, PayrollFile, PayrollRules, ReportLabels, ReportsFile,
};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/conservadora/
/// ├── company.yaml   # Company metadata
/// ├── payroll.yaml   # Payroll arithmetic rules
/// └── reports.yaml   # Report labels (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/conservadora").unwrap();
/// println!("Loaded company: {}", loader.company().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `company.yaml` or `payroll.yaml` is missing
    /// - Any file contains invalid YAML
    /// - The payroll rules are unusable (zero divisor, negative penalty)
    ///
    /// A missing `reports.yaml` falls back to the default labels.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyMetadata>(&path.join("company.yaml"))?;

        let payroll_path = path.join("payroll.yaml");
        let rules = Self::load_yaml::<PayrollFile>(&payroll_path)?.payroll;
        Self::validate_rules(&rules, &payroll_path)?;

        let reports_path = path.join("reports.yaml");
        let labels = if reports_path.exists() {
            Self::load_yaml::<ReportsFile>(&reports_path)?.labels
        } else {
            ReportLabels::default()
        };

        tracing::debug!(
            company = %company.code,
            divisor = %rules.daily_rate_divisor,
            penalty_days = %rules.absence_penalty_days,
            "configuration loaded"
        );

        Ok(Self {
            config: EngineConfig::new(company, rules, labels),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_rules(rules: &PayrollRules, path: &Path) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if rules.daily_rate_divisor <= Decimal::ZERO {
            return Err(invalid("daily_rate_divisor must be greater than zero"));
        }
        if rules.absence_penalty_days < Decimal::ZERO {
            return Err(invalid("absence_penalty_days cannot be negative"));
        }
        if rules.money_scale > 10 {
            return Err(invalid("money_scale cannot exceed 10"));
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Returns the payroll rules.
    pub fn rules(&self) -> &PayrollRules {
        self.config.rules()
    }

    /// Returns the report labels.
    pub fn labels(&self) -> &ReportLabels {
        self.config.labels()
    }
}
