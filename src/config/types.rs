//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the company the engine runs for.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// Short code used in logs and file names.
    pub code: String,
    /// The company's trading name.
    pub name: String,
    /// ISO 4217 currency code of all monetary amounts.
    pub currency: String,
    /// Locale used by report renderers.
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "pt-BR".to_string()
}

/// Arithmetic rules for payroll.
///
/// The defaults reproduce the company's fixed convention: a 30-day month
/// and two days deducted per absence (the day itself plus the weekly rest
/// day), with amounts kept to cents.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollRules;
/// use rust_decimal::Decimal;
///
/// let rules = PayrollRules::default();
/// assert_eq!(rules.daily_rate_divisor, Decimal::from(30));
/// assert_eq!(rules.absence_penalty_days, Decimal::from(2));
/// assert_eq!(rules.money_scale, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollRules {
    /// Divisor that turns a monthly salary into a daily rate.
    pub daily_rate_divisor: Decimal,
    /// Daily rates deducted for each absence.
    pub absence_penalty_days: Decimal,
    /// Decimal places kept on monetary results.
    #[serde(default = "default_money_scale")]
    pub money_scale: u32,
}

fn default_money_scale() -> u32 {
    2
}

impl Default for PayrollRules {
    fn default() -> Self {
        Self {
            daily_rate_divisor: Decimal::from(30),
            absence_penalty_days: Decimal::from(2),
            money_scale: default_money_scale(),
        }
    }
}

/// Placeholder texts used when building report rows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportLabels {
    /// Shown instead of the name when an absence's employee is unknown.
    pub unknown_employee: String,
    /// Shown when an absence has no reason.
    pub unspecified_reason: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            unknown_employee: "N/A".to_string(),
            unspecified_reason: "Unspecified".to_string(),
        }
    }
}

/// payroll.yaml structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollFile {
    /// Payroll rules.
    pub payroll: PayrollRules,
}

/// reports.yaml structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsFile {
    /// Report labels.
    pub labels: ReportLabels,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Company metadata.
    company: CompanyMetadata,
    /// Payroll rules.
    rules: PayrollRules,
    /// Report labels.
    labels: ReportLabels,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(company: CompanyMetadata, rules: PayrollRules, labels: ReportLabels) -> Self {
        Self {
            company,
            rules,
            labels,
        }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.company
    }

    /// Returns the payroll rules.
    pub fn rules(&self) -> &PayrollRules {
        &self.rules
    }

    /// Returns the report labels.
    pub fn labels(&self) -> &ReportLabels {
        &self.labels
    }
}
