//! Configuration loading and management for the payroll engine.
//!
//! This module loads the company configuration from YAML files (company
//! metadata, payroll rules and report labels) and reads the service's runtime
//! settings from the environment.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/conservadora").unwrap();
//! println!("Loaded company: {}", config.company().name);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{AppSettings, DEFAULT_BIND_ADDR, DEFAULT_CONFIG_DIR, Environment, SettingsError};
pub use types::{CompanyMetadata, EngineConfig, PayrollRules, ReportLabels};
