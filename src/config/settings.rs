//! Runtime settings resolved from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Default address the HTTP service binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

/// Default configuration directory.
pub const DEFAULT_CONFIG_DIR: &str = "./config/conservadora";

/// Application runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development; human-readable logs.
    Development,
    /// Deployed service; JSON logs.
    Production,
    /// Automated tests.
    Test,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, SettingsError> {
        match value {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(SettingsError::InvalidEnvironment(other.to_string())),
        }
    }

    /// Returns the canonical name used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

/// Errors that can occur while reading runtime settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `APP_ENV` held an unknown value.
    #[error("APP_ENV must be one of 'development', 'production', or 'test' (got {0})")]
    InvalidEnvironment(String),
    /// `APP_BIND_ADDR` was not a socket address.
    #[error("invalid APP_BIND_ADDR value: {0}")]
    BindAddress(#[from] std::net::AddrParseError),
}

/// Settings for the HTTP service binary.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Address to listen on.
    pub bind_addr: SocketAddr,
    /// Runtime environment.
    pub environment: Environment,
    /// Directory holding the YAML configuration.
    pub config_dir: PathBuf,
}

impl AppSettings {
    /// Reads `APP_ENV`, `APP_BIND_ADDR` and `PAYROLL_CONFIG_DIR`.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment =
            Environment::parse(&lookup("APP_ENV").unwrap_or_else(|| "development".to_string()))?;
        let bind_addr = lookup("APP_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()?;
        let config_dir = lookup("PAYROLL_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));

        Ok(Self {
            bind_addr,
            environment,
            config_dir,
        })
    }
}
