//! Tracing subscriber setup for the service binary.

use std::sync::OnceLock;

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self as tracing_fmt, time::UtcTime},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::Environment;

/// Failure to install the global subscriber.
#[derive(Debug, Error)]
#[error("failed to initialize tracing: {0}")]
pub struct TelemetryError(#[from] TryInitError);

static TRACING_INIT: OnceLock<()> = OnceLock::new();

const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Development and
/// test runs get pretty output; production gets one JSON object per line.
/// Calling this more than once is a no-op.
pub fn init_tracing(environment: Environment) -> Result<(), TelemetryError> {
    if TRACING_INIT.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match environment {
        Environment::Development | Environment::Test => {
            let fmt_layer = tracing_fmt::layer()
                .with_target(false)
                .with_timer(UtcTime::rfc_3339())
                .event_format(tracing_fmt::format().pretty());

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        Environment::Production => {
            let fmt_layer = tracing_fmt::layer()
                .with_target(false)
                .with_timer(UtcTime::rfc_3339())
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    TRACING_INIT.set(()).ok();
    tracing::info!(
        env = environment.as_str(),
        version = BUILD_VERSION,
        "tracing initialized"
    );
    Ok(())
}
