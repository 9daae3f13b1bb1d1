//! HTTP service for the payroll engine.

use std::process::ExitCode;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{AppSettings, ConfigLoader};
use payroll_engine::telemetry::init_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let settings = match AppSettings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("invalid settings: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_tracing(settings.environment) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match run(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "service stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(settings: AppSettings) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load(&settings.config_dir)?;
    info!(
        company = %config.company().name,
        config_dir = %settings.config_dir.display(),
        "configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    info!(addr = %settings.bind_addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}
