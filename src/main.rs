//! interview-practice binary entry point.

use std::process::ExitCode;
use std::sync::Arc;

use interview_practice::adapters::http::{app_router, SessionHandlers};
use interview_practice::adapters::{postgres, InMemorySessionRepository, PostgresSessionRepository};
use interview_practice::config::{AppConfig, ConfigError};
use interview_practice::ports::SessionRepository;
use interview_practice::telemetry;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("interview-practice: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::try_init(&config.server) {
        eprintln!("interview-practice: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server terminated");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("interview-practice v{}", env!("CARGO_PKG_VERSION"));

    let repository: Arc<dyn SessionRepository> = match &config.database {
        Some(database) => {
            let pool = postgres::connect(database).await?;
            info!("PostgreSQL session store connected");
            Arc::new(PostgresSessionRepository::new(pool))
        }
        None => {
            warn!("no database configured; sessions are kept in memory and lost on exit");
            Arc::new(InMemorySessionRepository::new())
        }
    };

    let app = app_router(SessionHandlers::new(repository), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => error!(error = %e, "failed to listen for shutdown signal"),
    }
}
