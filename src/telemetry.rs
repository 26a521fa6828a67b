//! Logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServerConfig;

/// Builds the event filter: `RUST_LOG` wins over the configured directive.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Try to install the global subscriber.
///
/// Production emits JSON lines; other environments use the compact format.
/// Returns `Err` if a subscriber has already been installed.
pub fn try_init(server: &ServerConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = env_filter(&server.log_level);

    if server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init()
    }
}
