//! Tracing subscriber setup.

use crate::ColloquyConfig;
use colloquy_error::{ColloquyResult, ConfigError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins when it holds a valid filter; otherwise `default_filter`
/// is used. `default_filter` is validated either way. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> ColloquyResult<()> {
    let fallback = EnvFilter::try_new(default_filter).map_err(|e| {
        ConfigError::new(format!("Invalid log filter '{}': {}", default_filter, e))
    })?;
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(e) => {
            debug!(error = %e, "RUST_LOG unset or invalid, using configured filter");
            fallback
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install tracing subscriber: {}", e)))?;

    info!(default_filter, "Tracing initialized");
    Ok(())
}

/// Install a global `fmt` subscriber using the config's `log_filter`.
pub fn init_tracing_from_config(config: &ColloquyConfig) -> ColloquyResult<()> {
    init_tracing(config.log_filter())
}
