//! Structured logging set-up.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter directives used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVES: &str = "quartermaster=info,serenity=warn";

/// Error raised when the global subscriber cannot be installed.
#[derive(Debug, Error)]
#[error("failed to initialise tracing: {0}")]
pub struct TelemetryError(String);

/// Installs the global `tracing` subscriber.
///
/// Directives are read from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_DIRECTIVES`].
///
/// # Errors
///
/// Returns [`TelemetryError`] when the directives are malformed or a global
/// subscriber is already installed.
pub fn init_tracing() -> Result<(), TelemetryError> {
    let filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|error| TelemetryError(error.to_string()))
}

fn build_filter(from_env: Option<&str>) -> Result<EnvFilter, TelemetryError> {
    let directives = from_env
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_LOG_DIRECTIVES);
    EnvFilter::try_new(directives).map_err(|error| TelemetryError(error.to_string()))
}
