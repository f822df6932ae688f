use tracing_subscriber::{EnvFilter, prelude::*};

use crate::config::LogFormat;
use crate::core::error::{TimeServerError, TimeServerResult};

/// Initialize logging
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity; takes precedence over `log_level`
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized
/// - `Err(TimeServerError::LoggingInitialization)` if the filter is invalid or
///   a global subscriber is already installed
pub fn init_logging(log_level: &str, format: LogFormat) -> TimeServerResult<()> {
    let env_filter = build_filter(log_level)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    result.map_err(|e| TimeServerError::LoggingInitialization(e.to_string()))
}

fn build_filter(log_level: &str) -> TimeServerResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(log_level)
        .map_err(|e| TimeServerError::LoggingInitialization(format!("{log_level}: {e}")))
}
