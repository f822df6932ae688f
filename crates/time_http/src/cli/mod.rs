use std::net::IpAddr;

use clap::Parser;

use crate::config::{Config, DEFAULT_LOG_LEVEL, DEFAULT_PORT, LogFormat};
use crate::core::error::{TimeServerError, TimeServerResult};

/// Time HTTP Server
///
/// Reports the current time over HTTP, optionally localized to a region name.
///
/// ## Endpoints
/// - `GET /`: current local time
/// - `GET /{region}`: current time in the region's timezone (UTC if unknown)
/// - `GET /health`: liveness probe
/// - `GET /regions`: known region names and their timezones
///
/// ## Environment Variables
/// - `RUST_LOG`: Overrides `--log-level` with a full filter directive
#[derive(Parser, Debug, Clone)]
#[command(name = "http-server-time")]
#[command(about = "An HTTP server reporting the current time by region")]
#[command(version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", value_name = "ADDR")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, value_name = "LEVEL")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> TimeServerResult<Config> {
        Self::parse().into_config()
    }

    pub fn into_config(self) -> TimeServerResult<Config> {
        let host = self
            .host
            .trim()
            .parse::<IpAddr>()
            .map_err(|e| TimeServerError::InvalidConfig {
                message: format!("invalid host '{}': {}", self.host, e),
            })?;

        if self.log_level.trim().is_empty() {
            return Err(TimeServerError::InvalidConfig {
                message: "log level must not be empty".to_string(),
            });
        }

        Ok(Config {
            host,
            port: self.port,
            log_level: self.log_level,
            log_format: self.log_format,
        })
    }
}
