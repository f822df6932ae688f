use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

// Error codes
const ERROR_INVALID_TIMEZONE: &str = "invalid_timezone";
const ERROR_INVALID_CONFIG: &str = "invalid_config";
const ERROR_LOGGING_INITIALIZATION: &str = "logging_initialization";
const ERROR_SERVER: &str = "server_error";

/// Errors raised by the time server, from startup through request handling
#[derive(Debug, thiserror::Error)]
pub enum TimeServerError {
    /// Timezone name missing from the timezone database
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
    /// CLI arguments parsed but failed validation
    #[error("Configuration validation failed: {message}")]
    InvalidConfig { message: String },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    /// I/O failure while serving
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl TimeServerError {
    pub fn code(&self) -> &'static str {
        match self {
            TimeServerError::InvalidTimezone { .. } => ERROR_INVALID_TIMEZONE,
            TimeServerError::InvalidConfig { .. } => ERROR_INVALID_CONFIG,
            TimeServerError::LoggingInitialization(_) => ERROR_LOGGING_INITIALIZATION,
            TimeServerError::Bind { .. } | TimeServerError::Server(_) => ERROR_SERVER,
        }
    }
}

impl IntoResponse for TimeServerError {
    fn into_response(self) -> Response {
        // Resolved regions always name a known zone, so anything reaching
        // here is a server-side fault rather than bad client input.
        tracing::error!(error = %self, code = self.code(), "Request failed");

        let details = match &self {
            TimeServerError::InvalidTimezone { timezone } => json!({ "timezone": timezone }),
            other => json!({ "message": other.to_string() }),
        };

        let body = Json(json!({
            "error": self.code(),
            "details": details,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type TimeServerResult<T> = Result<T, TimeServerError>;
