//! Telemetry configuration from environment variables.

use crate::TelemetryError;
use std::env;

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to the startup log line
    pub service_name: String,

    /// Log filter (a level or an `EnvFilter` directive string)
    pub log_level: String,

    /// Whether to enable console output (for development)
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "consensus-helpers".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HELPERS_SERVICE_NAME`: Service name (default: consensus-helpers)
    /// - `HELPERS_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `HELPERS_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `HELPERS_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("HELPERS_SERVICE_NAME")
                .unwrap_or_else(|_| "consensus-helpers".to_string()),

            log_level: env::var("HELPERS_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("HELPERS_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: env::var("HELPERS_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Builder-style method to set the log level
    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    /// Reject empty filters and bare words that are not levels.
    ///
    /// Directive strings such as `consensus_helpers=debug` are passed through
    /// to `EnvFilter` unchanged.
    pub fn validate(&self) -> Result<(), TelemetryError> {
        let level = self.log_level.trim();
        if level.is_empty() {
            return Err(TelemetryError::Config("log level is empty".to_string()));
        }
        let is_directive = level.contains('=') || level.contains(',');
        if !is_directive && !LEVELS.contains(&level.to_lowercase().as_str()) {
            return Err(TelemetryError::Config(format!(
                "unknown log level: {}",
                level
            )));
        }
        Ok(())
    }
}
