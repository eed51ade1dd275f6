//! # Helpers Telemetry
//!
//! Structured logging for processes embedding the consensus helpers.
//!
//! The helpers themselves only emit `tracing` events; this crate installs
//! the subscriber that formats them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use helpers_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     // Shuffles, cache misses and proposer draws are now logged.
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HELPERS_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `HELPERS_JSON_LOGS` | `false` | Emit JSON lines |
//! | `HELPERS_CONSOLE_OUTPUT` | `true` | Write to stdout |
//! | `HELPERS_SERVICE_NAME` | `consensus-helpers` | Service name in log lines |

#![warn(missing_docs)]

mod config;
mod logging;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Subscriber could not be installed (usually one already is).
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    /// Configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for the process.
///
/// Safe to call from several tests: a second call reports
/// [`TelemetryError::TracerInit`] instead of panicking.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    config.validate()?;
    init_tracing(config)?;
    logging::init_logging(config);
    Ok(())
}
