//! Structured log helpers.
//!
//! Every helper log line carries a `component` field (`shuffling`,
//! `committee`, `proposer`, `subnets`, ...) so a single filter can follow
//! one concern across crates.

use crate::TelemetryConfig;

/// Announce the active logging configuration.
pub(crate) fn init_logging(config: &TelemetryConfig) {
    tracing::info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
}

/// Emit an event tagged with a helper component.
///
/// ```rust,ignore
/// helpers_telemetry::log_event!(debug, "shuffling", "Shuffled list", list_size = 1024);
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}
