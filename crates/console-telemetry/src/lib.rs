//! # Console Telemetry
//!
//! Logging and metrics for the Vigil console.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an `EnvFilter` and either a pretty or
//!   a JSON formatter
//! - **Metrics**: Prometheus counters, gauges and histograms, rendered in text
//!   exposition format
//!
//! ## Usage
//!
//! ```rust,ignore
//! use console_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_telemetry(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VC_SERVICE_NAME` | `vigil-console` | Service name in logs |
//! | `VC_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `VC_JSON_LOGS` | `false` | JSON log lines |
//! | `VC_CONSOLE_OUTPUT` | `true` | Emit logs at all |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    encode_metrics, register_metrics, BACKLOG_DEPTH, BACKLOG_WAIT, DISPLAY_DURATION,
    FEED_DISCONNECTS, NOTIFICATIONS_DISMISSED, NOTIFICATIONS_PROMOTED, VIOLATIONS_RECEIVED,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and register metrics.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)?;
    Ok(())
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}

/// Convenience macro for recording a metric with a value.
#[macro_export]
macro_rules! metric_observe {
    ($metric:expr, $value:expr) => {
        $metric.observe($value)
    };
    ($metric:expr, $labels:expr, $value:expr) => {
        $metric.with_label_values($labels).observe($value)
    };
}
