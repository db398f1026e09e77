//! Prometheus metrics for the console subsystems.
//!
//! All metrics follow the naming convention: `vc_<subsystem>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., notifications_promoted_total)
//! - **Gauge**: Value that can go up or down (e.g., backlog depth)
//! - **Histogram**: Distribution of values (e.g., time spent waiting in the backlog)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Gauge, Histogram, HistogramOpts, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Metrics registry for the console
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // FEED METRICS (vc-01)
    // =========================================================================

    /// Violations handed to the notification queue, by category
    pub static ref VIOLATIONS_RECEIVED: CounterVec = CounterVec::new(
        Opts::new("vc_feed_violations_received_total", "Violations received from the feed"),
        &["category"]
    ).expect("metric creation failed");

    /// Times the upstream detection feed dropped
    pub static ref FEED_DISCONNECTS: Counter = Counter::new(
        "vc_feed_disconnects_total",
        "Number of detection feed disconnections"
    ).expect("metric creation failed");

    // =========================================================================
    // NOTIFICATION METRICS (vc-02)
    // =========================================================================

    /// Alerts promoted into the active slot
    pub static ref NOTIFICATIONS_PROMOTED: Counter = Counter::new(
        "vc_notifications_promoted_total",
        "Total notifications shown to the operator"
    ).expect("metric creation failed");

    /// Active notifications closed by the operator
    pub static ref NOTIFICATIONS_DISMISSED: CounterVec = CounterVec::new(
        Opts::new("vc_notifications_dismissed_total", "Notifications closed by the operator"),
        &["action"]  // action: dismiss/view_evidence
    ).expect("metric creation failed");

    /// Alerts waiting behind the active notification
    pub static ref BACKLOG_DEPTH: Gauge = Gauge::new(
        "vc_notifications_backlog_depth",
        "Number of notifications waiting to be shown"
    ).expect("metric creation failed");

    /// Time from enqueue to promotion
    pub static ref BACKLOG_WAIT: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "vc_notifications_backlog_wait_seconds",
            "Time an alert waited before being shown"
        ).buckets(exponential_buckets(0.001, 4.0, 10).expect("valid buckets"))
    ).expect("metric creation failed");

    /// Time a notification stayed on screen
    pub static ref DISPLAY_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "vc_notifications_display_duration_seconds",
            "Time a notification was displayed before the operator closed it"
        ).buckets(exponential_buckets(0.25, 2.0, 12).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Register all metrics with the console registry.
///
/// Safe to call more than once; already-registered collectors are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Feed
        Box::new(VIOLATIONS_RECEIVED.clone()),
        Box::new(FEED_DISCONNECTS.clone()),
        // Notifications
        Box::new(NOTIFICATIONS_PROMOTED.clone()),
        Box::new(NOTIFICATIONS_DISMISSED.clone()),
        Box::new(BACKLOG_DEPTH.clone()),
        Box::new(BACKLOG_WAIT.clone()),
        Box::new(DISPLAY_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
