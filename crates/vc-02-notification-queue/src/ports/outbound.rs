//! Outbound (Driven) ports for the notification queue.

use shared_types::{AlertId, NavigationIntent};

/// Receives navigation requests produced by `view_evidence`.
///
/// Called from inside the controller task, so implementations must return
/// quickly and must not block.
pub trait NavigationPort: Send + Sync {
    fn navigate(&self, intent: NavigationIntent);
}

/// Announces notification lifecycle transitions to the rest of the console.
pub trait LifecyclePublisher: Send + Sync {
    /// An alert became the active notification.
    fn promoted(&self, alert_id: AlertId, backlog_len: usize);

    /// The operator closed an alert.
    fn dismissed(&self, alert_id: AlertId);
}
