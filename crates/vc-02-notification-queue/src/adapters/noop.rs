//! No-op adapters for running the queue without a bus.

use crate::ports::{LifecyclePublisher, NavigationPort};
use shared_types::{AlertId, NavigationIntent};

/// Discards navigation intents.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNavigator;

impl NavigationPort for NoOpNavigator {
    fn navigate(&self, _intent: NavigationIntent) {}
}

/// Discards lifecycle notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLifecyclePublisher;

impl LifecyclePublisher for NoOpLifecyclePublisher {
    fn promoted(&self, _alert_id: AlertId, _backlog_len: usize) {}

    fn dismissed(&self, _alert_id: AlertId) {}
}
