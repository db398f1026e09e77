//! Event bus adapters for the notification queue.
//!
//! Publish navigation intents and lifecycle transitions as `ConsoleEvent`s on
//! the shared bus, where the console router and any observers pick them up.

use crate::ports::{LifecyclePublisher, NavigationPort};
use shared_bus::{ConsoleEvent, EventPublisher};
use shared_types::{AlertId, NavigationIntent};
use std::sync::Arc;
use tracing::{debug, info};

/// Sends `view_evidence` intents to the router over the bus.
#[derive(Clone)]
pub struct BusNavigator {
    bus: Arc<dyn EventPublisher>,
}

impl BusNavigator {
    pub fn new(bus: Arc<dyn EventPublisher>) -> Self {
        Self { bus }
    }
}

impl NavigationPort for BusNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        let receivers = self.bus.publish(ConsoleEvent::EvidenceRequested(intent));
        info!(route = %intent.route(), receivers, "Evidence view requested");
    }
}

/// Mirrors promotions and dismissals onto the bus.
#[derive(Clone)]
pub struct BusLifecyclePublisher {
    bus: Arc<dyn EventPublisher>,
}

impl BusLifecyclePublisher {
    pub fn new(bus: Arc<dyn EventPublisher>) -> Self {
        Self { bus }
    }
}

impl LifecyclePublisher for BusLifecyclePublisher {
    fn promoted(&self, alert_id: AlertId, backlog_len: usize) {
        let receivers = self.bus.publish(ConsoleEvent::NotificationPromoted {
            alert_id,
            backlog_len,
        });
        debug!(%alert_id, receivers, "Published promotion");
    }

    fn dismissed(&self, alert_id: AlertId) {
        let receivers = self
            .bus
            .publish(ConsoleEvent::NotificationDismissed { alert_id });
        debug!(%alert_id, receivers, "Published dismissal");
    }
}
