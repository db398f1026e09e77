//! # Console Session
//!
//! Wires one violation feed into one notification controller for the
//! lifetime of an operator session.
//!
//! ```text
//!  ViolationFeed ──callback──→ NotificationHandle::enqueue ──→ controller task
//!       │                                                           │
//!       └─ FeedStatus ──relay──→ Event Bus ←── promotions, dismissals,
//!                                    │         evidence requests
//!                                    ↓
//!                              EvidenceRouter
//! ```
//!
//! ## Shutdown Sequence
//!
//! 1. Release the feed guard (cancels every pending timer)
//! 2. Drain the feed status relay
//! 3. Stop the controller; the backlog is discarded, not flushed

use console_telemetry::{log_alert_event, metric_inc, FEED_DISCONNECTS, VIOLATIONS_RECEIVED};
use shared_bus::{ConsoleEvent, EventPublisher, InMemoryEventBus};
use shared_types::FeedStatus;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use vc_01_violation_feed::{FeedGuard, ViolationCallback, ViolationFeed};
use vc_02_notification_queue::{
    BusLifecyclePublisher, BusNavigator, NotificationApi, NotificationHandle, NotificationService,
    QueueConfig,
};

/// What was left over when a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Notifications (active plus waiting) dropped at shutdown.
    pub discarded: usize,
    /// Events published on the bus during the session.
    pub events_published: u64,
}

/// A running feed plus notification controller.
pub struct ConsoleSession {
    feed: FeedGuard,
    handle: NotificationHandle,
    controller: JoinHandle<()>,
    status_relay: JoinHandle<()>,
    bus: Arc<InMemoryEventBus>,
}

impl ConsoleSession {
    /// Start the controller, register it as the feed's consumer and begin
    /// relaying feed health to the bus.
    pub fn start<F: ViolationFeed>(feed: F, queue: QueueConfig, bus: Arc<InMemoryEventBus>) -> Self {
        let publisher: Arc<dyn EventPublisher> = bus.clone();

        let service = NotificationService::new(
            queue,
            Arc::new(BusNavigator::new(Arc::clone(&publisher))),
            Arc::new(BusLifecyclePublisher::new(Arc::clone(&publisher))),
        );
        let (handle, controller) = service.spawn();

        let feed_name = feed.name();
        let feed = feed.on_violation(enqueue_into(handle.clone(), Arc::clone(&publisher)));
        let status_relay = tokio::spawn(relay_feed_status(feed.subscribe_status(), publisher));

        info!(feed = feed_name, "Console session started");

        Self {
            feed,
            handle,
            controller,
            status_relay,
            bus,
        }
    }

    /// Client for operator commands and rendering.
    pub fn handle(&self) -> &NotificationHandle {
        &self.handle
    }

    pub fn bus(&self) -> &Arc<InMemoryEventBus> {
        &self.bus
    }

    /// Current feed health.
    pub fn feed_status(&self) -> FeedStatus {
        self.feed.status()
    }

    /// End the session.
    pub async fn shutdown(self) -> SessionSummary {
        info!("Ending console session...");

        self.feed.shutdown().await;
        if let Err(e) = self.status_relay.await {
            error!("Feed status relay failed: {}", e);
        }

        let discarded = match self.handle.shutdown().await {
            Ok(discarded) => discarded,
            Err(e) => {
                warn!("Notification controller already stopped: {}", e);
                0
            }
        };
        if let Err(e) = self.controller.await {
            error!("Notification controller failed: {}", e);
        }

        let summary = SessionSummary {
            discarded,
            events_published: self.bus.events_published(),
        };
        info!(
            discarded = summary.discarded,
            events_published = summary.events_published,
            "Console session ended"
        );
        summary
    }
}

/// Feed consumer: count, mirror onto the bus, hand to the controller.
fn enqueue_into(handle: NotificationHandle, bus: Arc<dyn EventPublisher>) -> ViolationCallback {
    Box::new(move |event| {
        log_alert_event!(
            info,
            "Violation received",
            event.id(),
            category = %event.category(),
            camera = %event.camera_id()
        );
        metric_inc!(VIOLATIONS_RECEIVED, &[event.category().as_str()]);
        bus.publish(ConsoleEvent::ViolationDetected(event.clone()));

        if let Err(e) = handle.enqueue(event) {
            warn!("Violation dropped: {}", e);
        }
    })
}

/// Publish every feed status change until the feed is released.
async fn relay_feed_status(mut status: watch::Receiver<FeedStatus>, bus: Arc<dyn EventPublisher>) {
    loop {
        let current = status.borrow_and_update().clone();
        match &current {
            FeedStatus::Disconnected { reason } => {
                warn!(reason = %reason, "Violation feed disconnected");
                metric_inc!(FEED_DISCONNECTS);
            }
            other => info!(status = ?other, "Violation feed status"),
        }
        bus.publish(ConsoleEvent::FeedStatusChanged(current));

        if status.changed().await.is_err() {
            break;
        }
    }
}
