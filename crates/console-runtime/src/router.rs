//! Evidence router.
//!
//! Stands in for the console's page router: consumes navigation intents from
//! the bus and resolves them to routes.

use shared_bus::{ConsoleEvent, EventFilter, EventTopic, InMemoryEventBus, Subscription};
use shared_types::NavigationIntent;
use tokio::sync::watch;
use tracing::info;

/// Consumer of `ConsoleEvent::EvidenceRequested`.
pub struct EvidenceRouter {
    subscription: Subscription,
}

impl EvidenceRouter {
    /// Subscribe to navigation events on `bus`.
    pub fn new(bus: &InMemoryEventBus) -> Self {
        Self {
            subscription: bus.subscribe(EventFilter::topics(vec![EventTopic::Navigation])),
        }
    }

    /// Next navigation intent, or `None` once the bus is gone.
    pub async fn next_intent(&mut self) -> Option<NavigationIntent> {
        loop {
            match self.subscription.recv().await? {
                ConsoleEvent::EvidenceRequested(intent) => return Some(intent),
                _ => continue,
            }
        }
    }

    /// Log every route until shutdown is signalled or the bus closes.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        loop {
            tokio::select! {
                intent = self.next_intent() => match intent {
                    Some(intent) => info!(
                        alert_id = %intent.alert_id(),
                        route = %intent.route(),
                        "Opening evidence viewer"
                    ),
                    None => break,
                },
                _ = shutdown.changed() => {
                    info!("[router] Shutdown signal received");
                    break;
                }
            }
        }
    }
}
