//! # Console Events
//!
//! Defines all event types that flow through the shared bus.

use serde::{Deserialize, Serialize};
use shared_types::{AlertId, FeedStatus, NavigationIntent, ViolationEvent};

/// All events that can be published to the event bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConsoleEvent {
    // =========================================================================
    // VC-01: VIOLATION FEED
    // =========================================================================
    /// A violation was produced by the feed.
    ViolationDetected(ViolationEvent),

    /// The feed changed health (live, disconnected, stopped).
    FeedStatusChanged(FeedStatus),

    // =========================================================================
    // VC-02: NOTIFICATION QUEUE
    // =========================================================================
    /// An alert became the active notification.
    NotificationPromoted {
        /// The promoted alert.
        alert_id: AlertId,
        /// Alerts still waiting after the promotion.
        backlog_len: usize,
    },

    /// The operator closed the active notification.
    NotificationDismissed {
        /// The dismissed alert.
        alert_id: AlertId,
    },

    /// The operator asked to see the evidence for an alert.
    /// Consumed by the console router.
    EvidenceRequested(NavigationIntent),
}

impl ConsoleEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ViolationDetected(_) | Self::FeedStatusChanged(_) => EventTopic::Feed,
            Self::NotificationPromoted { .. } | Self::NotificationDismissed { .. } => {
                EventTopic::Notifications
            }
            Self::EvidenceRequested(_) => EventTopic::Navigation,
        }
    }

    /// Short name for log lines.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ViolationDetected(_) => "violation_detected",
            Self::FeedStatusChanged(_) => "feed_status_changed",
            Self::NotificationPromoted { .. } => "notification_promoted",
            Self::NotificationDismissed { .. } => "notification_dismissed",
            Self::EvidenceRequested(_) => "evidence_requested",
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Feed events (vc-01).
    Feed,
    /// Notification lifecycle events (vc-02).
    Notifications,
    /// Navigation intents for the router.
    Navigation,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &ConsoleEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}
