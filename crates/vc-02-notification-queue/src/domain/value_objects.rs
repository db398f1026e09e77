//! Value objects returned by queue transitions.

use shared_types::{AlertId, ViolationEvent};
use std::time::Duration;

/// Outcome of a successful promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promotion {
    /// The alert that became active.
    pub alert_id: AlertId,
    /// Time spent in the backlog before being shown.
    pub waited: Duration,
    /// Backlog length after the promotion.
    pub backlog_len: usize,
}

/// Outcome of a dismissal.
#[derive(Debug, Clone, PartialEq)]
pub struct Dismissal {
    /// The closed alert. Ownership moves to the caller.
    pub event: ViolationEvent,
    /// How long the alert was on screen.
    pub displayed_for: Duration,
    /// The follow-up promotion, if the backlog was non-empty.
    pub next: Option<Promotion>,
}

/// What the renderer needs to draw the notification area.
///
/// INVARIANT: `is_displaying == active.is_some()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationSnapshot {
    pub active: Option<ViolationEvent>,
    pub is_displaying: bool,
    pub backlog_len: usize,
}

impl NotificationSnapshot {
    /// Total events held (active plus waiting).
    pub fn pending(&self) -> usize {
        self.backlog_len + usize::from(self.is_displaying)
    }
}
