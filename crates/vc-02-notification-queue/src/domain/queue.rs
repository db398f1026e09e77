//! # Notification Queue
//!
//! FIFO backlog plus a single active slot.
//!
//! ## State Machine
//!
//! ```text
//!            enqueue (promotes)
//!   [IDLE] ─────────────────────→ [DISPLAYING]
//!     ↑                              │  │
//!     │   dismiss, backlog empty     │  │ enqueue (appends only)
//!     └──────────────────────────────┘  │
//!                                       │ dismiss, backlog non-empty
//!                                       └──→ [DISPLAYING] (next head)
//! ```
//!
//! Every mutating operation ends with [`NotificationQueue::promote_if_idle`].
//! Callers never have to remember to reconcile.

use super::value_objects::{Dismissal, NotificationSnapshot, Promotion};
use shared_types::{NavigationIntent, ViolationEvent};
use std::collections::VecDeque;
use tokio::time::Instant;
use tracing::debug;

/// An event waiting in the backlog.
#[derive(Debug, Clone)]
struct Queued {
    event: ViolationEvent,
    queued_at: Instant,
}

/// The event currently shown to the operator.
#[derive(Debug, Clone)]
struct Displayed {
    event: ViolationEvent,
    shown_at: Instant,
}

/// Ordered backlog of pending violations and the one being displayed.
///
/// INVARIANTS:
/// - at most one active event
/// - the active event is never also in the backlog
/// - events leave only through `dismiss`/`view_evidence` (or `clear`)
/// - promotion order equals arrival order
#[derive(Debug, Default)]
pub struct NotificationQueue {
    backlog: VecDeque<Queued>,
    active: Option<Displayed>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the tail, then reconcile.
    ///
    /// Never rejects. Returns the promotion if the queue was idle.
    pub fn enqueue(&mut self, event: ViolationEvent) -> Option<Promotion> {
        debug!(alert_id = %event.id(), backlog = self.backlog.len(), "Enqueue");
        self.backlog.push_back(Queued {
            event,
            queued_at: Instant::now(),
        });
        self.promote_if_idle()
    }

    /// Move the backlog head into the active slot if nothing is displayed.
    ///
    /// No-op while displaying or when the backlog is empty, so calling it
    /// repeatedly is harmless.
    pub fn promote_if_idle(&mut self) -> Option<Promotion> {
        if self.active.is_some() {
            return None;
        }
        let next = self.backlog.pop_front()?;

        let now = Instant::now();
        let promotion = Promotion {
            alert_id: next.event.id(),
            waited: now.saturating_duration_since(next.queued_at),
            backlog_len: self.backlog.len(),
        };
        self.active = Some(Displayed {
            event: next.event,
            shown_at: now,
        });
        Some(promotion)
    }

    /// Close the active notification, then reconcile.
    ///
    /// No-op when idle. The backlog is only touched by the follow-up
    /// promotion. The dismissed event is handed back to the caller.
    pub fn dismiss(&mut self) -> Option<Dismissal> {
        let closed = self.active.take()?;
        let displayed_for = Instant::now().saturating_duration_since(closed.shown_at);
        debug!(alert_id = %closed.event.id(), "Dismiss");

        Some(Dismissal {
            event: closed.event,
            displayed_for,
            next: self.promote_if_idle(),
        })
    }

    /// Dismiss and produce a navigation intent for the dismissed alert.
    pub fn view_evidence(&mut self) -> Option<(Dismissal, NavigationIntent)> {
        let dismissal = self.dismiss()?;
        let intent = NavigationIntent::ViewEvidence {
            alert_id: dismissal.event.id(),
        };
        Some((dismissal, intent))
    }

    /// The event being displayed, if any.
    pub fn active(&self) -> Option<&ViolationEvent> {
        self.active.as_ref().map(|d| &d.event)
    }

    /// True iff an event is being displayed.
    pub fn is_displaying(&self) -> bool {
        self.active.is_some()
    }

    /// Waiting events in arrival order.
    pub fn backlog(&self) -> impl Iterator<Item = &ViolationEvent> + '_ {
        self.backlog.iter().map(|q| &q.event)
    }

    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    /// Drop everything (session end). Returns how many events were discarded.
    pub fn clear(&mut self) -> usize {
        let discarded = self.backlog.len() + usize::from(self.active.is_some());
        self.backlog.clear();
        self.active = None;
        discarded
    }

    /// Point-in-time view for renderers.
    pub fn snapshot(&self) -> NotificationSnapshot {
        NotificationSnapshot {
            active: self.active().cloned(),
            is_displaying: self.is_displaying(),
            backlog_len: self.backlog.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared_types::{AlertId, CameraId, ViolationCategory, ViolationDetails};

    fn event(n: u32) -> ViolationEvent {
        ViolationEvent::detected(
            ViolationDetails {
                category: ViolationCategory::Cigarette,
                confidence_percent: 90.0,
                camera_id: CameraId::new(format!("CAM-{n:03}")),
                camera_label: format!("Camera {n}"),
                location_label: "Building A".into(),
            },
            Utc::now(),
        )
    }

    fn ids(queue: &NotificationQueue) -> Vec<AlertId> {
        queue.backlog().map(|e| e.id()).collect()
    }

    fn assert_invariants(queue: &NotificationQueue) {
        assert_eq!(queue.is_displaying(), queue.active().is_some());
        if let Some(active) = queue.active() {
            assert!(queue.backlog().all(|e| e.id() != active.id()));
        }
    }

    // =========================================================================
    // Basic transitions
    // =========================================================================

    #[test]
    fn test_enqueue_on_idle_promotes() {
        let mut queue = NotificationQueue::new();
        let e1 = event(1);

        let promotion = queue.enqueue(e1.clone()).unwrap();
        assert_eq!(promotion.alert_id, e1.id());
        assert_eq!(promotion.backlog_len, 0);
        assert_eq!(queue.active(), Some(&e1));
        assert_eq!(queue.backlog_len(), 0);
    }

    #[test]
    fn test_enqueue_while_displaying_appends() {
        let mut queue = NotificationQueue::new();
        let e1 = event(1);
        let e2 = event(2);

        queue.enqueue(e1.clone());
        assert!(queue.enqueue(e2.clone()).is_none());
        assert_eq!(queue.active(), Some(&e1));
        assert_eq!(ids(&queue), vec![e2.id()]);
    }

    #[test]
    fn test_dismiss_when_idle_is_noop() {
        let mut queue = NotificationQueue::new();
        assert!(queue.dismiss().is_none());
        assert!(queue.view_evidence().is_none());
        assert!(!queue.is_displaying());
        assert_eq!(queue.backlog_len(), 0);
    }

    #[test]
    fn test_promote_is_idempotent() {
        let mut queue = NotificationQueue::new();
        let e1 = event(1);
        let e2 = event(2);
        queue.enqueue(e1.clone());
        queue.enqueue(e2.clone());

        for _ in 0..3 {
            assert!(queue.promote_if_idle().is_none());
        }
        assert_eq!(queue.active(), Some(&e1));
        assert_eq!(ids(&queue), vec![e2.id()]);
    }

    #[test]
    fn test_promote_on_empty_idle_is_noop() {
        let mut queue = NotificationQueue::new();
        assert!(queue.promote_if_idle().is_none());
        assert!(queue.active().is_none());
    }

    #[test]
    fn test_double_dismiss_only_removes_one() {
        let mut queue = NotificationQueue::new();
        let e1 = event(1);
        let e2 = event(2);
        queue.enqueue(e1.clone());

        let first = queue.dismiss().unwrap();
        assert_eq!(first.event, e1);
        assert!(first.next.is_none());
        assert!(queue.dismiss().is_none());

        queue.enqueue(e2.clone());
        assert_eq!(queue.active(), Some(&e2));
    }

    // =========================================================================
    // Concrete scenarios
    // =========================================================================

    #[test]
    fn test_burst_of_three_shown_in_order() {
        let mut queue = NotificationQueue::new();
        let (e1, e2, e3) = (event(1), event(2), event(3));

        queue.enqueue(e1.clone());
        queue.enqueue(e2.clone());
        queue.enqueue(e3.clone());
        assert_eq!(queue.active(), Some(&e1));
        assert_eq!(ids(&queue), vec![e2.id(), e3.id()]);

        let d = queue.dismiss().unwrap();
        assert_eq!(d.event, e1);
        assert_eq!(d.next.map(|p| p.alert_id), Some(e2.id()));
        assert_eq!(queue.active(), Some(&e2));
        assert_eq!(ids(&queue), vec![e3.id()]);

        queue.dismiss();
        assert_eq!(queue.active(), Some(&e3));
        assert_eq!(queue.backlog_len(), 0);

        queue.dismiss();
        assert!(!queue.is_displaying());
        assert_eq!(queue.backlog_len(), 0);
    }

    #[test]
    fn test_view_evidence_navigates_and_advances() {
        let mut queue = NotificationQueue::new();
        let (e1, e2) = (event(1), event(2));
        queue.enqueue(e1.clone());
        queue.enqueue(e2.clone());

        let (dismissal, intent) = queue.view_evidence().unwrap();
        assert_eq!(dismissal.event, e1);
        assert_eq!(intent, NavigationIntent::ViewEvidence { alert_id: e1.id() });
        assert_eq!(queue.active(), Some(&e2));
        assert_eq!(queue.backlog_len(), 0);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut queue = NotificationQueue::new();
        for n in 0..4 {
            queue.enqueue(event(n));
        }
        assert_eq!(queue.clear(), 4);
        assert!(!queue.is_displaying());
        assert_eq!(queue.backlog_len(), 0);
        assert_eq!(queue.clear(), 0);
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut queue = NotificationQueue::new();
        assert_eq!(queue.snapshot(), NotificationSnapshot::default());

        let e1 = event(1);
        queue.enqueue(e1.clone());
        queue.enqueue(event(2));

        let snapshot = queue.snapshot();
        assert!(snapshot.is_displaying);
        assert_eq!(snapshot.active, Some(e1));
        assert_eq!(snapshot.backlog_len, 1);
    }

    // =========================================================================
    // Randomized interleavings
    // =========================================================================

    #[test]
    fn test_random_interleavings_preserve_order_and_count() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut queue = NotificationQueue::new();
            let mut enqueued = Vec::new();
            let mut promoted = Vec::new();
            let mut dismissed = Vec::new();

            for step in 0..200u32 {
                let outcome = match rng.gen_range(0..4) {
                    0 | 1 => {
                        let e = event(step);
                        enqueued.push(e.id());
                        queue.enqueue(e)
                    }
                    2 => queue.dismiss().and_then(|d| {
                        dismissed.push(d.event.id());
                        d.next
                    }),
                    _ => queue.view_evidence().and_then(|(d, intent)| {
                        assert_eq!(intent.alert_id(), d.event.id());
                        dismissed.push(d.event.id());
                        d.next
                    }),
                };
                if let Some(p) = outcome {
                    promoted.push(p.alert_id);
                }
                assert_invariants(&queue);

                // Conservation: nothing lost, nothing duplicated
                let held = queue.backlog_len() + usize::from(queue.is_displaying());
                assert_eq!(enqueued.len(), dismissed.len() + held);
            }

            // Promotions happen strictly in arrival order
            assert_eq!(promoted[..], enqueued[..promoted.len()]);
            assert_eq!(dismissed[..], promoted[..dismissed.len()]);
        }
    }
}
