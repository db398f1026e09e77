//! # Integration Test Flows
//!
//! Drives the notification controller through a real `ChannelFeed` and
//! observes it from the shared bus, the way the console does.
//!
//! ## Flows Tested
//!
//! 1. **Feed → Controller**: bursts are shown one at a time in arrival order
//! 2. **Controller → Router**: `view_evidence` emits exactly one intent
//! 3. **Controller → Bus**: lifecycle events mirror queue transitions
//! 4. **Feed failure**: disconnect is reported, queued alerts survive

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    use chrono::Utc;
    use console_runtime::{ConsoleSession, EvidenceRouter};
    use shared_bus::{ConsoleEvent, EventFilter, EventTopic, InMemoryEventBus};
    use shared_types::{AlertId, CameraId, FeedStatus, ViolationCategory, ViolationEvent};
    use vc_01_violation_feed::{CameraRegistry, ChannelFeed, RawDetection};
    use vc_02_notification_queue::{NotificationApi, QueueConfig};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const WAIT: Duration = Duration::from_secs(5);

    fn detection(camera: &str, category: ViolationCategory) -> RawDetection {
        RawDetection {
            category,
            confidence_percent: 90.0,
            camera_id: CameraId::new(camera),
            detected_at: Utc::now(),
        }
    }

    struct Harness {
        detections: mpsc::Sender<RawDetection>,
        session: ConsoleSession,
        bus: Arc<InMemoryEventBus>,
    }

    fn start() -> Harness {
        let (detections, rx) = mpsc::channel(64);
        let bus = Arc::new(InMemoryEventBus::new());
        let session = ConsoleSession::start(
            ChannelFeed::new(rx, CameraRegistry::sample()),
            QueueConfig::default(),
            Arc::clone(&bus),
        );
        Harness {
            detections,
            session,
            bus,
        }
    }

    async fn send(harness: &Harness, camera: &str) {
        harness
            .detections
            .send(detection(camera, ViolationCategory::Cigarette))
            .await
            .unwrap();
    }

    async fn wait_pending(harness: &Harness, pending: usize) {
        let mut rx = harness.session.handle().subscribe();
        timeout(WAIT, rx.wait_for(|s| s.pending() == pending))
            .await
            .expect("controller did not reach expected depth")
            .unwrap();
    }

    async fn dismiss_all(harness: &Harness) -> Vec<ViolationEvent> {
        let mut closed = Vec::new();
        while let Some(event) = harness.session.handle().dismiss().await.unwrap() {
            closed.push(event);
        }
        closed
    }

    // =============================================================================
    // FEED → CONTROLLER
    // =============================================================================

    #[tokio::test]
    async fn test_burst_presented_in_arrival_order() {
        let harness = start();
        for camera in ["CAM-001", "CAM-002", "CAM-003"] {
            send(&harness, camera).await;
        }
        wait_pending(&harness, 3).await;

        let snapshot = harness.session.handle().snapshot();
        assert!(snapshot.is_displaying);
        assert_eq!(snapshot.backlog_len, 2);

        let cameras: Vec<_> = dismiss_all(&harness)
            .await
            .iter()
            .map(|e| e.camera_id().as_str().to_string())
            .collect();
        assert_eq!(cameras, vec!["CAM-001", "CAM-002", "CAM-003"]);
        assert!(!harness.session.handle().snapshot().is_displaying);

        harness.session.shutdown().await;
    }

    #[tokio::test]
    async fn test_every_detection_gets_unique_id() {
        let harness = start();
        for _ in 0..10 {
            send(&harness, "CAM-005").await;
        }
        wait_pending(&harness, 10).await;

        let mut ids: Vec<AlertId> = dismiss_all(&harness).await.iter().map(|e| e.id()).collect();
        assert_eq!(ids.len(), 10);
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), 10);

        harness.session.shutdown().await;
    }

    // =============================================================================
    // CONTROLLER → ROUTER
    // =============================================================================

    #[tokio::test]
    async fn test_view_evidence_routes_once_and_advances() {
        let harness = start();
        let mut router = EvidenceRouter::new(&harness.bus);

        send(&harness, "CAM-007").await;
        send(&harness, "CAM-008").await;
        wait_pending(&harness, 2).await;

        let handle = harness.session.handle();
        let viewed = handle.view_evidence().await.unwrap().unwrap();

        let intent = timeout(WAIT, router.next_intent()).await.unwrap().unwrap();
        assert_eq!(intent.alert_id(), viewed.id());

        let snapshot = handle.snapshot();
        assert_eq!(
            snapshot.active.as_ref().map(|e| e.camera_id().as_str()),
            Some("CAM-008")
        );

        // Nothing displayed: no intent
        handle.dismiss().await.unwrap();
        assert!(handle.view_evidence().await.unwrap().is_none());
        assert!(timeout(Duration::from_millis(100), router.next_intent())
            .await
            .is_err());

        harness.session.shutdown().await;
    }

    // =============================================================================
    // CONTROLLER → BUS
    // =============================================================================

    #[tokio::test]
    async fn test_lifecycle_mirrored_on_bus() {
        let harness = start();
        let mut observer = harness
            .bus
            .subscribe(EventFilter::topics(vec![EventTopic::Notifications]));

        send(&harness, "CAM-001").await;
        send(&harness, "CAM-002").await;
        wait_pending(&harness, 2).await;
        let first = harness.session.handle().dismiss().await.unwrap().unwrap();

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(timeout(WAIT, observer.recv()).await.unwrap().unwrap());
        }

        assert!(matches!(
            seen[0],
            ConsoleEvent::NotificationPromoted { alert_id, backlog_len: 0 } if alert_id == first.id()
        ));
        assert!(matches!(
            seen[1],
            ConsoleEvent::NotificationDismissed { alert_id } if alert_id == first.id()
        ));
        assert!(matches!(
            seen[2],
            ConsoleEvent::NotificationPromoted { backlog_len: 0, .. }
        ));

        harness.session.shutdown().await;
    }

    // =============================================================================
    // FEED FAILURE
    // =============================================================================

    #[tokio::test]
    async fn test_disconnect_keeps_queued_alerts() {
        let harness = start();
        let mut feed_events = harness
            .bus
            .subscribe(EventFilter::topics(vec![EventTopic::Feed]));

        send(&harness, "CAM-009").await;
        send(&harness, "CAM-010").await;
        wait_pending(&harness, 2).await;

        let Harness {
            detections,
            session,
            ..
        } = harness;
        drop(detections);

        let disconnected = timeout(WAIT, async {
            loop {
                if let Some(ConsoleEvent::FeedStatusChanged(FeedStatus::Disconnected { reason })) =
                    feed_events.recv().await
                {
                    return reason;
                }
            }
        })
        .await
        .unwrap();
        assert_eq!(disconnected, vc_01_violation_feed::DISCONNECT_REASON);

        // No synthetic violation was produced for the disconnect
        assert_eq!(session.handle().snapshot().pending(), 2);
        assert!(session.handle().dismiss().await.unwrap().is_some());
        assert!(session.handle().dismiss().await.unwrap().is_some());
        assert!(session.handle().dismiss().await.unwrap().is_none());

        let summary = session.shutdown().await;
        assert_eq!(summary.discarded, 0);
    }

    #[tokio::test]
    async fn test_duplicate_window_applies_before_queue() {
        let (tx, rx) = mpsc::channel(8);
        let bus = Arc::new(InMemoryEventBus::new());
        let session = ConsoleSession::start(
            ChannelFeed::new(rx, CameraRegistry::sample())
                .with_duplicate_window(Duration::from_secs(30)),
            QueueConfig::default(),
            bus,
        );

        for _ in 0..3 {
            tx.send(detection("CAM-002", ViolationCategory::Vape))
                .await
                .unwrap();
        }
        tx.send(detection("CAM-002", ViolationCategory::Beverage))
            .await
            .unwrap();
        drop(tx);

        let mut status = session.handle().subscribe();
        timeout(WAIT, status.wait_for(|s| s.pending() == 2))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(session.shutdown().await.discarded, 2);
    }
}
