//! # End-to-End Demo Session
//!
//! Runs the console exactly as the binary does (demo feed, bus, router,
//! controller) under tokio's paused clock:
//!
//! ```text
//! t=0      session start
//! t=10s    first demo violation → displayed
//! t=40..70 second violation     → backlog
//! operator dismiss              → second displayed
//! session end                   → timers cancelled, backlog dropped
//! ```

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use console_runtime::{ConsoleConfig, ConsoleSession};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared_bus::{ConsoleEvent, EventFilter, EventPublisher, EventTopic, InMemoryEventBus};
    use vc_01_violation_feed::{
        sample_archetypes, DemoFeed, FeedConfig, SystemClock, ViolationFactory,
    };
    use vc_02_notification_queue::{NotificationApi, NotificationHandle};

    fn demo_session(seed: u64) -> (ConsoleSession, Arc<InMemoryEventBus>) {
        let config = ConsoleConfig {
            feed: FeedConfig {
                seed: Some(seed),
                ..FeedConfig::default()
            },
            ..ConsoleConfig::default()
        };
        let factory = ViolationFactory::new(sample_archetypes(), Arc::new(SystemClock)).unwrap();
        let feed = DemoFeed::new(config.feed, factory).unwrap();
        let bus = Arc::new(InMemoryEventBus::new());
        let session = ConsoleSession::start(feed, config.queue, Arc::clone(&bus));
        (session, bus)
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    async fn pending(handle: &NotificationHandle) -> usize {
        settle().await;
        handle.snapshot().pending()
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_session_lifecycle() {
        let (session, bus) = demo_session(7);
        let handle = session.handle().clone();
        settle().await;

        tokio::time::advance(Duration::from_millis(9_500)).await;
        assert_eq!(pending(&handle).await, 0);

        tokio::time::advance(Duration::from_millis(600)).await;
        assert_eq!(pending(&handle).await, 1);
        let first = handle.snapshot().active.unwrap();

        // Second event lands somewhere in the next 30-60 s
        tokio::time::advance(Duration::from_secs(29)).await;
        assert_eq!(pending(&handle).await, 1);
        tokio::time::advance(Duration::from_secs(31)).await;
        assert!(pending(&handle).await >= 2);
        assert_eq!(handle.snapshot().active.as_ref(), Some(&first));

        let closed = handle.dismiss().await.unwrap().unwrap();
        assert_eq!(closed, first);
        let second = handle.snapshot().active.unwrap();
        assert_ne!(second.id(), first.id());
        assert!(second.detected_at() >= first.detected_at());

        let held = handle.snapshot().pending();
        let summary = session.shutdown().await;
        assert_eq!(summary.discarded, held);

        // No timer survives the session
        let published = bus.events_published();
        tokio::time::advance(Duration::from_secs(600)).await;
        settle().await;
        assert_eq!(bus.events_published(), published);
        assert!(handle.is_closed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_operator_never_sees_two_at_once() {
        let (session, bus) = demo_session(99);
        let mut feed_events = bus.subscribe(EventFilter::topics(vec![EventTopic::Feed]));
        let handle = session.handle().clone();
        settle().await;
        let mut rng = StdRng::seed_from_u64(99);
        let mut dismissed = 0;

        for _ in 0..60 {
            tokio::time::advance(Duration::from_secs(rng.gen_range(5..40))).await;
            settle().await;

            let snapshot = handle.snapshot();
            assert_eq!(snapshot.is_displaying, snapshot.active.is_some());

            if rng.gen_bool(0.4) && handle.dismiss().await.unwrap().is_some() {
                dismissed += 1;
            }
        }

        let summary = session.shutdown().await;

        let mut produced = 0;
        while let Ok(Some(event)) = feed_events.try_recv() {
            if matches!(event, ConsoleEvent::ViolationDetected(_)) {
                produced += 1;
            }
        }

        // Every produced violation was either dismissed or still held at the end
        assert!(dismissed > 0);
        assert_eq!(produced, dismissed + summary.discarded);
    }
}
