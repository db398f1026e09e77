//! Timer-driven demo feed.
//!
//! Stands in for the detection pipeline when the console runs without one:
//! after a warm-up delay it replays a random archetype, then keeps doing so
//! at a uniformly random interval until its guard is released.

use crate::domain::{FeedConfig, FeedError, ViolationFactory};
use crate::guard::FeedGuard;
use crate::ports::{ViolationCallback, ViolationFeed};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::FeedStatus;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

/// Self-simulating violation source.
pub struct DemoFeed {
    config: FeedConfig,
    factory: ViolationFactory,
    rng: StdRng,
}

impl DemoFeed {
    /// Build a demo feed. Fails if the interval bounds are invalid.
    pub fn new(config: FeedConfig, factory: ViolationFactory) -> Result<Self, FeedError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            factory,
            rng,
        })
    }

    /// Draw the gap before the next event, `min..=max`.
    fn next_interval(&mut self) -> Duration {
        let min = self.config.min_interval.as_millis() as u64;
        let max = self.config.max_interval.as_millis() as u64;
        Duration::from_millis(self.rng.gen_range(min..=max))
    }

    async fn run(
        mut self,
        callback: ViolationCallback,
        status: Arc<watch::Sender<FeedStatus>>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        status.send_replace(FeedStatus::Live);
        info!(
            warmup_ms = self.config.warmup.as_millis() as u64,
            "Demo violation feed armed"
        );

        let mut delay = self.config.warmup;
        loop {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown.changed() => break,
            }

            let event = self.factory.synthesize(&mut self.rng);
            debug!(
                alert_id = %event.id(),
                category = %event.category(),
                camera = %event.camera_id(),
                "Demo violation generated"
            );
            callback(event);

            delay = self.next_interval();
            debug!(next_in_ms = delay.as_millis() as u64, "Next demo violation scheduled");
        }
    }
}

impl ViolationFeed for DemoFeed {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn on_violation(self, callback: ViolationCallback) -> FeedGuard {
        let status = Arc::new(watch::channel(FeedStatus::Starting).0);
        let task_status = Arc::clone(&status);
        FeedGuard::spawn(self.name(), status, move |shutdown| {
            self.run(callback, task_status, shutdown)
        })
    }
}
