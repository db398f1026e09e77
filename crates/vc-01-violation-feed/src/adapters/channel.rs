//! Detection-pipeline adapter.
//!
//! Bridges an upstream detector (camera analytics, a message consumer, a test
//! harness) into the feed contract. The upstream side pushes [`RawDetection`]s
//! into an mpsc channel; this adapter resolves camera labels, mints identity
//! and forwards one [`ViolationEvent`] per accepted detection.
//!
//! When every sender is dropped the feed reports
//! [`FeedStatus::Disconnected`] instead of failing silently.

use crate::domain::{CameraRegistry, DuplicateSuppressor, FeedConfig};
use crate::guard::FeedGuard;
use crate::ports::{ViolationCallback, ViolationFeed};
use chrono::{DateTime, Utc};
use shared_types::{CameraId, FeedStatus, ViolationCategory, ViolationDetails, ViolationEvent};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Reason reported when the upstream channel closes.
pub const DISCONNECT_REASON: &str = "detection feed closed";

/// A detection as produced upstream, before identity is attached.
#[derive(Clone, Debug, PartialEq)]
pub struct RawDetection {
    pub category: ViolationCategory,
    pub confidence_percent: f32,
    pub camera_id: CameraId,
    pub detected_at: DateTime<Utc>,
}

/// Feed backed by an mpsc channel of raw detections.
pub struct ChannelFeed {
    receiver: mpsc::Receiver<RawDetection>,
    cameras: CameraRegistry,
    suppressor: Option<DuplicateSuppressor>,
}

impl ChannelFeed {
    pub fn new(receiver: mpsc::Receiver<RawDetection>, cameras: CameraRegistry) -> Self {
        Self {
            receiver,
            cameras,
            suppressor: None,
        }
    }

    /// Build from feed config, enabling duplicate suppression if configured.
    pub fn from_config(
        receiver: mpsc::Receiver<RawDetection>,
        cameras: CameraRegistry,
        config: &FeedConfig,
    ) -> Self {
        let feed = Self::new(receiver, cameras);
        match config.duplicate_window {
            Some(window) => feed.with_duplicate_window(window),
            None => feed,
        }
    }

    /// Drop repeats of the same category on the same camera within `window`.
    pub fn with_duplicate_window(mut self, window: std::time::Duration) -> Self {
        self.suppressor = Some(DuplicateSuppressor::new(window));
        self
    }

    fn resolve(&self, raw: RawDetection) -> (ViolationDetails, DateTime<Utc>) {
        let (camera_label, location_label) = self.cameras.labels_for(&raw.camera_id);
        let details = ViolationDetails {
            category: raw.category,
            confidence_percent: raw.confidence_percent,
            camera_id: raw.camera_id,
            camera_label,
            location_label,
        };
        (details, raw.detected_at)
    }

    async fn run(
        mut self,
        callback: ViolationCallback,
        status: Arc<watch::Sender<FeedStatus>>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        status.send_replace(FeedStatus::Live);
        info!(cameras = self.cameras.len(), "Detection feed connected");

        loop {
            let raw = tokio::select! {
                raw = self.receiver.recv() => raw,
                _ = shutdown.changed() => return,
            };

            let Some(raw) = raw else {
                warn!("Detection feed closed by upstream");
                status.send_replace(FeedStatus::Disconnected {
                    reason: DISCONNECT_REASON.to_string(),
                });
                return;
            };

            let (details, detected_at) = self.resolve(raw);
            if let Some(suppressor) = self.suppressor.as_mut() {
                if !suppressor.admit(&details, detected_at) {
                    debug!(
                        category = %details.category,
                        camera = %details.camera_id,
                        "Duplicate detection suppressed"
                    );
                    continue;
                }
            }

            callback(ViolationEvent::detected(details, detected_at));
        }
    }
}

impl ViolationFeed for ChannelFeed {
    fn name(&self) -> &'static str {
        "channel"
    }

    fn on_violation(self, callback: ViolationCallback) -> FeedGuard {
        let status = Arc::new(watch::channel(FeedStatus::Starting).0);
        let task_status = Arc::clone(&status);
        FeedGuard::spawn(self.name(), status, move |shutdown| {
            self.run(callback, task_status, shutdown)
        })
    }
}
