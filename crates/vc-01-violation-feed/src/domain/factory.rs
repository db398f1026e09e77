//! Turning detections into alerts.

use super::errors::FeedError;
use crate::ports::Clock;
use chrono::{DateTime, Utc};
use rand::Rng;
use shared_types::{CameraId, ViolationCategory, ViolationDetails, ViolationEvent};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Mints `ViolationEvent`s from archetypes.
///
/// Every event gets a fresh id and the clock's current time, never the
/// archetype's own sample timestamp.
pub struct ViolationFactory {
    archetypes: Vec<ViolationDetails>,
    clock: Arc<dyn Clock>,
}

impl ViolationFactory {
    /// Create a factory over a non-empty archetype catalog.
    pub fn new(
        archetypes: Vec<ViolationDetails>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, FeedError> {
        if archetypes.is_empty() {
            return Err(FeedError::EmptyCatalog);
        }
        Ok(Self { archetypes, clock })
    }

    /// Produce one event from a uniformly chosen archetype.
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> ViolationEvent {
        let index = rng.gen_range(0..self.archetypes.len());
        self.stamp(self.archetypes[index].clone())
    }

    /// Attach identity and detection time to a detection.
    pub fn stamp(&self, details: ViolationDetails) -> ViolationEvent {
        ViolationEvent::detected(details, self.clock.now())
    }

    pub fn archetypes(&self) -> &[ViolationDetails] {
        &self.archetypes
    }
}

/// Drops repeat detections of the same category on the same camera.
///
/// Deduplication is the feed's job; the notification queue accepts whatever
/// it is handed.
#[derive(Debug)]
pub struct DuplicateSuppressor {
    window: chrono::Duration,
    last_seen: HashMap<(ViolationCategory, CameraId), DateTime<Utc>>,
}

impl DuplicateSuppressor {
    pub fn new(window: Duration) -> Self {
        Self {
            window: chrono::Duration::from_std(window)
                .unwrap_or_else(|_| chrono::Duration::days(36_500)),
            last_seen: HashMap::new(),
        }
    }

    /// Returns `true` if the detection should be forwarded.
    pub fn admit(&mut self, details: &ViolationDetails, detected_at: DateTime<Utc>) -> bool {
        let key = (details.category, details.camera_id.clone());

        if let Some(previous) = self.last_seen.get(&key) {
            if detected_at.signed_duration_since(*previous) < self.window {
                return false;
            }
        }

        self.last_seen.insert(key, detected_at);
        true
    }
}
