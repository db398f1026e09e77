//! Feed configuration.

use super::errors::FeedError;
use std::time::Duration;

/// Timing and filtering knobs for the violation feeds.
///
/// Defaults: first demo event after 10 s, then one every 30-60 s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// Delay before the first demo event.
    pub warmup: Duration,
    /// Lower bound of the gap between demo events.
    pub min_interval: Duration,
    /// Upper bound of the gap between demo events (inclusive).
    pub max_interval: Duration,
    /// Fixed RNG seed for reproducible demo runs.
    pub seed: Option<u64>,
    /// Suppress repeats of the same category on the same camera detected
    /// within this window. `None` forwards every detection.
    pub duplicate_window: Option<Duration>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            warmup: Duration::from_secs(10),
            min_interval: Duration::from_secs(30),
            max_interval: Duration::from_secs(60),
            seed: None,
            duplicate_window: None,
        }
    }
}

impl FeedConfig {
    /// Check the interval bounds.
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.min_interval > self.max_interval {
            return Err(FeedError::InvalidInterval {
                min: self.min_interval,
                max: self.max_interval,
            });
        }
        if self.max_interval.is_zero() {
            return Err(FeedError::InvalidInterval {
                min: self.min_interval,
                max: self.max_interval,
            });
        }
        Ok(())
    }
}
