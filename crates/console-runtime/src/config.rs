//! # Console Configuration
//!
//! Unified configuration for the feed, the notification queue and the
//! operator terminal.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VC_FEED_WARMUP_SECS` | `10` | Delay before the first demo violation |
//! | `VC_FEED_MIN_INTERVAL_SECS` | `30` | Lower bound between demo violations |
//! | `VC_FEED_MAX_INTERVAL_SECS` | `60` | Upper bound between demo violations |
//! | `VC_FEED_SEED` | unset | Fixed RNG seed for the demo feed |
//! | `VC_FEED_DUPLICATE_WINDOW_SECS` | unset | Suppress repeat detections per camera |
//! | `VC_BACKLOG_HIGH_WATER` | `50` | Backlog length that triggers a warning |
//! | `VC_METRICS_ON_EXIT` | `false` | Print Prometheus metrics at shutdown |

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use vc_01_violation_feed::{FeedConfig, FeedError};
use vc_02_notification_queue::QueueConfig;

/// Complete console configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Violation feed timing and filtering.
    pub feed: FeedConfig,
    /// Notification queue tunables.
    pub queue: QueueConfig,
    /// Operator terminal behaviour.
    pub operator: OperatorConfig,
}

/// Operator terminal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorConfig {
    /// Dump metrics in Prometheus text format when the console exits.
    pub metrics_on_exit: bool,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    /// The resulting feed configuration is inconsistent.
    #[error(transparent)]
    Feed(#[from] FeedError),
}

impl ConsoleConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secs) = parse::<u64, _>(&lookup, "VC_FEED_WARMUP_SECS")? {
            config.feed.warmup = Duration::from_secs(secs);
        }
        if let Some(secs) = parse::<u64, _>(&lookup, "VC_FEED_MIN_INTERVAL_SECS")? {
            config.feed.min_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = parse::<u64, _>(&lookup, "VC_FEED_MAX_INTERVAL_SECS")? {
            config.feed.max_interval = Duration::from_secs(secs);
        }
        if let Some(seed) = parse::<u64, _>(&lookup, "VC_FEED_SEED")? {
            config.feed.seed = Some(seed);
        }
        if let Some(secs) = parse::<u64, _>(&lookup, "VC_FEED_DUPLICATE_WINDOW_SECS")? {
            config.feed.duplicate_window = Some(Duration::from_secs(secs));
        }
        if let Some(high_water) = parse::<usize, _>(&lookup, "VC_BACKLOG_HIGH_WATER")? {
            config.queue.backlog_high_water = high_water;
        }
        if let Some(flag) = lookup("VC_METRICS_ON_EXIT") {
            config.operator.metrics_on_exit = parse_flag(&flag);
        }

        config.feed.validate()?;
        Ok(config)
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ConsoleConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConsoleConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.feed.warmup, Duration::from_secs(10));
        assert!(!config.operator.metrics_on_exit);
    }

    #[test]
    fn test_overrides_applied() {
        let config = load(&[
            ("VC_FEED_WARMUP_SECS", "2"),
            ("VC_FEED_MIN_INTERVAL_SECS", "5"),
            ("VC_FEED_MAX_INTERVAL_SECS", " 8 "),
            ("VC_FEED_SEED", "42"),
            ("VC_BACKLOG_HIGH_WATER", "7"),
            ("VC_METRICS_ON_EXIT", "yes"),
        ])
        .unwrap();

        assert_eq!(config.feed.warmup, Duration::from_secs(2));
        assert_eq!(config.feed.min_interval, Duration::from_secs(5));
        assert_eq!(config.feed.max_interval, Duration::from_secs(8));
        assert_eq!(config.feed.seed, Some(42));
        assert_eq!(config.queue.backlog_high_water, 7);
        assert!(config.operator.metrics_on_exit);
    }

    #[test]
    fn test_unparseable_value_rejected() {
        let err = load(&[("VC_FEED_SEED", "abc")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "VC_FEED_SEED",
                ..
            }
        ));
    }

    #[test]
    fn test_inverted_interval_rejected() {
        let err = load(&[
            ("VC_FEED_MIN_INTERVAL_SECS", "90"),
            ("VC_FEED_MAX_INTERVAL_SECS", "60"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Feed(_)));
    }
}
