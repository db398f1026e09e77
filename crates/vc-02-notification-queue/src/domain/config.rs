//! Queue configuration.

/// Tunables for the notification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// Backlog length above which a warning is logged. The backlog is never
    /// truncated; this only makes a runaway feed visible.
    pub backlog_high_water: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            backlog_high_water: 50,
        }
    }
}
