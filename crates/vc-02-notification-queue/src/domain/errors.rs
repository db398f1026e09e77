//! Error types for the notification queue.

use thiserror::Error;

/// Errors surfaced by [`crate::NotificationHandle`].
///
/// The queue itself has no failure path; the only way a command can fail is
/// that the session owning the queue has ended.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// The notification service has shut down.
    #[error("notification session closed")]
    SessionClosed,
}
