//! Feed error types.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while building a feed.
///
/// A running feed never fails; upstream loss is reported through
/// `FeedStatus::Disconnected` on the feed's guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// Interval bounds are inverted or zero.
    #[error("Invalid demo interval: min {min:?} must be <= max {max:?} and max must be non-zero")]
    InvalidInterval { min: Duration, max: Duration },

    /// The demo generator has nothing to replay.
    #[error("Archetype catalog is empty")]
    EmptyCatalog,
}
