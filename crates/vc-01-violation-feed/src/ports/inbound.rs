//! # Inbound Port - ViolationFeed
//!
//! The contract between an event source and its one downstream consumer.

use crate::guard::FeedGuard;
use shared_types::ViolationEvent;

/// Consumer registered with a feed.
///
/// Invoked synchronously once per produced event; the feed does not wait for
/// any result, so implementations must not block.
pub type ViolationCallback = Box<dyn Fn(ViolationEvent) + Send + Sync + 'static>;

/// A source of violation events.
///
/// `on_violation` consumes the feed, so a feed can only ever have one
/// registered consumer. The returned guard owns the feed's timers and tasks;
/// dropping it (or calling [`FeedGuard::shutdown`]) cancels them.
///
/// Must be called from within a tokio runtime.
///
/// # Example
///
/// ```rust,ignore
/// let feed = DemoFeed::new(FeedConfig::default(), factory)?;
/// let guard = feed.on_violation(Box::new(move |event| handle.enqueue(event)));
/// // ... session runs ...
/// guard.shutdown().await;
/// ```
pub trait ViolationFeed: Send + 'static {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Register the consumer and start producing events.
    fn on_violation(self, callback: ViolationCallback) -> FeedGuard
    where
        Self: Sized;
}
