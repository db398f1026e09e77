//! # Inbound Port - NotificationApi
//!
//! Driving port used by the feed wiring (enqueue) and by the operator
//! surface (dismiss, view evidence, observe).

use crate::domain::{NotificationError, NotificationSnapshot};
use async_trait::async_trait;
use shared_types::ViolationEvent;
use tokio::sync::watch;

/// Primary API of the notification controller.
///
/// | Method | Caller |
/// |--------|--------|
/// | `enqueue` | feed callback (synchronous, never blocks) |
/// | `dismiss` | operator close action |
/// | `view_evidence` | operator "view evidence" action |
/// | `snapshot` / `subscribe` | renderer |
///
/// # Example
///
/// ```rust,ignore
/// async fn close_current(api: &impl NotificationApi) -> Result<(), NotificationError> {
///     if let Some(event) = api.dismiss().await? {
///         println!("closed {}", event.id());
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait NotificationApi: Send + Sync {
    /// Queue an event. Never rejects while the session is alive.
    fn enqueue(&self, event: ViolationEvent) -> Result<(), NotificationError>;

    /// Close the active notification and return it.
    ///
    /// `Ok(None)` when nothing was displayed.
    async fn dismiss(&self) -> Result<Option<ViolationEvent>, NotificationError>;

    /// Close the active notification and request navigation to its evidence.
    ///
    /// `Ok(None)` (and no navigation) when nothing was displayed.
    async fn view_evidence(&self) -> Result<Option<ViolationEvent>, NotificationError>;

    /// Latest published state.
    fn snapshot(&self) -> NotificationSnapshot;

    /// Watch state changes.
    fn subscribe(&self) -> watch::Receiver<NotificationSnapshot>;
}
