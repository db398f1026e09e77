//! Scoped ownership of a running feed.

use shared_types::FeedStatus;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to a running feed.
///
/// Owns the generator task. The task is cancelled when the guard is dropped,
/// so no timer outlives the session on any exit path, including panics and
/// early returns. [`FeedGuard::shutdown`] is the graceful variant.
pub struct FeedGuard {
    feed: &'static str,
    task: Option<JoinHandle<()>>,
    shutdown: watch::Sender<bool>,
    status: Arc<watch::Sender<FeedStatus>>,
}

impl FeedGuard {
    /// Spawn a feed body and wrap it in a guard.
    ///
    /// The body receives a shutdown receiver that flips to `true` on
    /// graceful shutdown.
    pub(crate) fn spawn<F, Fut>(
        feed: &'static str,
        status: Arc<watch::Sender<FeedStatus>>,
        body: F,
    ) -> Self
    where
        F: FnOnce(watch::Receiver<bool>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (shutdown, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(body(shutdown_rx));
        debug!(feed, "Feed started");

        Self {
            feed,
            task: Some(task),
            shutdown,
            status,
        }
    }

    /// Name of the feed behind this guard.
    pub fn feed(&self) -> &'static str {
        self.feed
    }

    /// Current feed health.
    pub fn status(&self) -> FeedStatus {
        self.status.borrow().clone()
    }

    /// Watch feed health changes (e.g. to surface a disconnect to the UI).
    pub fn subscribe_status(&self) -> watch::Receiver<FeedStatus> {
        self.status.subscribe()
    }

    /// True while the generator task is still running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the feed and wait for its task to exit.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if e.is_panic() {
                    tracing::error!(feed = self.feed, "Feed task panicked");
                }
            }
        }
        self.mark_stopped();
        debug!(feed = self.feed, "Feed shut down");
    }

    fn mark_stopped(&self) {
        self.status.send_if_modified(|status| {
            if status.is_active() {
                *status = FeedStatus::Stopped;
                true
            } else {
                false
            }
        });
    }
}

impl Drop for FeedGuard {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(feed = self.feed, "Feed cancelled");
        }
        self.mark_stopped();
    }
}

impl std::fmt::Debug for FeedGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedGuard")
            .field("feed", &self.feed)
            .field("status", &self.status())
            .field("running", &self.is_running())
            .finish()
    }
}
