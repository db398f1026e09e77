//! Notification controller service.
//!
//! A single task owns the [`NotificationQueue`] and drains a command channel
//! one command at a time, so enqueue/dismiss interleavings from the feed and
//! the operator are serialized without locks.
//!
//! ```text
//!  feed callback ──Enqueue──┐
//!                           ▼
//!  operator ──Dismiss────→ [mpsc] ──→ controller task ──→ watch<NotificationSnapshot>
//!           ──ViewEvidence─┘               │
//!                                          ├──→ NavigationPort (view evidence)
//!                                          └──→ LifecyclePublisher
//! ```

use crate::domain::{
    Dismissal, NotificationError, NotificationQueue, NotificationSnapshot, Promotion, QueueConfig,
};
use crate::ports::{LifecyclePublisher, NavigationPort, NotificationApi};
use async_trait::async_trait;
use console_telemetry::{metric_inc, metric_observe};
use console_telemetry::{
    BACKLOG_DEPTH, BACKLOG_WAIT, DISPLAY_DURATION, NOTIFICATIONS_DISMISSED, NOTIFICATIONS_PROMOTED,
};
use shared_types::ViolationEvent;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

enum Command {
    Enqueue(ViolationEvent),
    Dismiss {
        reply: oneshot::Sender<Option<ViolationEvent>>,
    },
    ViewEvidence {
        reply: oneshot::Sender<Option<ViolationEvent>>,
    },
    Shutdown {
        reply: oneshot::Sender<usize>,
    },
}

/// Owner of the notification state.
pub struct NotificationService {
    queue: NotificationQueue,
    config: QueueConfig,
    navigator: Arc<dyn NavigationPort>,
    lifecycle: Arc<dyn LifecyclePublisher>,
    snapshot: watch::Sender<NotificationSnapshot>,
    above_high_water: bool,
}

impl NotificationService {
    pub fn new(
        config: QueueConfig,
        navigator: Arc<dyn NavigationPort>,
        lifecycle: Arc<dyn LifecyclePublisher>,
    ) -> Self {
        let (snapshot, _) = watch::channel(NotificationSnapshot::default());
        Self {
            queue: NotificationQueue::new(),
            config,
            navigator,
            lifecycle,
            snapshot,
            above_high_water: false,
        }
    }

    /// Start the controller task.
    ///
    /// The task ends when [`NotificationHandle::shutdown`] is called or when
    /// every handle has been dropped. Either way the backlog is discarded.
    pub fn spawn(self) -> (NotificationHandle, JoinHandle<()>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        let handle = NotificationHandle {
            commands,
            snapshot: self.snapshot.subscribe(),
        };
        let task = tokio::spawn(self.run(receiver));
        (handle, task)
    }

    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        info!(
            high_water = self.config.backlog_high_water,
            "Notification controller started"
        );

        while let Some(command) = commands.recv().await {
            match command {
                Command::Enqueue(event) => self.on_enqueue(event),
                Command::Dismiss { reply } => {
                    let closed = self.on_dismiss("dismiss").map(|d| d.event);
                    self.publish_snapshot();
                    let _ = reply.send(closed);
                }
                Command::ViewEvidence { reply } => {
                    let closed = self.on_view_evidence();
                    self.publish_snapshot();
                    let _ = reply.send(closed);
                }
                Command::Shutdown { reply } => {
                    commands.close();
                    let discarded = self.end_session();
                    let _ = reply.send(discarded);
                    return;
                }
            }
        }

        // All handles dropped
        self.end_session();
    }

    fn on_enqueue(&mut self, event: ViolationEvent) {
        if let Some(promotion) = self.queue.enqueue(event) {
            self.on_promoted(promotion);
        }
        self.check_high_water();
        self.publish_snapshot();
    }

    fn on_dismiss(&mut self, action: &'static str) -> Option<Dismissal> {
        let Some(dismissal) = self.queue.dismiss() else {
            debug!(action, "Nothing displayed; ignoring");
            return None;
        };
        self.record_dismissal(&dismissal, action);
        Some(dismissal)
    }

    fn on_view_evidence(&mut self) -> Option<ViolationEvent> {
        let Some((dismissal, intent)) = self.queue.view_evidence() else {
            debug!(action = "view_evidence", "Nothing displayed; ignoring");
            return None;
        };
        self.record_dismissal(&dismissal, "view_evidence");
        self.navigator.navigate(intent);
        Some(dismissal.event)
    }

    fn record_dismissal(&mut self, dismissal: &Dismissal, action: &'static str) {
        let alert_id = dismissal.event.id();
        info!(
            %alert_id,
            action,
            displayed_ms = dismissal.displayed_for.as_millis() as u64,
            "Notification closed"
        );
        metric_inc!(NOTIFICATIONS_DISMISSED, &[action]);
        metric_observe!(DISPLAY_DURATION, dismissal.displayed_for.as_secs_f64());
        self.lifecycle.dismissed(alert_id);

        if let Some(next) = dismissal.next {
            self.on_promoted(next);
        }
        self.check_high_water();
    }

    fn on_promoted(&self, promotion: Promotion) {
        info!(
            alert_id = %promotion.alert_id,
            backlog = promotion.backlog_len,
            waited_ms = promotion.waited.as_millis() as u64,
            "Notification displayed"
        );
        metric_inc!(NOTIFICATIONS_PROMOTED);
        metric_observe!(BACKLOG_WAIT, promotion.waited.as_secs_f64());
        self.lifecycle
            .promoted(promotion.alert_id, promotion.backlog_len);
    }

    fn check_high_water(&mut self) {
        let depth = self.queue.backlog_len();
        BACKLOG_DEPTH.set(depth as f64);

        if depth > self.config.backlog_high_water {
            if !self.above_high_water {
                warn!(
                    depth,
                    high_water = self.config.backlog_high_water,
                    "Notification backlog above high-water mark"
                );
                self.above_high_water = true;
            }
        } else {
            self.above_high_water = false;
        }
    }

    fn publish_snapshot(&self) {
        let next = self.queue.snapshot();
        self.snapshot.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn end_session(&mut self) -> usize {
        let discarded = self.queue.clear();
        BACKLOG_DEPTH.set(0.0);
        self.publish_snapshot();
        info!(discarded, "Notification controller stopped");
        discarded
    }
}

/// Cloneable client of a running [`NotificationService`].
#[derive(Clone)]
pub struct NotificationHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshot: watch::Receiver<NotificationSnapshot>,
}

impl NotificationHandle {
    /// True once the controller task has stopped.
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    /// Stop the controller and discard pending notifications.
    ///
    /// Returns how many events (active plus backlog) were dropped.
    pub async fn shutdown(&self) -> Result<usize, NotificationError> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Shutdown { reply })?;
        response.await.map_err(|_| NotificationError::SessionClosed)
    }

    fn send(&self, command: Command) -> Result<(), NotificationError> {
        self.commands
            .send(command)
            .map_err(|_| NotificationError::SessionClosed)
    }
}

#[async_trait]
impl NotificationApi for NotificationHandle {
    fn enqueue(&self, event: ViolationEvent) -> Result<(), NotificationError> {
        self.send(Command::Enqueue(event))
    }

    async fn dismiss(&self) -> Result<Option<ViolationEvent>, NotificationError> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Dismiss { reply })?;
        response.await.map_err(|_| NotificationError::SessionClosed)
    }

    async fn view_evidence(&self) -> Result<Option<ViolationEvent>, NotificationError> {
        let (reply, response) = oneshot::channel();
        self.send(Command::ViewEvidence { reply })?;
        response.await.map_err(|_| NotificationError::SessionClosed)
    }

    fn snapshot(&self) -> NotificationSnapshot {
        self.snapshot.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<NotificationSnapshot> {
        self.snapshot.clone()
    }
}

impl std::fmt::Debug for NotificationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHandle")
            .field("closed", &self.is_closed())
            .finish()
    }
}
