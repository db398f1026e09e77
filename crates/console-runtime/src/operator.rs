//! Operator terminal.
//!
//! Reads single-letter commands from the operator and redraws the
//! notification whenever the active alert changes.
//!
//! | Command | Action |
//! |---------|--------|
//! | `d` | Dismiss the active notification |
//! | `v` | View evidence for the active notification |
//! | `s` | Print queue status |
//! | `h` | Print help |
//! | `q` | End the session |

use crate::view::{status_line, NotificationView};
use chrono::Utc;
use shared_types::AlertId;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;
use vc_02_notification_queue::{NotificationApi, NotificationError};

const HELP: &str = "Commands: [d] dismiss  [v] view evidence  [s] status  [h] help  [q] quit";

/// A parsed operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorCommand {
    Dismiss,
    ViewEvidence,
    Status,
    Help,
    Quit,
}

impl OperatorCommand {
    /// Parse one input line. Blank or unknown input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "d" | "dismiss" => Some(Self::Dismiss),
            "v" | "view" | "evidence" => Some(Self::ViewEvidence),
            "s" | "status" => Some(Self::Status),
            "h" | "help" | "?" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Why the operator loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorExit {
    /// The operator typed `q`.
    Quit,
    /// Input reached end of file.
    InputClosed,
    /// The notification controller stopped underneath the terminal.
    SessionClosed,
}

/// Terminal front-end over a [`NotificationApi`].
pub struct OperatorConsole<'a, A, W> {
    api: &'a A,
    out: W,
    shown: Option<AlertId>,
}

impl<'a, A, W> OperatorConsole<'a, A, W>
where
    A: NotificationApi,
    W: AsyncWrite + Unpin,
{
    pub fn new(api: &'a A, out: W) -> Self {
        Self {
            api,
            out,
            shown: None,
        }
    }

    /// Run until quit, end of input, or controller shutdown.
    pub async fn run<R>(mut self, input: R) -> io::Result<OperatorExit>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut snapshots = self.api.subscribe();

        self.write_line(HELP).await?;
        self.redraw().await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        return Ok(OperatorExit::InputClosed);
                    };
                    let Some(command) = OperatorCommand::parse(&line) else {
                        if !line.trim().is_empty() {
                            self.write_line(&format!("Unknown command {:?}. {HELP}", line.trim())).await?;
                        }
                        continue;
                    };
                    match self.execute(command).await {
                        Ok(true) => {}
                        Ok(false) => return Ok(OperatorExit::Quit),
                        Err(NotificationError::SessionClosed) => {
                            return Ok(OperatorExit::SessionClosed)
                        }
                    }
                    self.redraw().await?;
                }
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        return Ok(OperatorExit::SessionClosed);
                    }
                    self.redraw().await?;
                }
            }
        }
    }

    /// Returns `Ok(false)` when the operator asked to quit.
    async fn execute(&mut self, command: OperatorCommand) -> Result<bool, NotificationError> {
        debug!(?command, "Operator command");
        let message = match command {
            OperatorCommand::Dismiss => match self.api.dismiss().await? {
                Some(event) => format!("Dismissed {}", event.id()),
                None => "No active notification".to_string(),
            },
            OperatorCommand::ViewEvidence => match self.api.view_evidence().await? {
                Some(event) => format!("Opening evidence for {}", event.id()),
                None => "No active notification".to_string(),
            },
            OperatorCommand::Status => status_line(&self.api.snapshot()),
            OperatorCommand::Help => HELP.to_string(),
            OperatorCommand::Quit => return Ok(false),
        };
        // Terminal write failures are not queue failures
        let _ = self.write_line(&message).await;
        Ok(true)
    }

    /// Draw the active notification if it changed since the last draw.
    async fn redraw(&mut self) -> io::Result<()> {
        let snapshot = self.api.snapshot();
        let current = snapshot.active.as_ref().map(|e| e.id());
        if current == self.shown {
            return Ok(());
        }
        self.shown = current;

        match &snapshot.active {
            Some(event) => {
                let view = NotificationView::new(event, Utc::now());
                self.write_line(&view.to_string()).await?;
                if snapshot.backlog_len > 0 {
                    self.write_line(&format!("({} more waiting)", snapshot.backlog_len))
                        .await?;
                }
            }
            None => self.write_line("No active notifications").await?,
        }
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vc_02_notification_queue::{
        NoOpLifecyclePublisher, NoOpNavigator, NotificationService, QueueConfig,
    };

    fn event(camera: &str) -> shared_types::ViolationEvent {
        shared_types::ViolationEvent::detected(
            shared_types::ViolationDetails {
                category: shared_types::ViolationCategory::FoodItem,
                confidence_percent: 91.8,
                camera_id: shared_types::CameraId::new(camera),
                camera_label: "Cafeteria South".into(),
                location_label: "Building B - Level 1".into(),
            },
            Utc::now(),
        )
    }

    fn spawn() -> vc_02_notification_queue::NotificationHandle {
        NotificationService::new(
            QueueConfig::default(),
            Arc::new(NoOpNavigator),
            Arc::new(NoOpLifecyclePublisher),
        )
        .spawn()
        .0
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(OperatorCommand::parse("d"), Some(OperatorCommand::Dismiss));
        assert_eq!(OperatorCommand::parse(" V \n"), Some(OperatorCommand::ViewEvidence));
        assert_eq!(OperatorCommand::parse("status"), Some(OperatorCommand::Status));
        assert_eq!(OperatorCommand::parse("q"), Some(OperatorCommand::Quit));
        assert_eq!(OperatorCommand::parse(""), None);
        assert_eq!(OperatorCommand::parse("x"), None);
    }

    #[tokio::test]
    async fn test_script_dismisses_in_order() {
        let handle = spawn();
        let (e1, e2) = (event("CAM-010"), event("CAM-011"));
        handle.enqueue(e1.clone()).unwrap();
        handle.enqueue(e2.clone()).unwrap();
        let _ = handle.subscribe().wait_for(|s| s.backlog_len == 1).await;

        let mut out = Vec::new();
        let exit = OperatorConsole::new(&handle, &mut out)
            .run(&b"d\nv\nd\nq\n"[..])
            .await
            .unwrap();
        assert_eq!(exit, OperatorExit::Quit);

        let text = String::from_utf8(out).unwrap();
        let dismissed = text.find(&format!("Dismissed {}", e1.id())).unwrap();
        let evidence = text
            .find(&format!("Opening evidence for {}", e2.id()))
            .unwrap();
        assert!(dismissed < evidence);
        assert!(text.contains("Violation Detected!"));
        assert!(text.contains("No active notification"));
    }

    #[tokio::test]
    async fn test_end_of_input() {
        let handle = spawn();
        let mut out = Vec::new();
        let exit = OperatorConsole::new(&handle, &mut out)
            .run(&b"s\n"[..])
            .await
            .unwrap();

        assert_eq!(exit, OperatorExit::InputClosed);
        assert!(String::from_utf8(out).unwrap().contains("Idle, 0 waiting"));
    }

    #[tokio::test]
    async fn test_controller_shutdown_ends_loop() {
        let handle = spawn();
        handle.shutdown().await.unwrap();

        let mut out = Vec::new();
        let exit = OperatorConsole::new(&handle, &mut out)
            .run(&b"d\n"[..])
            .await
            .unwrap();
        assert_eq!(exit, OperatorExit::SessionClosed);
    }
}
