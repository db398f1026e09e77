//! Text rendering of the active notification.

use chrono::{DateTime, Utc};
use shared_types::ViolationEvent;
use std::fmt;
use vc_02_notification_queue::NotificationSnapshot;

/// Title shown on every violation notification.
pub const TITLE: &str = "Violation Detected!";

/// Display model of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub glyph: &'static str,
    pub category: &'static str,
    pub confidence: String,
    pub camera: String,
    pub location: String,
    pub detected: String,
}

impl NotificationView {
    /// Build the view as of `now`.
    pub fn new(event: &ViolationEvent, now: DateTime<Utc>) -> Self {
        Self {
            glyph: event.category().glyph(),
            category: event.category().label(),
            confidence: format!("{:.0}% Confidence", event.confidence_percent().round()),
            camera: event.camera_label().to_string(),
            location: event.location_label().to_string(),
            detected: relative_time(event.detected_at(), now),
        }
    }
}

impl fmt::Display for NotificationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌─ {TITLE}")?;
        writeln!(f, "│ {} {} ({})", self.glyph, self.category, self.confidence)?;
        writeln!(f, "│ Camera:   {}", self.camera)?;
        writeln!(f, "│ Location: {}", self.location)?;
        writeln!(f, "│ Time:     {}", self.detected)?;
        write!(f, "└─ [d] Dismiss  [v] View Evidence")
    }
}

/// One-line queue status.
pub fn status_line(snapshot: &NotificationSnapshot) -> String {
    match &snapshot.active {
        Some(active) => format!(
            "Displaying {} ({}), {} waiting",
            active.id(),
            active.category().label(),
            snapshot.backlog_len
        ),
        None => format!("Idle, {} waiting", snapshot.backlog_len),
    }
}

/// Human distance between `then` and `now`, e.g. "2 minutes ago".
///
/// Timestamps in the future are treated as "now".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(then).num_seconds().max(0);
    let minutes = (secs + 30) / 60;
    let hours = (minutes + 30) / 60;
    let days = (hours + 12) / 24;

    let distance = match secs {
        s if s < 30 => "less than a minute".to_string(),
        s if s < 90 => "1 minute".to_string(),
        _ if minutes < 45 => format!("{minutes} minutes"),
        _ if minutes < 90 => "about 1 hour".to_string(),
        _ if hours < 24 => format!("about {hours} hours"),
        _ if hours < 42 => "1 day".to_string(),
        _ if days < 30 => format!("{days} days"),
        _ if days < 60 => "about 1 month".to_string(),
        _ if days < 365 => format!("{} months", (days + 15) / 30),
        _ => match days / 365 {
            1 => "about 1 year".to_string(),
            years => format!("about {years} years"),
        },
    };
    format!("{distance} ago")
}
