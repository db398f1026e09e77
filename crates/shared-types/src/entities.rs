//! # Core Domain Entities
//!
//! Defines the entities exchanged between the violation feed, the
//! notification queue and the console runtime.
//!
//! ## Clusters
//!
//! - **Identity**: `AlertId`, `CameraId`
//! - **Classification**: `ViolationCategory`, `ReviewState`
//! - **Incident**: `ViolationDetails`, `ViolationEvent`
//! - **Feed health**: `FeedStatus`, `CameraStatus`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Unique identifier of a violation alert.
///
/// Minted once per produced event and never reused, even when the upstream
/// detector reports the same physical incident twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlertId(Uuid);

impl AlertId {
    /// Mint a fresh, process-unique alert id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. one assigned by an upstream pipeline).
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert-{}", self.0.simple())
    }
}

/// Identifier of a surveillance camera, e.g. `CAM-002`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraId(String);

impl CameraId {
    /// Create a camera id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// CLUSTER B: CLASSIFICATION
// =============================================================================

/// Kind of prohibited item a detection refers to.
///
/// New categories may be added as the detector learns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ViolationCategory {
    /// Lit cigarette.
    Cigarette,
    /// E-cigarette or vape pen.
    Vape,
    /// Food item (cake and similar).
    FoodItem,
    /// Carbonated soft drink or other beverage.
    Beverage,
}

impl ViolationCategory {
    /// Every category currently known.
    pub const ALL: [ViolationCategory; 4] = [
        ViolationCategory::Cigarette,
        ViolationCategory::Vape,
        ViolationCategory::FoodItem,
        ViolationCategory::Beverage,
    ];

    /// Operator-facing label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cigarette => "Cigarette",
            Self::Vape => "E-Cigarette/Vape",
            Self::FoodItem => "Cake",
            Self::Beverage => "Carbonated Drink",
        }
    }

    /// Glyph shown next to the label in the notification.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Cigarette => "🚬",
            Self::Vape => "💨",
            Self::FoodItem => "🍰",
            Self::Beverage => "🥤",
        }
    }

    /// Stable machine name (matches the serde representation).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cigarette => "cigarette",
            Self::Vape => "vape",
            Self::FoodItem => "food-item",
            Self::Beverage => "beverage",
        }
    }
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown violation category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ViolationCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cigarette" => Ok(Self::Cigarette),
            "vape" => Ok(Self::Vape),
            // Detector model labels
            "food-item" | "cake" => Ok(Self::FoodItem),
            "beverage" | "csd" => Ok(Self::Beverage),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Review state of an alert in the downstream triage workflow.
///
/// The notification engine only ever produces `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewState {
    /// Not yet looked at by anyone.
    #[default]
    New,
    /// Reviewed by an operator.
    Reviewed,
    /// Judged a false positive.
    Dismissed,
    /// Escalated into a case.
    Escalated,
}

// =============================================================================
// CLUSTER C: INCIDENT
// =============================================================================

/// Descriptive part of a detection, before it becomes an alert.
///
/// This is what the detector (or the demo archetype catalog) knows; the
/// identity and timestamp are attached by [`ViolationEvent::detected`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationDetails {
    /// What was detected.
    pub category: ViolationCategory,
    /// Detector confidence, 0-100.
    pub confidence_percent: f32,
    /// Camera that saw it.
    pub camera_id: CameraId,
    /// Human-readable camera name.
    pub camera_label: String,
    /// Human-readable location of the camera.
    pub location_label: String,
}

/// One detected incident requiring operator attention.
///
/// INVARIANT: `id` and `detected_at` never change after construction. Fields
/// are private; only `review_state` has a transition method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationEvent {
    id: AlertId,
    category: ViolationCategory,
    confidence_percent: f32,
    camera_id: CameraId,
    camera_label: String,
    location_label: String,
    detected_at: DateTime<Utc>,
    review_state: ReviewState,
}

impl ViolationEvent {
    /// Turn a detection into an alert with a freshly minted id.
    ///
    /// Confidence is clamped to `0..=100`; the review state starts at `New`.
    #[must_use]
    pub fn detected(details: ViolationDetails, detected_at: DateTime<Utc>) -> Self {
        Self::with_id(AlertId::new(), details, detected_at)
    }

    /// Build an alert around an id assigned elsewhere.
    #[must_use]
    pub fn with_id(id: AlertId, details: ViolationDetails, detected_at: DateTime<Utc>) -> Self {
        let confidence_percent = if details.confidence_percent.is_nan() {
            0.0
        } else {
            details.confidence_percent.clamp(0.0, 100.0)
        };

        Self {
            id,
            category: details.category,
            confidence_percent,
            camera_id: details.camera_id,
            camera_label: details.camera_label,
            location_label: details.location_label,
            detected_at,
            review_state: ReviewState::New,
        }
    }

    pub fn id(&self) -> AlertId {
        self.id
    }

    pub fn category(&self) -> ViolationCategory {
        self.category
    }

    pub fn confidence_percent(&self) -> f32 {
        self.confidence_percent
    }

    pub fn camera_id(&self) -> &CameraId {
        &self.camera_id
    }

    pub fn camera_label(&self) -> &str {
        &self.camera_label
    }

    pub fn location_label(&self) -> &str {
        &self.location_label
    }

    pub fn detected_at(&self) -> DateTime<Utc> {
        self.detected_at
    }

    pub fn review_state(&self) -> ReviewState {
        self.review_state
    }

    /// Move the alert to a new review state (downstream triage only).
    #[must_use]
    pub fn with_review_state(mut self, state: ReviewState) -> Self {
        self.review_state = state;
        self
    }
}

// =============================================================================
// CLUSTER D: FEED HEALTH
// =============================================================================

/// Health of the violation feed as seen by its caller.
///
/// A disconnect is reported here, never as a synthesized `ViolationEvent`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeedStatus {
    /// Subscribed, nothing received yet.
    #[default]
    Starting,
    /// Events are flowing (or the demo generator is armed).
    Live,
    /// The upstream detection feed went away.
    Disconnected {
        /// Why the feed stopped.
        reason: String,
    },
    /// Cancelled by the session owner.
    Stopped,
}

impl FeedStatus {
    /// True while the feed can still produce events.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Starting | Self::Live)
    }
}

/// Operational status of a camera in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Online,
    Offline,
    Warning,
}
