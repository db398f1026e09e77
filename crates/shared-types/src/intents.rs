//! # Navigation Intents
//!
//! Opaque requests emitted by the notification engine and consumed by the
//! console's routing layer.

use crate::entities::AlertId;
use serde::{Deserialize, Serialize};

/// A request to move the operator to another view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationIntent {
    /// Open the evidence viewer deep-linked to one alert.
    ViewEvidence {
        /// The alert whose evidence should be shown.
        alert_id: AlertId,
    },
}

impl NavigationIntent {
    /// The alert this intent refers to.
    #[must_use]
    pub fn alert_id(&self) -> AlertId {
        match self {
            Self::ViewEvidence { alert_id } => *alert_id,
        }
    }

    /// Route path understood by the console router.
    #[must_use]
    pub fn route(&self) -> String {
        match self {
            Self::ViewEvidence { alert_id } => format!("/evidence?alert={alert_id}"),
        }
    }
}
