//! Ports layer for the notification queue.
//!
//! - Inbound (Driving) port: `NotificationApi`
//! - Outbound (Driven) ports: `NavigationPort`, `LifecyclePublisher`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
