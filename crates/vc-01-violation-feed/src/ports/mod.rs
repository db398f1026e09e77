//! Ports layer for the violation feed.
//!
//! - Inbound (Driving) port: `ViolationFeed`, the single-consumer registration
//! - Outbound (Driven) port: `Clock`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
