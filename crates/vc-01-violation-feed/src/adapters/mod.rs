//! Adapters layer for the violation feed.
//!
//! - `demo`: timer-driven generator over the archetype catalog
//! - `channel`: bridge from an upstream detection channel

pub mod channel;
pub mod demo;

pub use channel::{ChannelFeed, RawDetection, DISCONNECT_REASON};
pub use demo::DemoFeed;
