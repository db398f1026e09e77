//! Adapters layer for the notification queue.
//!
//! Connects the controller's outbound ports to the shared event bus.

pub mod bus;
pub mod noop;

pub use bus::{BusLifecyclePublisher, BusNavigator};
pub use noop::{NoOpLifecyclePublisher, NoOpNavigator};
