//! Service layer: the controller task and its handle.

pub mod controller;

pub use controller::{NotificationHandle, NotificationService};
