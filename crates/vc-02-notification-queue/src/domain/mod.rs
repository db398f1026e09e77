//! # Domain Layer - Notification Queue
//!
//! ## Components
//!
//! - `queue`: `NotificationQueue` (backlog + active slot, reconciliation)
//! - `value_objects`: `Promotion`, `Dismissal`, `NotificationSnapshot`
//! - `config`: `QueueConfig`
//! - `errors`: `NotificationError`

pub mod config;
pub mod errors;
pub mod queue;
pub mod value_objects;

pub use config::*;
pub use errors::*;
pub use queue::*;
pub use value_objects::*;
