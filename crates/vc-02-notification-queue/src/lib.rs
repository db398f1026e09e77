//! # Notification Queue & Display Controller
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Serializes violation alerts into one-at-a-time interrupting notifications.
//! Events arrive at any rate; the operator sees exactly one at a time, in
//! arrival order, and none is ever dropped silently.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | At most one active notification | `domain/queue.rs` - `active: Option<_>` |
//! | FIFO promotion | `domain/queue.rs` - `VecDeque` push_back / pop_front |
//! | Reconcile after every mutation | `domain/queue.rs` - `enqueue()`/`dismiss()` end in `promote_if_idle()` |
//! | Dismiss on idle is a no-op | `domain/queue.rs` - `dismiss()` |
//! | No concurrent mutation | `service/controller.rs` - single owning task |
//!
//! ## Operations
//!
//! | Operation | Idle | Displaying |
//! |-----------|------|------------|
//! | `enqueue(e)` | append, promote `e` | append |
//! | `dismiss()` | no-op | clear active, promote next head |
//! | `view_evidence()` | no-op | dismiss + `NavigationIntent::ViewEvidence` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/bus.rs  - BusNavigator, BusLifecyclePublisher         │
//! │  adapters/noop.rs - no-op ports                                 │
//! │  service/         - NotificationService task, NotificationHandle│
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - NotificationApi trait                      │
//! │  ports/outbound.rs - NavigationPort, LifecyclePublisher         │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/queue.rs         - NotificationQueue                    │
//! │  domain/value_objects.rs - Promotion, Dismissal, Snapshot       │
//! │  domain/config.rs        - QueueConfig                          │
//! │  domain/errors.rs        - NotificationError                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::*;
