//! # Violation Feed Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Produces `ViolationEvent`s and hands each one, exactly once, to a single
//! registered consumer. Two sources are provided: a self-simulating demo feed
//! and an adapter over an upstream detection channel.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | One consumer per feed | `ports/inbound.rs` - `on_violation(self, ..)` consumes the feed |
//! | Fresh id + generation time per event | `domain/factory.rs` - `ViolationFactory::stamp()` |
//! | No timer outlives the session | `guard.rs` - `FeedGuard` aborts its task on drop |
//! | Disconnect is a status, not an event | `adapters/channel.rs` - `FeedStatus::Disconnected` |
//!
//! ## Demo Schedule
//!
//! ```text
//! start ──warmup (10s)──→ event ──U[30s,60s]──→ event ──U[30s,60s]──→ ...
//!                                  (re-drawn after every event)
//! ```
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/demo.rs    - DemoFeed (timer generator)               │
//! │  adapters/channel.rs - ChannelFeed (upstream detections)        │
//! │  guard.rs            - FeedGuard (task ownership)               │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - ViolationFeed trait, ViolationCallback     │
//! │  ports/outbound.rs - Clock trait                                │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/catalog.rs - CameraRegistry, sample archetypes          │
//! │  domain/factory.rs - ViolationFactory, DuplicateSuppressor      │
//! │  domain/config.rs  - FeedConfig                                 │
//! │  domain/errors.rs  - FeedError                                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;
pub mod guard;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use guard::FeedGuard;
pub use ports::*;
