//! # Shared Types Crate
//!
//! This crate contains the violation entities and navigation intents used
//! across the console workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Immutable Identity**: An alert's id and detection time are fixed at
//!   construction; consumers only read them.

pub mod entities;
pub mod intents;

pub use entities::*;
pub use intents::NavigationIntent;
