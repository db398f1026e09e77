//! # Domain Layer - Violation Feed
//!
//! ## Components
//!
//! - `catalog`: Camera registry and the demo archetype catalog
//! - `factory`: `ViolationFactory` (identity + timestamp minting), duplicate suppression
//! - `config`: `FeedConfig`
//! - `errors`: `FeedError`

pub mod catalog;
pub mod config;
pub mod errors;
pub mod factory;

pub use catalog::*;
pub use config::*;
pub use errors::*;
pub use factory::*;
