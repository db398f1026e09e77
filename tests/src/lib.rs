//! # Vigil Console Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs         # feed → controller → bus, one behaviour per test
//!     └── e2e_session.rs   # whole demo session under paused time
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p vc-tests
//! cargo test -p vc-tests integration::flows::
//! ```

pub mod integration;
