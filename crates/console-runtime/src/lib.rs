//! # Console Runtime Library
//!
//! Exposes the runtime's modules for testing. The entry point is the
//! `vigil-console` binary in `main.rs`.
//!
//! - `config`: `ConsoleConfig` and environment loading
//! - `session`: feed-to-controller wiring and ordered shutdown
//! - `operator`: terminal command loop
//! - `router`: consumer of evidence navigation intents
//! - `view`: notification text rendering

pub mod config;
pub mod operator;
pub mod router;
pub mod session;
pub mod view;

pub use config::{ConfigError, ConsoleConfig, OperatorConfig};
pub use operator::{OperatorCommand, OperatorConsole, OperatorExit};
pub use router::EvidenceRouter;
pub use session::{ConsoleSession, SessionSummary};
pub use view::{relative_time, status_line, NotificationView};
