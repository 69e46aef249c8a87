//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod market_system;
pub mod telemetry;

pub use config::*;
pub use market_system::*;
pub use telemetry::*;
