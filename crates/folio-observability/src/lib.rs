//! Observability setup for the portfolio.
//!
//! This crate provides:
//! - `LoggingConfig` - Level, format and per-target filter directives
//! - `init_logging` - Installs the global `tracing` subscriber

mod logging;

pub use logging::*;
