//! Core abstractions for the portfolio workload.
//!
//! This crate provides the fundamental types shared by the other crates:
//! - `SiteConfig` - Immutable site identity plus relay and reveal settings
//! - `SectionAnchor` - The in-page anchors the page navigates between
//! - `ConfigError` - Loading and validation failures
//! - `text` - Contact form labels and status notices

mod anchor;
mod config;
mod error;
pub mod text;

pub use anchor::*;
pub use config::*;
pub use error::*;
