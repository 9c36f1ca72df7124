//! Reveal-on-scroll triggers.
//!
//! This crate provides:
//! - `RevealLatch` - Synchronous one-shot latch over visibility samples
//! - `VisibilityObserver` - Source of intersection samples for an element
//! - `Viewport` / `ViewportObserver` - Geometric observer with root margins
//! - `RevealTrigger` / `VisibilityFlag` - Async trigger exposing a read-only flag

mod latch;
mod observer;
mod trigger;
mod viewport;

pub use latch::*;
pub use observer::*;
pub use trigger::*;
pub use viewport::*;
