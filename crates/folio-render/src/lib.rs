//! Shell-first HTML rendering primitives.
//!
//! This crate enforces the page structure used by the portfolio workload:
//! - `Shell` / `HeadContent` - Document head and the chrome around sections
//! - `Section` - Named, anchored page sections with reveal hooks
//! - `Entrance` - Entrance-animation descriptors driven by a reveal flag
//! - `Page` - A shell plus its sections
//! - `PageSink` - Shell-first streaming into any byte sink

mod entrance;
mod error;
mod escape;
mod page;
mod section;
mod shell;
mod sink;

pub use entrance::*;
pub use error::*;
pub use escape::*;
pub use page::*;
pub use section::*;
pub use shell::*;
pub use sink::*;
