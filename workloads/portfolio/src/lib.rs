//! Portfolio page workload.
//!
//! Renders a single-page portfolio with streaming SSR:
//! - Hero, about, skills, experience, projects and contact sections
//! - Entrance animations revealed on load or on first scroll into view
//! - A contact form posting to a form-relay endpoint
//!
//! The Spin HTTP handler is only compiled for `wasm32`; everything else is
//! plain rendering and can be exercised natively.

mod data;
mod page;
mod scripts;
mod sections;
mod styles;

#[cfg(target_arch = "wasm32")]
mod handler;

pub use data::*;
pub use page::{render_page, PortfolioPage};
pub use scripts::page_script;
pub use sections::CONTACT_FORM_ID;
pub use styles::PORTFOLIO_STYLES;
