//! Section renderers for the portfolio page.

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod skills;

pub use about::*;
pub use contact::*;
pub use experience::*;
pub use footer::*;
pub use hero::*;
pub use nav::*;
pub use projects::*;
pub use skills::*;

use std::time::Duration;

use folio_core::SectionAnchor;
use folio_render::{html_escape, Entrance};

pub(crate) fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Eyebrow (`01. ABOUT`) and two-tone heading shared by the anchored sections.
pub(crate) fn section_header(anchor: SectionAnchor, heading: &str, muted: &str) -> String {
    format!(
        r#"<div class="section-header" {}>
    <span class="eyebrow">{}</span>
    <h2>{} <span class="muted">{}</span></h2>
</div>"#,
        Entrance::rise(20).attrs(),
        anchor.eyebrow().unwrap_or_default(),
        html_escape(heading),
        html_escape(muted)
    )
}

/// External link attributes.
pub(crate) const EXTERNAL: &str = r#"target="_blank" rel="noreferrer""#;
