//! About section: portrait, biography and stats.

use folio_core::{RevealConfig, SectionAnchor, SiteIdentity};
use folio_render::{html_escape, stagger, Entrance, Section};

use super::{ms, section_header};
use crate::data::AboutContent;

/// Render the about section.
pub fn about_section(content: &AboutContent, site: &SiteIdentity, reveal: &RevealConfig) -> Section {
    let facts: String = site
        .location
        .iter()
        .map(|location| format!(r#"<span class="fact">📍 {}</span>"#, html_escape(location)))
        .chain(
            content
                .facts
                .iter()
                .map(|fact| format!(r#"<span class="fact">{}</span>"#, html_escape(fact))),
        )
        .collect();

    let stat_entrances = stagger(
        Entrance::rise(20).with_delay(ms(500)),
        ms(100),
        content.stats.len(),
    );
    let stats: String = content
        .stats
        .iter()
        .zip(stat_entrances)
        .map(|(stat, entrance)| {
            format!(
                r#"<div class="stat" {}>
    <p class="stat-value gradient-text">{}</p>
    <p class="stat-label">{}</p>
</div>"#,
                entrance.attrs(),
                html_escape(&stat.value),
                html_escape(&stat.label)
            )
        })
        .collect();

    let body = format!(
        r#"<div class="container">
{}
<div class="about-grid">
    <div class="portrait" {}>
        <img src="{}" alt="{}">
    </div>
    <div class="about-content" {}>
        <div class="facts">{}</div>
        <p class="lead">{}</p>
        <p>{}</p>
        <div class="stats">{}</div>
    </div>
</div>
</div>"#,
        section_header(SectionAnchor::About, &content.heading, &content.heading_muted),
        Entrance::slide(-50)
            .with_duration(ms(800))
            .with_delay(ms(200))
            .attrs(),
        html_escape(&content.portrait),
        html_escape(&site.name),
        Entrance::slide(50)
            .with_duration(ms(800))
            .with_delay(ms(300))
            .attrs(),
        facts,
        html_escape(&content.lead),
        html_escape(&content.body),
        stats
    );

    Section::builder("about")
        .anchor(SectionAnchor::About.id())
        .reveal_on_view(reveal.root_margin_px)
        .body(body)
        .build()
}
