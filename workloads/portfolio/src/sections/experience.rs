//! Experience timeline.

use folio_core::{RevealConfig, SectionAnchor};
use folio_render::{html_escape, stagger, Entrance, Section};

use super::{ms, section_header};
use crate::data::Experience;

/// Render the experience timeline. Entries alternate sides on wide screens.
pub fn experience_section(history: &[Experience], reveal: &RevealConfig) -> Section {
    let entrances = stagger(Entrance::rise(40), ms(150), history.len());
    let items: String = history
        .iter()
        .zip(entrances)
        .enumerate()
        .map(|(i, (exp, entrance))| {
            let side = if i % 2 == 0 { "left" } else { "right" };
            let bullets: String = exp
                .bullets
                .iter()
                .map(|b| format!("<li>{}</li>", html_escape(b)))
                .collect();
            format!(
                r#"<div class="timeline-item {side} accent-{accent}" {attrs}>
    <span class="timeline-dot"></span>
    <div class="timeline-date">
        <span class="period">{period}</span>
        <p>{location}</p>
    </div>
    <div class="card timeline-card">
        <h3>{role}</h3>
        <p class="company">{company} · {location}</p>
        <ul>{bullets}</ul>
    </div>
</div>"#,
                side = side,
                accent = html_escape(&exp.accent),
                attrs = entrance.attrs(),
                period = html_escape(&exp.period),
                location = html_escape(&exp.location),
                role = html_escape(&exp.role),
                company = html_escape(&exp.company),
                bullets = bullets
            )
        })
        .collect();

    let body = format!(
        r#"<div class="container">
{}
<div class="timeline">{}</div>
</div>"#,
        section_header(SectionAnchor::Experience, "Where I’ve", "worked"),
        items
    );

    Section::builder("experience")
        .anchor(SectionAnchor::Experience.id())
        .reveal_on_view(reveal.root_margin_px)
        .body(body)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::work_history;

    #[test]
    fn test_timeline_alternates_and_staggers() {
        let html = experience_section(&work_history(), &RevealConfig::default()).render();

        assert!(html.contains("03. EXPERIENCE"));
        assert_eq!(html.matches("timeline-item left").count(), 2);
        assert_eq!(html.matches("timeline-item right").count(), 2);
        assert!(html.contains("Mid Atlantic Finance · Tampa, FL"));
        assert!(html.contains("--enter-delay: 450ms"));
    }
}
