//! Skills section: category cards and the technology strip.

use folio_core::{RevealConfig, SectionAnchor};
use folio_render::{html_escape, stagger, Entrance, Section};

use super::{ms, section_header};
use crate::data::SkillsContent;

/// Render the skills section.
pub fn skills_section(content: &SkillsContent, reveal: &RevealConfig) -> Section {
    let entrances = stagger(Entrance::rise(30), ms(100), content.categories.len());
    let cards: String = content
        .categories
        .iter()
        .zip(entrances)
        .map(|(category, entrance)| {
            let chips: String = category
                .skills
                .iter()
                .map(|skill| format!(r#"<span class="chip">{}</span>"#, html_escape(skill)))
                .collect();
            format!(
                r#"<div class="card skill-card accent-{}" {}>
    <div class="card-icon">{}</div>
    <h3>{}</h3>
    <div class="chips">{}</div>
</div>"#,
                html_escape(&category.accent),
                entrance.attrs(),
                category.icon,
                html_escape(&category.title),
                chips
            )
        })
        .collect();

    let group: String = content
        .technologies
        .iter()
        .map(|tech| format!("<span>{}</span>", html_escape(tech)))
        .collect();

    let body = format!(
        r#"<div class="container">
{}
<div class="skill-grid">{}</div>
<div class="marquee" {}>
    <div class="marquee-track" style="--marquee-duration: {}s">
        <div class="marquee-group">{}</div>
        <div class="marquee-group" aria-hidden="true">{}</div>
    </div>
</div>
</div>"#,
        section_header(SectionAnchor::Skills, "My", "expertise"),
        cards,
        Entrance::fade().with_delay(ms(350)).attrs(),
        content.marquee_seconds,
        group,
        group
    );

    Section::builder("skills")
        .anchor(SectionAnchor::Skills.id())
        .reveal_on_view(reveal.root_margin_px)
        .body(body)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_cards_and_marquee() {
        let html = skills_section(&SkillsContent::default(), &RevealConfig::default()).render();

        assert!(html.contains("02. SKILLS"));
        assert_eq!(html.matches("skill-card").count(), 4);
        assert!(html.contains("Cloud &amp; DevOps"));
        // Each technology appears once per marquee group.
        assert_eq!(html.matches("<span>MongoDB</span>").count(), 2);
        assert!(html.contains("--marquee-duration: 28s"));
    }
}
