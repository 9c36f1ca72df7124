//! Projects section: featured showcases and smaller cards.

use folio_core::{RevealConfig, SectionAnchor};
use folio_render::{html_escape, stagger, Entrance, Section};

use super::{ms, section_header, EXTERNAL};
use crate::data::{Project, ProjectsContent};

fn tags(project: &Project, class: &str) -> String {
    project
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="{}">{}</span>"#, class, html_escape(tag)))
        .collect()
}

fn featured_card(index: usize, project: &Project, entrance: &Entrance) -> String {
    let reverse = if index % 2 == 1 { " reverse" } else { "" };
    let source = project
        .github_link()
        .map(|href| {
            format!(
                r#"<div class="project-links"><a href="{}" {}>Source</a></div>"#,
                html_escape(href),
                EXTERNAL
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="featured-project{}" {}>
    <div class="project-media">
        <img src="{}" alt="{}" loading="lazy">
        <span class="project-index">{:02}</span>
    </div>
    <div class="project-body">
        <h3>{}</h3>
        <p>{}</p>
        <div class="tags">{}</div>
        {}
    </div>
</div>"#,
        reverse,
        entrance.attrs(),
        html_escape(&project.image),
        html_escape(&project.title),
        index + 1,
        html_escape(&project.title),
        html_escape(&project.description),
        tags(project, "tag"),
        source
    )
}

fn other_card(project: &Project, entrance: &Entrance) -> String {
    let mut links = String::new();
    if let Some(href) = project.live_link() {
        links.push_str(&format!(
            r#"<a href="{}" {}>Live</a>"#,
            html_escape(href),
            EXTERNAL
        ));
    }
    if let Some(href) = project.github_link() {
        links.push_str(&format!(
            r#"<a href="{}" {}>GitHub</a>"#,
            html_escape(href),
            EXTERNAL
        ));
    }

    format!(
        r#"<div class="card project-card" {}>
    <img src="{}" alt="{}" loading="lazy">
    <div class="project-card-body">
        <h4>{} <span class="arrow">↗</span></h4>
        <p>{}</p>
        <div class="tags small">{}</div>
        <div class="project-links">{}</div>
    </div>
</div>"#,
        entrance.attrs(),
        html_escape(&project.image),
        html_escape(&project.title),
        html_escape(&project.title),
        html_escape(&project.description),
        tags(project, "tag-plain"),
        links
    )
}

/// Render the projects section.
pub fn projects_section(content: &ProjectsContent, reveal: &RevealConfig) -> Section {
    let featured: Vec<&Project> = content.featured().collect();
    let others: Vec<&Project> = content.others().collect();

    let featured_entrances = stagger(
        Entrance::rise(50).with_duration(ms(800)),
        ms(200),
        featured.len(),
    );
    let featured_html: String = featured
        .iter()
        .zip(&featured_entrances)
        .enumerate()
        .map(|(i, (project, entrance))| featured_card(i, project, entrance))
        .collect();

    let other_entrances = stagger(Entrance::rise(20).with_delay(ms(700)), ms(100), others.len());
    let others_html: String = others
        .iter()
        .zip(&other_entrances)
        .map(|(project, entrance)| other_card(project, entrance))
        .collect();

    let body = format!(
        r#"<div class="container">
{}
<div class="featured-projects">{}</div>
<div class="other-projects" {}>
    <h3>Other Projects</h3>
    <div class="project-grid">{}</div>
</div>
</div>"#,
        section_header(SectionAnchor::Projects, "Featured", "work"),
        featured_html,
        Entrance::rise(30).with_delay(ms(600)).attrs(),
        others_html
    );

    Section::builder("projects")
        .anchor(SectionAnchor::Projects.id())
        .reveal_on_view(reveal.root_margin_px)
        .body(body)
        .build()
}
