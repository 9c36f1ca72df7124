//! Hero banner, animated in on page load.

use folio_core::{SectionAnchor, SiteIdentity};
use folio_render::{html_escape, Entrance, Section};

use super::{ms, EXTERNAL};

/// Render the hero banner.
pub fn hero_section(site: &SiteIdentity) -> Section {
    let mut social = String::new();
    if !site.social.linkedin.is_empty() {
        social.push_str(&format!(
            r#"<a href="{}" class="btn-icon" {} aria-label="LinkedIn">in</a>"#,
            html_escape(&site.social.linkedin),
            EXTERNAL
        ));
    }
    social.push_str(&format!(
        r#"<a href="{}" class="btn-icon" aria-label="Email">✉</a>"#,
        html_escape(&site.mailto())
    ));

    let body = format!(
        r#"<div class="hero-content">
    <div class="badge" {}>
        <span class="pulse"></span>
        <span>Available for opportunities</span>
    </div>
    <h1 class="hero-title" {}>
        <span>Hi, I'm </span><span class="gradient-text">{}</span>
    </h1>
    <p class="hero-subtitle" {}>{}</p>
    <div class="hero-actions" {}>
        <a href="{}" class="btn btn-primary">View My Work <span class="arrow">→</span></a>
        <a href="{}" class="btn btn-secondary">Get In Touch</a>
    </div>
    <div class="hero-social" {}>{}</div>
</div>
<div class="scroll-hint" aria-hidden="true">
    <span>Scroll</span>
    <span class="scroll-arrow">↓</span>
</div>"#,
        Entrance::rise(14).with_delay(ms(150)).attrs(),
        Entrance::rise(18).with_delay(ms(250)).attrs(),
        html_escape(&site.name),
        Entrance::rise(18).with_delay(ms(350)).attrs(),
        html_escape(&site.headline),
        Entrance::rise(18).with_delay(ms(450)).attrs(),
        SectionAnchor::Projects.href(),
        SectionAnchor::Contact.href(),
        Entrance::fade().with_delay(ms(550)).attrs(),
        social
    );

    Section::builder("hero")
        .class("section hero")
        .reveal_on_load()
        .body(body)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render::RevealMode;

    #[test]
    fn test_hero_content() {
        let section = hero_section(&SiteIdentity::default());
        let html = section.render();

        assert_eq!(section.reveal, Some(RevealMode::OnLoad));
        assert!(html.contains("Available for opportunities"));
        assert!(html.contains(r#"<span class="gradient-text">Mark Bychin</span>"#));
        assert!(html.contains(r##"href="#projects""##));
        assert!(html.contains(r##"href="#contact""##));
        assert!(html.contains(r#"href="mailto:bychinmark@gmail.com""#));
        assert!(html.contains(r#"href="https://www.linkedin.com/in/mark-bychin""#));
    }

    #[test]
    fn test_hero_escapes_identity() {
        let site = SiteIdentity {
            name: "<Ada>".to_string(),
            ..SiteIdentity::default()
        };
        let html = hero_section(&site).render();
        assert!(html.contains("&lt;Ada&gt;"));
        assert!(!html.contains("<Ada>"));
    }

    #[test]
    fn test_hero_without_linkedin() {
        let mut site = SiteIdentity::default();
        site.social.linkedin.clear();
        assert!(!hero_section(&site).render().contains("LinkedIn"));
    }
}
