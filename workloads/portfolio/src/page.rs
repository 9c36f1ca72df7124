//! Page assembly: shell, chrome and sections in navigation order.

use chrono::Datelike;
use folio_core::SiteConfig;
use folio_render::{HeadContent, Page, Shell};

use crate::data::PortfolioContent;
use crate::scripts::page_script;
use crate::sections::{
    about_section, contact_section, experience_section, hero_section, projects_section,
    render_footer, render_nav, skills_section,
};
use crate::styles::PORTFOLIO_STYLES;

/// Shows every entrance when scripting is off.
const NOSCRIPT_STYLE: &str = "[data-entrance]{opacity:1;transform:none}";

const BACKDROP: &str = r#"<div class="backdrop" aria-hidden="true">
    <div class="glow glow-blue"></div>
    <div class="glow glow-purple"></div>
    <div class="glow glow-cyan"></div>
</div>
"#;

/// The single portfolio page for a site configuration.
#[derive(Debug, Clone)]
pub struct PortfolioPage<'a> {
    config: &'a SiteConfig,
    content: PortfolioContent,
    year: i32,
}

impl<'a> PortfolioPage<'a> {
    /// Page with the built-in content, dated the current year.
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            content: PortfolioContent::default(),
            year: chrono::Utc::now().year(),
        }
    }

    /// Replace the content records.
    pub fn with_content(mut self, content: PortfolioContent) -> Self {
        self.content = content;
        self
    }

    /// Pin the footer year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Assemble the page: hero, about, skills, experience, projects, contact.
    pub fn build(&self) -> Page {
        let config = self.config;
        let site = &config.site;
        let reveal = &config.reveal;

        Page::new(self.shell())
            .with_section(hero_section(site))
            .with_section(about_section(&self.content.about, site, reveal))
            .with_section(skills_section(&self.content.skills, reveal))
            .with_section(experience_section(&self.content.experience, reveal))
            .with_section(projects_section(&self.content.projects, reveal))
            .with_section(contact_section(site, &config.relay, reveal))
    }

    /// Render the whole document.
    pub fn render(&self) -> String {
        self.build().render()
    }

    fn shell(&self) -> Shell {
        let site = &self.config.site;
        let head = HeadContent::new(format!("{} | Portfolio", site.name))
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", &site.headline)
            .with_style(PORTFOLIO_STYLES)
            .with_noscript_style(NOSCRIPT_STYLE);

        let body_start = format!(
            "<body>\n{}<div id=\"top\"></div>\n{}<main>\n",
            BACKDROP,
            render_nav(site)
        );
        let body_end = format!(
            "</main>\n{}<script>{}</script>\n</body>\n</html>",
            render_footer(site, self.year),
            page_script(self.config)
        );

        Shell::new(head)
            .with_body_start(body_start)
            .with_body_end(body_end)
    }
}

/// Render the page for `config` with the built-in content.
pub fn render_page(config: &SiteConfig) -> String {
    PortfolioPage::new(config).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SectionAnchor;
    use folio_render::{PageSink, RevealMode};
    use futures::channel::mpsc;
    use futures::StreamExt;

    fn page() -> PortfolioPage<'static> {
        PortfolioPage::new(SiteConfig::builtin()).with_year(2026)
    }

    #[test]
    fn test_every_anchor_resolves() {
        let html = page().render();
        for anchor in [SectionAnchor::Top]
            .iter()
            .chain(SectionAnchor::NAV.iter())
        {
            assert!(
                html.contains(&format!(r#"id="{}""#, anchor.id())),
                "missing target for {}",
                anchor.href()
            );
        }
    }

    #[test]
    fn test_sections_in_nav_order() {
        let built = page().build();
        let names: Vec<&str> = built.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["hero", "about", "skills", "experience", "projects", "contact"]
        );
        assert_eq!(
            built.section("hero").and_then(|s| s.reveal),
            Some(RevealMode::OnLoad)
        );
    }

    #[test]
    fn test_document_chrome() {
        let html = page().render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Mark Bychin | Portfolio</title>"));
        assert!(html.contains("<noscript><style>[data-entrance]{opacity:1;transform:none}</style></noscript>"));
        assert!(html.contains("© 2026 Mark Bychin."));
        assert!(html.trim_end().ends_with("</html>"));

        let main_open = html.find("<main>").unwrap();
        let main_close = html.find("</main>").unwrap();
        let footer = html.find(r#"<footer class="site-footer""#).unwrap();
        let script = html.rfind("<script>").unwrap();
        assert!(main_open < main_close && main_close < footer && footer < script);
    }

    #[test]
    fn test_contact_form_wired_to_relay() {
        let html = page().render();
        assert!(html.contains(r#"id="contact-form""#));
        assert!(html.contains(r#"data-endpoint="https://formspree.io/f/mdallzjl""#));
        assert!(html.contains(r#"data-revert-ms="2500""#));
        assert!(html.contains(r#"const ENDPOINT = "https://formspree.io/f/mdallzjl";"#));
    }

    #[test]
    fn test_identity_is_escaped() {
        let mut config = SiteConfig::default();
        config.site.name = "Ada <Lovelace>".to_string();
        let html = PortfolioPage::new(&config).with_year(2026).render();

        assert!(html.contains("Ada &lt;Lovelace&gt;"));
        assert!(!html.contains("Ada <Lovelace>"));
    }

    #[test]
    fn test_render_page_uses_current_year() {
        let html = render_page(SiteConfig::builtin());
        let year = chrono::Utc::now().year();
        assert!(html.contains(&format!("© {} ", year)));
    }

    #[tokio::test]
    async fn test_streamed_matches_rendered() {
        let page = page();
        let built = page.build();
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = PageSink::new(tx);

        built.stream_to(&mut sink).await.unwrap();
        assert_eq!(sink.sections_sent().len(), 6);
        drop(sink);

        let chunks: Vec<Vec<u8>> = rx.collect().await;
        assert_eq!(String::from_utf8(chunks.concat()).unwrap(), page.render());
    }
}
