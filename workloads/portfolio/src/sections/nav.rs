//! Sticky navigation bar.

use folio_core::{SectionAnchor, SiteIdentity};
use folio_render::html_escape;

/// Render the navigation bar: initials linking to the top, then one link
/// per section.
pub fn render_nav(site: &SiteIdentity) -> String {
    let links: String = SectionAnchor::NAV
        .iter()
        .map(|anchor| {
            format!(
                r#"            <a href="{}">{}</a>
"#,
                anchor.href(),
                anchor.label()
            )
        })
        .collect();

    format!(
        r#"<header class="site-header">
    <div class="nav-container">
        <a href="{}" class="logo">{}</a>
        <nav class="nav-links">
{}        </nav>
    </div>
</header>
"#,
        SectionAnchor::Top.href(),
        html_escape(&site.initials),
        links
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_in_order() {
        let html = render_nav(&SiteIdentity::default());
        assert!(html.contains(r##"<a href="#top" class="logo">MB</a>"##));

        let positions: Vec<usize> = ["#about", "#skills", "#experience", "#projects", "#contact"]
            .iter()
            .map(|href| html.find(&format!(r#"href="{}""#, href)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
