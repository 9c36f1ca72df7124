//! Page footer.

use folio_core::SiteIdentity;
use folio_render::html_escape;

/// Render the footer with the copyright year.
pub fn render_footer(site: &SiteIdentity, year: i32) -> String {
    format!(
        r#"<footer class="site-footer">
    <div class="container">© {} {}.</div>
</footer>
"#,
        year,
        html_escape(&site.name)
    )
}
