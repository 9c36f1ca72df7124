//! Document shell: head content plus the chrome around sections.

use std::fmt::Write;

use crate::escape::html_escape;

/// Everything that goes inside `<head>`.
///
/// Styles are inlined; the page makes no further requests for CSS.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    pub title: String,
    /// `<meta name=.. content=..>` pairs, in order.
    pub meta: Vec<(String, String)>,
    /// Inline stylesheets.
    pub styles: Vec<String>,
    /// Stylesheets that only apply when scripting is disabled.
    pub noscript_styles: Vec<String>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add an inline stylesheet.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Add a stylesheet wrapped in `<noscript>`, e.g. to show content the
    /// page script would otherwise animate in.
    pub fn with_noscript_style(mut self, css: &str) -> Self {
        self.noscript_styles.push(css.to_string());
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");
        // Writing to a String cannot fail.
        let _ = writeln!(html, "<title>{}</title>", html_escape(&self.title));
        for (name, content) in &self.meta {
            let _ = writeln!(
                html,
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            );
        }
        for css in &self.styles {
            let _ = writeln!(html, "<style>{}</style>", css);
        }
        for css in &self.noscript_styles {
            let _ = writeln!(html, "<noscript><style>{}</style></noscript>", css);
        }
        html
    }
}

/// Shell template wrapped around the page sections.
#[derive(Debug, Clone)]
pub struct Shell {
    pub lang: String,
    pub head: HeadContent,
    /// HTML between `</head>` and the first section.
    pub body_start: String,
    /// HTML after the last section, through `</html>`.
    pub body_end: String,
}

impl Shell {
    /// Shell with an English document, a bare `<main>` and no chrome.
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "en".to_string(),
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Everything sent before the first section.
    pub fn render_opening(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n{}</head>\n{}",
            html_escape(&self.lang),
            self.head.render(),
            self.body_start
        )
    }

    /// Everything sent after the last section.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}
