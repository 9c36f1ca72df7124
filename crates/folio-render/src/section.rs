//! Named, anchored page sections.

use crate::escape::html_escape;

/// When a section's entrance animation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// As soon as the page loads.
    OnLoad,
    /// The first time the section enters the viewport shrunk by `margin_px`.
    OnView {
        /// Signed root margin in pixels.
        margin_px: i32,
    },
}

/// A section is a named part of the page with its own anchor and reveal hook.
#[derive(Debug, Clone)]
pub struct Section {
    /// Section name (used for identification and `data-section`).
    pub name: String,
    /// Element id for in-page navigation.
    pub anchor: Option<String>,
    /// CSS class list.
    pub class: String,
    /// Reveal behavior, if the section animates in.
    pub reveal: Option<RevealMode>,
    /// Inner HTML.
    pub body: String,
}

impl Section {
    /// Create a new section with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            anchor: None,
            class: "section".to_string(),
            reveal: None,
            body: String::new(),
        }
    }

    /// Create a section using the builder.
    pub fn builder(name: impl Into<String>) -> SectionBuilder {
        SectionBuilder::new(name)
    }

    /// Render the section element.
    pub fn render(&self) -> String {
        let mut attrs = String::new();
        if let Some(anchor) = &self.anchor {
            attrs.push_str(&format!(r#" id="{}""#, html_escape(anchor)));
        }
        attrs.push_str(&format!(
            r#" class="{}" data-section="{}""#,
            html_escape(&self.class),
            html_escape(&self.name)
        ));
        match self.reveal {
            Some(RevealMode::OnLoad) => attrs.push_str(r#" data-reveal="load""#),
            Some(RevealMode::OnView { margin_px }) => attrs.push_str(&format!(
                r#" data-reveal="view" data-reveal-margin="{}px""#,
                margin_px
            )),
            None => {}
        }

        format!("<section{}>\n{}\n</section>\n", attrs, self.body)
    }
}

/// Builder for ergonomic section definition.
pub struct SectionBuilder {
    section: Section,
}

impl SectionBuilder {
    /// Create a new section builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            section: Section::new(name),
        }
    }

    /// Set the element id.
    pub fn anchor(mut self, id: impl Into<String>) -> Self {
        self.section.anchor = Some(id.into());
        self
    }

    /// Replace the class list.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.section.class = class.into();
        self
    }

    /// Animate in when the page loads.
    pub fn reveal_on_load(mut self) -> Self {
        self.section.reveal = Some(RevealMode::OnLoad);
        self
    }

    /// Animate in the first time the section is in view.
    pub fn reveal_on_view(mut self, margin_px: i32) -> Self {
        self.section.reveal = Some(RevealMode::OnView { margin_px });
        self
    }

    /// Set the inner HTML.
    pub fn body(mut self, html: impl Into<String>) -> Self {
        self.section.body = html.into();
        self
    }

    /// Build the section.
    pub fn build(self) -> Section {
        self.section
    }
}
