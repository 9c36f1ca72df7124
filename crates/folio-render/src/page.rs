//! A shell plus its ordered sections.

use std::fmt::Display;

use futures::Sink;

use crate::error::RenderError;
use crate::section::Section;
use crate::shell::Shell;
use crate::sink::PageSink;

/// A complete single page.
#[derive(Debug, Clone)]
pub struct Page {
    shell: Shell,
    sections: Vec<Section>,
}

impl Page {
    /// Create a page with no sections.
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            sections: Vec::new(),
        }
    }

    /// Append a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Sections in render order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Find a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// The shell.
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Render the whole document.
    pub fn render(&self) -> String {
        let mut html = self.shell.render_opening();
        for section in &self.sections {
            html.push_str(&section.render());
        }
        html.push_str(&self.shell.render_closing());
        html
    }

    /// Stream the document shell-first into `sink`.
    pub async fn stream_to<S, E>(&self, sink: &mut PageSink<S, E>) -> Result<(), RenderError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        sink.send_shell(&self.shell.render_opening()).await?;
        for section in &self.sections {
            sink.send_section(&section.name, &section.render()).await?;
        }
        sink.finish(&self.shell.render_closing()).await
    }
}
