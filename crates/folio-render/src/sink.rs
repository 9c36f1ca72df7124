//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};

use crate::error::RenderError;

/// Where a page is in its streaming lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagePhase {
    /// Nothing sent yet.
    Start,
    /// Shell has been sent.
    ShellSent,
    /// A named section has been sent.
    SectionSent(String),
    /// Response completed.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Initial,
    ShellSent,
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's `OutgoingBody` and
/// in-memory channels.
pub struct PageSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> PageSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new page sink.
    pub fn new(sink: S) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell opening. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), RenderError> {
        match self.state {
            SinkState::Initial => {}
            SinkState::ShellSent => return Err(RenderError::ShellAlreadySent),
            SinkState::Completed => return Err(RenderError::Completed),
        }

        self.write(html).await?;
        self.state = SinkState::ShellSent;
        Ok(())
    }

    /// Send a named section. Shell must be sent first; names are unique.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), RenderError> {
        self.ensure_open()?;
        if self.sections_sent.iter().any(|s| s == name) {
            return Err(RenderError::DuplicateSection(name.to_string()));
        }

        self.write(html).await?;
        self.sections_sent.push(name.to_string());
        Ok(())
    }

    /// Send the shell closing and complete the response.
    pub async fn finish(&mut self, html: &str) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.write(html).await?;
        self.inner
            .flush()
            .await
            .map_err(|e| RenderError::Sink(e.to_string()))?;
        self.state = SinkState::Completed;
        Ok(())
    }

    /// Names of sections sent so far.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total bytes written.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PagePhase {
        match self.state {
            SinkState::Initial => PagePhase::Start,
            SinkState::Completed => PagePhase::Complete,
            SinkState::ShellSent => match self.sections_sent.last() {
                Some(name) => PagePhase::SectionSent(name.clone()),
                None => PagePhase::ShellSent,
            },
        }
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn ensure_open(&self) -> Result<(), RenderError> {
        match self.state {
            SinkState::Initial => Err(RenderError::ShellNotSent),
            SinkState::ShellSent => Ok(()),
            SinkState::Completed => Err(RenderError::Completed),
        }
    }

    async fn write(&mut self, html: &str) -> Result<(), RenderError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| RenderError::Sink(e.to_string()))?;
        self.bytes_sent += html.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::StreamExt;

    fn collect(rx: mpsc::UnboundedReceiver<Vec<u8>>) -> impl std::future::Future<Output = String> {
        async move {
            let chunks: Vec<Vec<u8>> = rx.collect().await;
            String::from_utf8(chunks.concat()).unwrap()
        }
    }

    #[tokio::test]
    async fn test_shell_first_ordering() {
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = PageSink::new(tx);

        assert_eq!(sink.phase(), PagePhase::Start);
        sink.send_shell("<head>").await.unwrap();
        assert_eq!(sink.phase(), PagePhase::ShellSent);
        sink.send_section("about", "<about>").await.unwrap();
        assert_eq!(sink.phase(), PagePhase::SectionSent("about".to_string()));
        sink.finish("</html>").await.unwrap();
        assert_eq!(sink.phase(), PagePhase::Complete);
        assert_eq!(sink.bytes_sent(), "<head><about></html>".len());

        drop(sink);
        assert_eq!(collect(rx).await, "<head><about></html>");
    }

    #[tokio::test]
    async fn test_section_before_shell_rejected() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = PageSink::new(tx);

        let err = sink.send_section("about", "x").await.unwrap_err();
        assert!(matches!(err, RenderError::ShellNotSent));
        assert!(sink.sections_sent().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_section_rejected() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = PageSink::new(tx);
        sink.send_shell("s").await.unwrap();
        sink.send_section("contact", "a").await.unwrap();

        let err = sink.send_section("contact", "b").await.unwrap_err();
        assert!(matches!(err, RenderError::DuplicateSection(name) if name == "contact"));
    }

    #[tokio::test]
    async fn test_shell_twice_and_after_finish() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = PageSink::new(tx);
        sink.send_shell("s").await.unwrap();
        assert!(matches!(
            sink.send_shell("s").await.unwrap_err(),
            RenderError::ShellAlreadySent
        ));

        sink.finish("e").await.unwrap();
        assert!(matches!(
            sink.send_section("late", "x").await.unwrap_err(),
            RenderError::Completed
        ));
    }

    #[tokio::test]
    async fn test_closed_sink_surfaces_error() {
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        drop(rx);
        let mut sink = PageSink::new(tx);

        let err = sink.send_shell("s").await.unwrap_err();
        assert!(matches!(err, RenderError::Sink(_)));
    }
}
