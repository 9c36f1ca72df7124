//! Rendering errors.

/// Error type for page streaming.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Shell already sent")]
    ShellAlreadySent,

    #[error("Page already completed")]
    Completed,

    #[error("Section '{0}' sent twice")]
    DuplicateSection(String),

    #[error("Sink error: {0}")]
    Sink(String),
}
