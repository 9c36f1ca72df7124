//! Submission status.

use folio_core::text;
use serde::{Deserialize, Serialize};

/// Status of the contact form.
///
/// `Idle` is the resting state. `Sending` lasts while a request is in
/// flight. `Sent` and `Error` are transient and revert to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Sent => "sent",
            Self::Error => "error",
        }
    }

    /// Whether a new attempt may start from this status.
    pub fn can_submit(&self) -> bool {
        !matches!(self, Self::Sending)
    }

    /// Whether this status reverts to `Idle` on its own.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Sent | Self::Error)
    }

    /// Whether the submit button is disabled.
    pub fn disables_submit(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Submit button text.
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Sending => text::SENDING_LABEL,
            _ => text::SEND_LABEL,
        }
    }

    /// Status line under the form, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Sent => Some(text::SENT_NOTICE),
            Self::Error => Some(text::ERROR_NOTICE),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_only_sending_blocks() {
        assert!(SubmissionStatus::Idle.can_submit());
        assert!(SubmissionStatus::Sent.can_submit());
        assert!(SubmissionStatus::Error.can_submit());
        assert!(!SubmissionStatus::Sending.can_submit());
        assert!(SubmissionStatus::Sending.disables_submit());
    }

    #[test]
    fn test_transient() {
        assert!(SubmissionStatus::Sent.is_transient());
        assert!(SubmissionStatus::Error.is_transient());
        assert!(!SubmissionStatus::Idle.is_transient());
        assert!(!SubmissionStatus::Sending.is_transient());
    }

    #[test]
    fn test_view_text() {
        assert_eq!(SubmissionStatus::Sending.button_label(), "Sending…");
        assert_eq!(SubmissionStatus::Idle.button_label(), "Send Message");
        assert!(SubmissionStatus::Sent.notice().unwrap().starts_with("Message sent"));
        assert!(SubmissionStatus::Error.notice().unwrap().starts_with("Something went wrong"));
        assert!(SubmissionStatus::Idle.notice().is_none());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&SubmissionStatus::Sent).unwrap(), "\"sent\"");
    }
}
