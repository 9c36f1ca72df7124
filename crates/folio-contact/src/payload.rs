//! JSON body posted to the form relay.

use serde::Serialize;

use crate::draft::ContactFormDraft;

pub use folio_core::text::SUBJECT_PREFIX;

/// Body of the relay POST.
///
/// `_replyto` lets the relay set the Reply-To header of the forwarded mail;
/// `_subject` sets its subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl RelayPayload {
    /// Build the payload for a draft.
    ///
    /// The email is trimmed the way a browser sanitizes `type="email"` input.
    pub fn from_draft(draft: &ContactFormDraft) -> Self {
        let email = draft.email.trim().to_string();
        Self {
            name: draft.name.clone(),
            email: email.clone(),
            message: draft.message.clone(),
            reply_to: email,
            subject: format!("{} {}", SUBJECT_PREFIX, draft.name),
        }
    }
}

impl From<&ContactFormDraft> for RelayPayload {
    fn from(draft: &ContactFormDraft) -> Self {
        Self::from_draft(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_fields() {
        let draft = ContactFormDraft::new("Ada", "ada@example.com", "Hi");
        let json = serde_json::to_value(RelayPayload::from(&draft)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hi",
                "_replyto": "ada@example.com",
                "_subject": "Portfolio message from Ada",
            })
        );
    }

    #[test]
    fn test_reply_to_tracks_email_and_subject_tracks_name() {
        let drafts = [
            ContactFormDraft::new("Grace Hopper", "grace@navy.mil", "COBOL?"),
            ContactFormDraft::new("Λ", "l@x.io", "…"),
            ContactFormDraft::new("O'Neil", "o@n.ie", "multi\nline"),
        ];
        for draft in &drafts {
            let payload = RelayPayload::from_draft(draft);
            assert_eq!(payload.reply_to, draft.email);
            assert!(payload.subject.contains(&draft.name));
        }
    }

    #[test]
    fn test_email_is_trimmed() {
        let draft = ContactFormDraft::new("Ada", "  ada@example.com\n", "Hi");
        assert!(draft.validate().is_ok());

        let payload = RelayPayload::from_draft(&draft);
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.reply_to, "ada@example.com");
    }
}
