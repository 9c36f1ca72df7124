//! User-facing contact form text.
//!
//! Shared by the submission controller and the rendered form so the two
//! never disagree.

pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending…";
pub const SENT_NOTICE: &str = "Message sent ✅ I’ll reply soon.";
pub const ERROR_NOTICE: &str = "Something went wrong. Please try again or email me directly.";

pub const NAME_LABEL: &str = "Your Name";
pub const EMAIL_LABEL: &str = "Your Email";
pub const MESSAGE_LABEL: &str = "Your Message";

/// Shown on a required field left blank or whitespace-only.
pub const REQUIRED_NOTICE: &str = "Please fill out this field.";

/// Prefix of the relay message subject; the sender's name follows.
pub const SUBJECT_PREFIX: &str = "Portfolio message from";
