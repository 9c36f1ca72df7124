//! Contact form field values.

use folio_core::text;
use serde::{Deserialize, Serialize};

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form control name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Label shown above the control.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => text::NAME_LABEL,
            Field::Email => text::EMAIL_LABEL,
            Field::Message => text::MESSAGE_LABEL,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a draft cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("email is not an address: {0:?}")]
    InvalidEmail(String),
}

/// The contact form's current field values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormDraft {
    /// Create a draft from field values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Get a field value.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replace a field value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Required-field check run before a submission is attempted.
    ///
    /// Mirrors what the browser enforces on `required` controls and
    /// `type="email"`: no blank fields, and an email of the form
    /// `local@domain` without whitespace.
    pub fn validate(&self) -> Result<(), DraftError> {
        for field in Field::ALL {
            if self.get(field).trim().is_empty() {
                return Err(DraftError::Missing(field));
            }
        }

        let email = self.email.trim();
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !email.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(DraftError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}
