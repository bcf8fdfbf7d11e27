//! Contact-form submission model.
//!
//! A submission arrives as untrusted JSON; `SubmissionDraft` accepts any subset
//! of the fields so that presence checking is an explicit validation step
//! rather than a deserialization failure.

use crate::error::{RelayError, RelayResult};
use serde::{Deserialize, Serialize};

/// Raw submission payload as sent by the form client.
///
/// All fields are optional at this stage; `validate` turns a draft into a
/// well-formed [`ContactSubmission`] or reports the missing fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmissionDraft {
    /// Submitter's name
    pub name: Option<String>,

    /// Submitter's reply address
    pub email: Option<String>,

    /// Free-form message body
    pub message: Option<String>,
}

impl SubmissionDraft {
    /// Validate that all three fields are present and non-empty.
    ///
    /// Whitespace-only values count as empty. No length bounds and no email
    /// format validation beyond presence.
    pub fn validate(self) -> RelayResult<ContactSubmission> {
        match (
            Self::non_empty(self.name),
            Self::non_empty(self.email),
            Self::non_empty(self.message),
        ) {
            (Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
                name,
                email,
                message,
            }),
            _ => Err(RelayError::MissingFields),
        }
    }

    fn non_empty(field: Option<String>) -> Option<String> {
        field.filter(|value| !value.trim().is_empty())
    }
}

/// A well-formed contact submission.
///
/// Exists only for the duration of one request; nothing is persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Submitter's name (non-empty)
    pub name: String,

    /// Submitter's reply address (non-empty, not format-validated)
    pub email: String,

    /// Free-form message body (non-empty)
    pub message: String,
}
