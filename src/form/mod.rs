//! Form client: turns one submit interaction into exactly one relay request
//! and one rendered outcome.
//!
//! Mirrors the site's submit handler: suppress the default submission, enter
//! pending state, POST the three fields as JSON, then render success (and
//! clear the form), the server-provided error message, or the generic
//! fallback. The pending state is released on every path by the guard.

pub mod ui;

pub use ui::{ContactForm, FormStatus, PendingGuard};

use crate::error::SubmitError;
use serde_json::{json, Value};
use std::sync::Arc;

/// Status copy shown after a delivered submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll be in touch soon.";

/// Status copy when the request failed or the server gave no message.
pub const FALLBACK_MESSAGE: &str =
    "Oops! Something went wrong. Please try emailing directly.";

/// HTTP client for the relay endpoint.
pub struct FormClient {
    /// Full URL of the relay endpoint
    endpoint: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl FormClient {
    /// Create a client posting to the given relay endpoint URL.
    ///
    /// No request timeout is configured; settlement relies on the agent's
    /// defaults, and there is no cancellation once a submission is sent.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().build();

        Self {
            endpoint: endpoint.into(),
            agent: Arc::new(agent),
        }
    }

    /// Handle one submit event.
    ///
    /// No-op while a submission is pending. Otherwise sends exactly one
    /// request and renders the outcome into the form; the pending state is
    /// guaranteed released when this returns, whatever the outcome.
    pub fn submit(&self, form: &mut ContactForm) {
        let Some(mut guard) = PendingGuard::begin(form) else {
            return;
        };

        let payload = {
            let form = guard.form();
            json!({
                "name": form.name,
                "email": form.email,
                "message": form.message,
            })
        };

        match self.post_submission(&payload) {
            Ok(()) => {
                let form = guard.form();
                form.set_status(FormStatus::Success(SUCCESS_MESSAGE.to_string()));
                form.clear_fields();
            }
            Err(SubmitError::Rejected(message)) => {
                guard.form().set_status(FormStatus::Error(message));
            }
            Err(SubmitError::NetworkFailure) => {
                guard
                    .form()
                    .set_status(FormStatus::Error(FALLBACK_MESSAGE.to_string()));
            }
        }
    }

    /// POST the payload to the relay; classify the outcome.
    fn post_submission(&self, payload: &Value) -> Result<(), SubmitError> {
        let result = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(payload);

        match result {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(_, response)) => {
                let text = response.into_string().unwrap_or_default();
                let message =
                    extract_error_message(&text).unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
                Err(SubmitError::Rejected(message))
            }
            Err(ureq::Error::Transport(_)) => Err(SubmitError::NetworkFailure),
        }
    }
}

/// Pull a display message out of a relay error body.
///
/// Accepts both `{"error": "..."}` and `{"error": {"message": "..."}}`.
fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match &value["error"] {
        Value::String(message) => Some(message.clone()),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
